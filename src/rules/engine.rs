//! The War engine.
//!
//! `WarGame` owns both players, the contested pool and the phase, and is
//! driven one call at a time:
//!
//! - `new_game`: shuffle a standard deck, deal 26 cards each
//! - `advance_turn`: reveal one card each and settle the comparison
//! - `resolve_war`: during a war, add one face-down card each to the pool
//!
//! A war takes two calls on purpose: `resolve_war` for the face-down pair
//! and `advance_turn` for the deciding face-up pair, so presenters see both
//! moments. A further tie keeps the war going and the pool keeps growing.
//!
//! ## Silent no-ops
//!
//! Operations that do not apply to the current phase (anything before the
//! first `new_game`, anything after the game is over, `resolve_war` when no
//! war is pending) do nothing and notify nobody. Callers that need to know
//! should check [`WarGame::phase`]. Running out of cards is not an error;
//! it ends the game and fires `on_game_over`.
//!
//! ## Example
//!
//! ```
//! use war_engine::core::WarConfig;
//! use war_engine::events::NullListener;
//! use war_engine::rules::{Phase, WarGame};
//!
//! let mut game = WarGame::new(WarConfig::new().with_seed(7), NullListener);
//! game.new_game();
//!
//! let mut turns = 0;
//! while game.phase() != Phase::Over && turns < 10_000 {
//!     if game.phase() == Phase::War {
//!         game.resolve_war().unwrap();
//!     }
//!     game.advance_turn().unwrap();
//!     turns += 1;
//! }
//! assert!(turns > 0);
//! ```

use std::cmp::Ordering;
use std::path::Path;

use log::{debug, error, info};

use super::phase::Phase;
use super::snapshot::{GameSnapshot, SNAPSHOT_VERSION};
use crate::cards::Card;
use crate::core::{GameRng, Player, PlayerId, WarConfig, WarError};
use crate::events::{GameListener, NullListener};
use crate::storage::{self, SaveError};

/// Two-player War state machine.
///
/// Not thread-safe by itself: one operation at a time. Drivers that pace
/// turns from another thread must serialize their calls.
pub struct WarGame<L: GameListener = NullListener> {
    config: WarConfig,
    listener: L,
    rng: GameRng,
    player1: Player,
    player2: Player,
    /// Cards removed from both decks and not yet awarded, in draw order.
    pool: Vec<Card>,
    phase: Phase,
    last_drawn1: Option<Card>,
    last_drawn2: Option<Card>,
    last_mobilized1: Option<Card>,
    last_mobilized2: Option<Card>,
    winner: Option<PlayerId>,
}

impl<L: GameListener> WarGame<L> {
    /// Create an engine in the `NotStarted` phase.
    pub fn new(config: WarConfig, listener: L) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("Created engine with seed {}", rng.seed());

        Self {
            player1: Player::empty(PlayerId::FIRST, config.player1_name.clone()),
            player2: Player::empty(PlayerId::SECOND, config.player2_name.clone()),
            config,
            listener,
            rng,
            pool: Vec::new(),
            phase: Phase::NotStarted,
            last_drawn1: None,
            last_drawn2: None,
            last_mobilized1: None,
            last_mobilized2: None,
            winner: None,
        }
    }

    // === Lifecycle ===

    /// Discard the current game and deal a new one.
    ///
    /// Shuffles the 52-card deck with the engine's RNG and gives each player
    /// half of it. Accepted in every phase.
    pub fn new_game(&mut self) {
        let mut deck = Card::all();
        self.rng.shuffle(&mut deck);

        let deck2 = deck.split_off(deck.len() / 2);
        self.deal(deck, deck2);
    }

    /// Start a game from prepared decks (first card of each is the top).
    ///
    /// Behaves like [`WarGame::new_game`] apart from the shuffle. Decks may
    /// be uneven or empty; an empty deck ends the game on the next turn.
    pub fn new_game_with_decks(
        &mut self,
        deck1: impl IntoIterator<Item = Card>,
        deck2: impl IntoIterator<Item = Card>,
    ) {
        self.deal(deck1.into_iter().collect(), deck2.into_iter().collect());
    }

    fn deal(&mut self, deck1: Vec<Card>, deck2: Vec<Card>) {
        self.pool.clear();
        self.last_drawn1 = None;
        self.last_drawn2 = None;
        self.last_mobilized1 = None;
        self.last_mobilized2 = None;
        self.winner = None;

        self.player1 = Player::new(PlayerId::FIRST, self.config.player1_name.clone(), deck1);
        self.player2 = Player::new(PlayerId::SECOND, self.config.player2_name.clone(), deck2);
        self.phase = Phase::Playing;

        info!(
            "New game: {} has {} cards, {} has {} cards",
            self.player1.name(),
            self.player1.cards_left(),
            self.player2.name(),
            self.player2.cards_left()
        );
        self.listener.on_game_start();
    }

    // === Turns ===

    /// Reveal the top card of each player and settle the comparison.
    ///
    /// - Higher rank takes the whole pool (ending any war).
    /// - Equal ranks start or continue a war; the pool stays put.
    /// - A player without cards loses; nothing is drawn.
    ///
    /// No-op outside `Playing` and `War`.
    ///
    /// # Errors
    ///
    /// [`WarError::EmptyDeck`] only if a deck is empty after the shortage
    /// check passed, which would be an engine bug.
    pub fn advance_turn(&mut self) -> Result<(), WarError> {
        if !self.phase.is_active() {
            debug!("advance_turn ignored in {:?}", self.phase);
            return Ok(());
        }
        if !self.game_continues() {
            return Ok(());
        }

        let (mut card1, mut card2) = self.draw_pair()?;
        card1.set_face_up(true);
        card2.set_face_up(true);

        self.pool.push(card1);
        self.pool.push(card2);
        self.last_drawn1 = Some(card1);
        self.last_drawn2 = Some(card2);

        self.listener.on_turn_start(&card1, &card2);

        let winner = match card1.compare(&card2).cmp(&0) {
            Ordering::Greater => PlayerId::FIRST,
            Ordering::Less => PlayerId::SECOND,
            Ordering::Equal => {
                if !self.game_continues() {
                    return Ok(());
                }
                debug!("{} ties {}: war with {} cards in the pool", card1, card2, self.pool.len());
                self.phase = Phase::War;
                self.listener.on_war_start();
                return Ok(());
            }
        };

        let won = self.pool.len();
        let pool = std::mem::take(&mut self.pool);
        self.player_mut(winner).add_cards(pool);
        debug!("{} vs {}: {} takes {} cards", card1, card2, winner, won);

        if self.phase == Phase::War {
            self.phase = Phase::Playing;
            self.listener.on_war_end();
        }

        let winner = if winner == PlayerId::FIRST {
            &self.player1
        } else {
            &self.player2
        };
        self.listener.on_turn_end(&card1, &card2, winner);
        Ok(())
    }

    /// Put one face-down card from each player into the pool.
    ///
    /// Does not decide the war: the next [`WarGame::advance_turn`] draws the
    /// deciding pair. A player who cannot mobilize loses. No-op unless the
    /// phase is `War`.
    ///
    /// # Errors
    ///
    /// Same as [`WarGame::advance_turn`].
    pub fn resolve_war(&mut self) -> Result<(), WarError> {
        if self.phase != Phase::War {
            debug!("resolve_war ignored in {:?}", self.phase);
            return Ok(());
        }
        if !self.game_continues() {
            return Ok(());
        }

        let (mut card1, mut card2) = self.draw_pair()?;
        card1.set_face_up(false);
        card2.set_face_up(false);

        self.pool.push(card1);
        self.pool.push(card2);
        self.last_mobilized1 = Some(card1);
        self.last_mobilized2 = Some(card2);

        debug!("War preparation: pool now holds {} cards", self.pool.len());
        self.listener.on_war_preparation(&card1, &card2);
        Ok(())
    }

    /// End the game if either player is out of cards.
    ///
    /// Player 1 is checked first, so if both are empty player 2 wins.
    fn game_continues(&mut self) -> bool {
        let winner = if !self.player1.has_card() {
            PlayerId::SECOND
        } else if !self.player2.has_card() {
            PlayerId::FIRST
        } else {
            return true;
        };
        self.end_game(winner);
        false
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.phase = Phase::Over;
        self.winner = Some(winner);

        let winner = if winner == PlayerId::FIRST {
            &self.player1
        } else {
            &self.player2
        };
        info!("Game over: {} wins with {} cards", winner.name(), winner.cards_left());
        self.listener.on_game_over(winner);
    }

    fn draw_pair(&mut self) -> Result<(Card, Card), WarError> {
        let card1 = self.player1.draw_card()?;
        let card2 = self.player2.draw_card()?;
        Ok((card1, card2))
    }

    fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        if player == PlayerId::FIRST {
            &mut self.player1
        } else {
            &mut self.player2
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True before the first deal and after a player runs out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    #[must_use]
    pub fn is_war(&self) -> bool {
        self.phase == Phase::War
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        if player == PlayerId::FIRST {
            &self.player1
        } else {
            &self.player2
        }
    }

    #[must_use]
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    #[must_use]
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Contested cards, in the order they were drawn.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Face-up card `player` drew last.
    #[must_use]
    pub fn last_drawn(&self, player: PlayerId) -> Option<&Card> {
        if player == PlayerId::FIRST {
            self.last_drawn1.as_ref()
        } else {
            self.last_drawn2.as_ref()
        }
    }

    /// Face-down card `player` put into the most recent war.
    ///
    /// Kept after the war ends so it can be revealed.
    #[must_use]
    pub fn last_mobilized(&self, player: PlayerId) -> Option<&Card> {
        if player == PlayerId::FIRST {
            self.last_mobilized1.as_ref()
        } else {
            self.last_mobilized2.as_ref()
        }
    }

    /// Winner of a finished game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Cards held by both players plus the pool.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player1.cards_left() + self.player2.cards_left() + self.pool.len()
    }

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consume the engine, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    // === Snapshots ===

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            pool: self.pool.clone(),
            game_over: self.is_game_over(),
            war_in_progress: self.is_war(),
            last_drawn1: self.last_drawn1,
            last_drawn2: self.last_drawn2,
            last_mobilized1: self.last_mobilized1,
            last_mobilized2: self.last_mobilized2,
            winner: self.winner,
            rng: Some(self.rng.state()),
        }
    }

    /// Replace the whole state with `snapshot`.
    ///
    /// The phase becomes `Over`, `War` or `Playing` from the snapshot's
    /// flags. A recorded shuffle position replaces the engine's own, so
    /// later deals continue the saved sequence. Nothing is notified. On
    /// error the engine is unchanged.
    pub fn restore(&mut self, snapshot: GameSnapshot) -> Result<(), WarError> {
        snapshot.validate()?;

        self.phase = snapshot.phase();
        self.player1 = snapshot.player1;
        self.player2 = snapshot.player2;
        self.pool = snapshot.pool;
        self.last_drawn1 = snapshot.last_drawn1;
        self.last_drawn2 = snapshot.last_drawn2;
        self.last_mobilized1 = snapshot.last_mobilized1;
        self.last_mobilized2 = snapshot.last_mobilized2;
        self.winner = snapshot.winner;
        if let Some(rng) = &snapshot.rng {
            self.rng = GameRng::from_state(rng);
        }

        debug!("Restored snapshot in phase {:?}", self.phase);
        Ok(())
    }

    // === Persistence ===

    /// Save to the configured save path.
    pub fn save_game(&mut self) {
        let path = self.config.save_path.clone();
        self.save_to(path);
    }

    /// Save to `path`, reporting the outcome to the listener.
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) {
        match storage::save_snapshot(path, &self.snapshot()) {
            Ok(()) => self.listener.on_game_save(),
            Err(e) => {
                error!("Failed to save game: {e}");
                self.listener.on_game_save_error();
            }
        }
    }

    /// Load from the configured save path.
    pub fn load_game(&mut self) {
        let path = self.config.save_path.clone();
        self.load_from(path);
    }

    /// Load from `path`, reporting the outcome to the listener.
    ///
    /// A failed load leaves the running game untouched.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) {
        let loaded = storage::load_snapshot(path)
            .and_then(|snapshot| self.restore(snapshot).map_err(SaveError::from));

        match loaded {
            Ok(()) => self.listener.on_game_load(),
            Err(e) => {
                error!("Failed to load game: {e}");
                self.listener.on_game_load_error();
            }
        }
    }
}
