//! Player identification and decks.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two players of a game.
//!
//! ## Player
//!
//! A named participant owning an ordered deck. Cards are drawn from the top
//! (front) and won cards go to the bottom (back) in the order they were
//! won. The deck is an `im::Vector`, so cloning a player for a snapshot is
//! O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::WarError;
use crate::cards::Card;

/// Seat identifier: `PlayerId::FIRST` or `PlayerId::SECOND`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player (player 1).
    pub const FIRST: PlayerId = PlayerId(0);
    /// The second player (player 2).
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use war_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        if self.0 == 0 {
            Self::SECOND
        } else {
            Self::FIRST
        }
    }

    /// Both seats, first player first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A participant in a game of War.
///
/// Invariant: `cards_left() == deck length` and `has_card() == cards_left() > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Index 0 is the top of the deck.
    deck: Vector<Card>,
}

impl Player {
    /// Create a player holding `deck`, where the first card is the top.
    pub fn new(id: PlayerId, name: impl Into<String>, deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            name: name.into(),
            deck: deck.into_iter().collect(),
        }
    }

    /// Create a player with no cards.
    pub fn empty(id: PlayerId, name: impl Into<String>) -> Self {
        Self::new(id, name, std::iter::empty())
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Does the player have any cards left?
    #[must_use]
    pub fn has_card(&self) -> bool {
        !self.deck.is_empty()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    /// Remove and return the top card.
    ///
    /// Fails with [`WarError::EmptyDeck`] if the deck is empty; check
    /// [`Player::has_card`] first.
    pub fn draw_card(&mut self) -> Result<Card, WarError> {
        self.deck.pop_front().ok_or_else(|| WarError::EmptyDeck {
            player: self.name.clone(),
        })
    }

    /// Append cards to the bottom, keeping their given order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.deck.extend(cards);
    }

    /// Peek at the top card.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.deck.front()
    }

    /// Iterate over the deck from top to bottom.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck.iter()
    }
}
