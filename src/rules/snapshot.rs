//! Game snapshots.
//!
//! A `GameSnapshot` is an owned copy of everything needed to resume a game.
//! The engine produces one on demand and can be rebuilt from one; how the
//! snapshot is stored is up to the caller (see `storage`).
//!
//! Decks are `im::Vector`s, so taking a snapshot does not copy cards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::cards::Card;
use crate::core::{GameRngState, Player, PlayerId, WarError};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Format version, checked on restore.
    pub version: u32,
    pub player1: Player,
    pub player2: Player,
    /// Contested cards in the order they were drawn.
    pub pool: Vec<Card>,
    pub game_over: bool,
    pub war_in_progress: bool,
    pub last_drawn1: Option<Card>,
    pub last_drawn2: Option<Card>,
    /// Most recent face-down war cards.
    #[serde(default)]
    pub last_mobilized1: Option<Card>,
    #[serde(default)]
    pub last_mobilized2: Option<Card>,
    /// Set once a finished game has a winner.
    #[serde(default)]
    pub winner: Option<PlayerId>,
    /// Shuffle position for the next `new_game`. `None` keeps the
    /// restoring engine's own RNG.
    #[serde(default)]
    pub rng: Option<GameRngState>,
}

impl GameSnapshot {
    /// The phase a restored engine ends up in.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Over
        } else if self.war_in_progress {
            Phase::War
        } else {
            Phase::Playing
        }
    }

    /// Cards held by both players plus the pool.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player1.cards_left() + self.player2.cards_left() + self.pool.len()
    }

    /// Check that the snapshot describes a reachable engine state.
    pub fn validate(&self) -> Result<(), WarError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(WarError::InvalidSnapshot("unsupported snapshot version"));
        }
        if self.player1.id() != PlayerId::FIRST || self.player2.id() != PlayerId::SECOND {
            return Err(WarError::InvalidSnapshot("players are in the wrong seats"));
        }
        if self.war_in_progress && self.game_over {
            return Err(WarError::InvalidSnapshot("war in progress in a finished game"));
        }
        if self.war_in_progress && self.pool.is_empty() {
            return Err(WarError::InvalidSnapshot("war in progress with an empty pool"));
        }
        if !self.war_in_progress && !self.game_over && !self.pool.is_empty() {
            return Err(WarError::InvalidSnapshot("cards left in the pool between turns"));
        }
        if self.winner.is_some() && !self.game_over {
            return Err(WarError::InvalidSnapshot("winner declared in an unfinished game"));
        }

        let mut seen = HashSet::with_capacity(self.total_cards());
        let all_cards = self
            .player1
            .cards()
            .chain(self.player2.cards())
            .chain(self.pool.iter());
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(WarError::InvalidSnapshot("a card appears more than once"));
            }
        }

        Ok(())
    }
}
