//! Game event types.
//!
//! `WarEvent` is the tagged form of every notification the engine emits.
//! Presenters that prefer matching on one enum over implementing each
//! `GameListener` method can collect these through an `EventLog`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// A state transition reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarEvent {
    /// A new game was dealt.
    GameStart,
    /// Both players revealed their top card.
    TurnStart { card1: Card, card2: Card },
    /// The revealed cards tied; a war begins (or escalates).
    WarStart,
    /// Both players put a card face down into the pool.
    WarPreparation { card1: Card, card2: Card },
    /// A war was decided.
    WarEnd,
    /// A turn was decided and the pool awarded to `winner`.
    TurnEnd { card1: Card, card2: Card, winner: PlayerId },
    /// A player ran out of cards.
    GameOver { winner: PlayerId },
    /// The game was saved.
    GameSave,
    /// Saving failed.
    GameSaveError,
    /// A saved game was restored.
    GameLoad,
    /// Loading failed; the running game is unchanged.
    GameLoadError,
}

impl WarEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WarEvent::GameStart => "game_start",
            WarEvent::TurnStart { .. } => "turn_start",
            WarEvent::WarStart => "war_start",
            WarEvent::WarPreparation { .. } => "war_preparation",
            WarEvent::WarEnd => "war_end",
            WarEvent::TurnEnd { .. } => "turn_end",
            WarEvent::GameOver { .. } => "game_over",
            WarEvent::GameSave => "game_save",
            WarEvent::GameSaveError => "game_save_error",
            WarEvent::GameLoad => "game_load",
            WarEvent::GameLoadError => "game_load_error",
        }
    }

    /// The winner carried by `TurnEnd` and `GameOver`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            WarEvent::TurnEnd { winner, .. } | WarEvent::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for WarEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarEvent::TurnStart { card1, card2 } | WarEvent::WarPreparation { card1, card2 } => {
                write!(f, "{}({} vs {})", self.name(), card1, card2)
            }
            WarEvent::TurnEnd { card1, card2, winner } => {
                write!(f, "{}({} vs {}, {})", self.name(), card1, card2, winner)
            }
            WarEvent::GameOver { winner } => write!(f, "{}({})", self.name(), winner),
            _ => f.write_str(self.name()),
        }
    }
}
