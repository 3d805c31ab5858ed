//! # war-engine
//!
//! A game-state engine for the two-player card game War.
//!
//! ## Rules
//!
//! Both players reveal their top card; the higher rank takes both cards to
//! the bottom of their deck. Equal ranks start a war: each player adds a
//! face-down card, then reveals again, and the winner takes the whole pool.
//! A player who cannot draw loses.
//!
//! ## Design Principles
//!
//! 1. **Driven, not running**: The engine never loops or sleeps. A driver
//!    calls `new_game`, `advance_turn` and `resolve_war` one at a time.
//!
//! 2. **Observable**: Every transition is reported to a `GameListener`,
//!    synchronously and in order.
//!
//! 3. **Snapshots, not live state**: Persistence works on an owned
//!    `GameSnapshot`, never on the engine itself.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Ranks, suits and cards
//! - `events`: Listener trait and tagged events
//! - `rules`: The `WarGame` state machine and snapshots
//! - `storage`: Saving and loading snapshots

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerId, WarConfig, WarError};

pub use crate::cards::{Card, Rank, Suit, STANDARD_DECK_SIZE};

pub use crate::events::{EventLog, GameListener, NullListener, WarEvent};

pub use crate::rules::{GameSnapshot, Phase, WarGame, SNAPSHOT_VERSION};

pub use crate::storage::SaveError;
