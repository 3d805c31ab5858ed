//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks the `rules` engine is assembled from.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{WarConfig, DEFAULT_SAVE_PATH};
pub use error::WarError;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
