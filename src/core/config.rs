//! Game configuration.
//!
//! `WarConfig` is handed to the engine at construction:
//! - Player names shown by presenters
//! - Optional fixed seed for reproducible deals
//! - Default save location used by `save_game` / `load_game`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "war-saves/game.bin";

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use war_engine::core::WarConfig;
///
/// let config = WarConfig::new()
///     .with_names("Alice", "Bob")
///     .with_seed(42);
///
/// assert_eq!(config.player1_name, "Alice");
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarConfig {
    /// Name of the first player.
    pub player1_name: String,

    /// Name of the second player.
    pub player2_name: String,

    /// Seed for deck shuffling. `None` picks a fresh random seed.
    pub seed: Option<u64>,

    /// Where `save_game` writes and `load_game` reads.
    pub save_path: PathBuf,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            seed: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl WarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both player names.
    #[must_use]
    pub fn with_names(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default save file.
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }
}
