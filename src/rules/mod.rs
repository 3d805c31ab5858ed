//! Game rules: the War state machine.
//!
//! `WarGame` owns the players and the pool and is the only thing that
//! mutates them. It reports every transition to a `GameListener` and can
//! be captured into, or rebuilt from, a `GameSnapshot`.

pub mod engine;
pub mod phase;
pub mod snapshot;

pub use engine::WarGame;
pub use phase::Phase;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};
