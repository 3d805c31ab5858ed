//! Persistence for game snapshots.
//!
//! The engine exposes `GameSnapshot`; this module turns snapshots into
//! files and back. `WarGame::save_to` / `WarGame::load_from` wrap these
//! functions and report the outcome to the listener instead of returning
//! errors.

mod file;

pub use file::{decode, encode, load_snapshot, save_snapshot, SaveError};
