//! Engine notifications.
//!
//! ## Key Types
//!
//! - `GameListener`: Capability trait with one method per notification
//! - `WarEvent`: Tagged enum form of the same notifications
//! - `EventLog`: Listener that records `WarEvent`s
//! - `NullListener`: Listener that ignores everything
//!
//! The engine never reads anything back from its listener.

pub mod event;
pub mod listener;

pub use event::WarEvent;
pub use listener::{EventLog, GameListener, NullListener};
