//! Card system: ranks, suits and cards.
//!
//! ## Key Types
//!
//! - `Rank`: Validated rank in `[2, 14]` (ace high)
//! - `Suit`: Spades, clubs, hearts, diamonds
//! - `Card`: Rank + suit with a face-up flag
//!
//! `Card::all()` builds the 52-card standard deck in a fixed order.

pub mod card;
pub mod rank;

pub use card::{Card, STANDARD_DECK_SIZE};
pub use rank::{Rank, Suit};
