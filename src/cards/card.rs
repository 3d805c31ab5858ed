//! Playing cards.
//!
//! A `Card` is an immutable rank and suit plus a face-up flag that only
//! matters to whoever displays it. Card identity is the rank and suit pair:
//! equality and hashing ignore the face flag, so a card keeps its identity
//! while it is flipped during war.

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rank::{Rank, Suit};
use crate::core::WarError;

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    #[serde(default = "face_up_default")]
    face_up: bool,
}

fn face_up_default() -> bool {
    true
}

impl Card {
    /// Create a face-up card.
    ///
    /// Fails with [`WarError::InvalidRank`] when `rank` is outside `[2, 14]`.
    pub fn new(rank: u8, suit: Suit) -> Result<Self, WarError> {
        Ok(Self::from_parts(Rank::new(rank)?, suit))
    }

    /// Create a face-up card from an already validated rank.
    #[must_use]
    pub const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Every unique card of a standard deck, rank-major then suit.
    ///
    /// The order is fixed; callers shuffle separately.
    ///
    /// ```
    /// use war_engine::cards::Card;
    ///
    /// let deck = Card::all();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[0].to_string(), "s2");
    /// assert_eq!(deck[51].to_string(), "d14");
    /// ```
    #[must_use]
    pub fn all() -> Vec<Card> {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for rank in Rank::all() {
            for suit in Suit::ALL {
                cards.push(Card::from_parts(rank, suit));
            }
        }
        cards
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Rank difference between this card and `other`.
    ///
    /// Positive when this card wins, negative when it loses and zero on a
    /// tie. Suits are never consulted. This is the only comparison the
    /// engine uses to settle a turn.
    #[must_use]
    pub fn compare(&self, other: &Card) -> i32 {
        i32::from(self.rank.value()) - i32::from(other.rank.value())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.rank.hash(hasher);
        self.suit.hash(hasher);
    }
}

/// Lowercase suit initial followed by the rank, e.g. `s14` for the ace of
/// spades.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.initial(), self.rank)
    }
}

/// Parses the display form only: `"s5"` is accepted, `"s05"` and `"s+5"`
/// are not.
impl FromStr for Card {
    type Err = WarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WarError::InvalidCard(s.to_string());

        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_initial).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: u8 = digits.parse().map_err(|_| invalid())?;

        Card::new(rank, suit)
    }
}
