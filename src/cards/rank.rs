//! Card ranks and suits.
//!
//! ## Rank
//!
//! Validated rank in `[2, 14]`, where 11-14 are jack, queen, king and ace.
//! Ranks alone decide who wins a turn.
//!
//! ## Suit
//!
//! The four French suits. Suits never break ties; they only make each
//! card of a standard deck unique.

use serde::{Deserialize, Serialize};

use crate::core::WarError;

/// Card rank between [`Rank::FIRST`] and [`Rank::LAST`] inclusive.
///
/// Serialized as its plain number and re-validated on deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank (two).
    pub const FIRST: u8 = 2;
    /// Highest rank (ace).
    pub const LAST: u8 = 14;

    /// Create a rank, failing with [`WarError::InvalidRank`] outside `[2, 14]`.
    ///
    /// ```
    /// use war_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::new(14).unwrap().value(), 14);
    /// assert!(Rank::new(1).is_err());
    /// assert!(Rank::new(15).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, WarError> {
        if (Self::FIRST..=Self::LAST).contains(&value) {
            Ok(Self(value))
        } else {
            Err(WarError::InvalidRank(value))
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over every rank from two to ace.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::FIRST..=Self::LAST).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = WarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Lowercase initial used by the card display form.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
        }
    }

    /// Look up a suit by its lowercase initial.
    #[must_use]
    pub fn from_initial(initial: char) -> Option<Self> {
        Self::ALL.into_iter().find(|suit| suit.initial() == initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert!(Rank::new(2).is_ok());
        assert!(Rank::new(14).is_ok());
        assert_eq!(Rank::new(0), Err(WarError::InvalidRank(0)));
        assert_eq!(Rank::new(15), Err(WarError::InvalidRank(15)));
    }

    #[test]
    fn test_rank_all() {
        let ranks: Vec<u8> = Rank::all().map(Rank::value).collect();
        assert_eq!(ranks.len(), 13);
        assert_eq!(ranks.first(), Some(&2));
        assert_eq!(ranks.last(), Some(&14));
    }

    #[test]
    fn test_rank_serde_rejects_out_of_range() {
        let rank: Rank = serde_json::from_str("10").unwrap();
        assert_eq!(rank.value(), 10);
        assert_eq!(serde_json::to_string(&rank).unwrap(), "10");

        assert!(serde_json::from_str::<Rank>("1").is_err());
    }

    #[test]
    fn test_suit_initials_round_trip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_initial(suit.initial()), Some(suit));
        }
        assert_eq!(Suit::from_initial('x'), None);
    }
}
