//! Error types for card construction and deck access.
//!
//! Running out of cards during play is not an error: the engine turns it
//! into a finished game. These errors only surface from direct misuse of
//! the card and deck APIs, or from a snapshot that cannot be restored.

/// Errors raised by cards, decks and snapshot validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WarError {
    #[error("card rank must be between 2 and 14, got {0}")]
    InvalidRank(u8),
    #[error("{player} has no cards left to draw")]
    EmptyDeck { player: String },
    #[error("not a card: {0:?}")]
    InvalidCard(String),
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            WarError::InvalidRank(15).to_string(),
            "card rank must be between 2 and 14, got 15"
        );
        assert_eq!(
            WarError::EmptyDeck { player: "Player 1".into() }.to_string(),
            "Player 1 has no cards left to draw"
        );
        assert_eq!(WarError::InvalidCard("z9".into()).to_string(), "not a card: \"z9\"");
    }
}
