//! Engine phases.

use serde::{Deserialize, Serialize};

/// Where the engine is in its lifecycle.
///
/// ```text
/// NotStarted --new_game--> Playing --tie--> War --decided--> Playing
///                            |                |
///                            +---shortage-----+----> Over
/// ```
///
/// `new_game` is accepted from every phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but never dealt. Nothing but `new_game` or a restore acts.
    #[default]
    NotStarted,
    /// Between turns; `advance_turn` reveals the next pair.
    Playing,
    /// A tie is pending; `resolve_war` adds face-down cards and
    /// `advance_turn` reveals the deciding pair.
    War,
    /// A player ran out of cards. Terminal until the next `new_game`.
    Over,
}

impl Phase {
    /// Can turns be played in this phase?
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Playing | Phase::War)
    }

    /// The `gameOver` flag of the engine state: true until the first deal
    /// and after a player runs out.
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, Phase::NotStarted | Phase::Over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert!(Phase::NotStarted.is_game_over());
        assert!(!Phase::NotStarted.is_active());
        assert!(Phase::Playing.is_active());
        assert!(Phase::War.is_active());
        assert!(!Phase::War.is_game_over());
        assert!(Phase::Over.is_game_over());
        assert_eq!(Phase::default(), Phase::NotStarted);
    }
}
