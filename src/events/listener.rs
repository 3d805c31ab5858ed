//! Notification sink consumed by the engine.
//!
//! The engine calls a `GameListener` synchronously, on the caller's thread,
//! for every state transition. Methods return nothing and should not block;
//! every method has an empty default so listeners implement only what they
//! render.

use super::event::WarEvent;
use crate::cards::Card;
use crate::core::Player;

/// Capability interface for observing a game.
pub trait GameListener {
    /// A new game was dealt.
    fn on_game_start(&mut self) {}

    /// Both players revealed their top card.
    fn on_turn_start(&mut self, _card1: &Card, _card2: &Card) {}

    /// The revealed cards tied. Called again if a war ties again.
    fn on_war_start(&mut self) {}

    /// Both players added a face-down card to the pool.
    fn on_war_preparation(&mut self, _card1: &Card, _card2: &Card) {}

    /// The current war was decided. Fires before `on_turn_end`.
    fn on_war_end(&mut self) {}

    /// The pool went to `winner`.
    fn on_turn_end(&mut self, _card1: &Card, _card2: &Card, _winner: &Player) {}

    /// The game finished; `winner` still has cards.
    fn on_game_over(&mut self, _winner: &Player) {}

    fn on_game_save(&mut self) {}

    fn on_game_save_error(&mut self) {}

    fn on_game_load(&mut self) {}

    fn on_game_load_error(&mut self) {}
}

impl<L: GameListener + ?Sized> GameListener for &mut L {
    fn on_game_start(&mut self) {
        (**self).on_game_start();
    }

    fn on_turn_start(&mut self, card1: &Card, card2: &Card) {
        (**self).on_turn_start(card1, card2);
    }

    fn on_war_start(&mut self) {
        (**self).on_war_start();
    }

    fn on_war_preparation(&mut self, card1: &Card, card2: &Card) {
        (**self).on_war_preparation(card1, card2);
    }

    fn on_war_end(&mut self) {
        (**self).on_war_end();
    }

    fn on_turn_end(&mut self, card1: &Card, card2: &Card, winner: &Player) {
        (**self).on_turn_end(card1, card2, winner);
    }

    fn on_game_over(&mut self, winner: &Player) {
        (**self).on_game_over(winner);
    }

    fn on_game_save(&mut self) {
        (**self).on_game_save();
    }

    fn on_game_save_error(&mut self) {
        (**self).on_game_save_error();
    }

    fn on_game_load(&mut self) {
        (**self).on_game_load();
    }

    fn on_game_load_error(&mut self) {
        (**self).on_game_load_error();
    }
}

/// Listener that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullListener;

impl GameListener for NullListener {}

/// Listener that records every notification as a [`WarEvent`].
///
/// ## Example
///
/// ```
/// use war_engine::events::{EventLog, WarEvent};
/// use war_engine::rules::WarGame;
/// use war_engine::core::WarConfig;
///
/// let mut game = WarGame::new(WarConfig::new().with_seed(1), EventLog::new());
/// game.new_game();
/// assert_eq!(game.listener().events(), &[WarEvent::GameStart]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<WarEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[WarEvent] {
        &self.events
    }

    #[must_use]
    pub fn last(&self) -> Option<&WarEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return the recorded events.
    pub fn drain(&mut self) -> Vec<WarEvent> {
        std::mem::take(&mut self.events)
    }

    fn push(&mut self, event: WarEvent) {
        self.events.push(event);
    }
}

impl GameListener for EventLog {
    fn on_game_start(&mut self) {
        self.push(WarEvent::GameStart);
    }

    fn on_turn_start(&mut self, card1: &Card, card2: &Card) {
        self.push(WarEvent::TurnStart {
            card1: *card1,
            card2: *card2,
        });
    }

    fn on_war_start(&mut self) {
        self.push(WarEvent::WarStart);
    }

    fn on_war_preparation(&mut self, card1: &Card, card2: &Card) {
        self.push(WarEvent::WarPreparation {
            card1: *card1,
            card2: *card2,
        });
    }

    fn on_war_end(&mut self) {
        self.push(WarEvent::WarEnd);
    }

    fn on_turn_end(&mut self, card1: &Card, card2: &Card, winner: &Player) {
        self.push(WarEvent::TurnEnd {
            card1: *card1,
            card2: *card2,
            winner: winner.id(),
        });
    }

    fn on_game_over(&mut self, winner: &Player) {
        self.push(WarEvent::GameOver { winner: winner.id() });
    }

    fn on_game_save(&mut self) {
        self.push(WarEvent::GameSave);
    }

    fn on_game_save_error(&mut self) {
        self.push(WarEvent::GameSaveError);
    }

    fn on_game_load(&mut self) {
        self.push(WarEvent::GameLoad);
    }

    fn on_game_load_error(&mut self) {
        self.push(WarEvent::GameLoadError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        let winner = Player::empty(PlayerId::SECOND, "Bob");
        let c1: Card = "s3".parse().unwrap();
        let c2: Card = "h5".parse().unwrap();

        log.on_game_start();
        log.on_turn_start(&c1, &c2);
        log.on_turn_end(&c1, &c2, &winner);
        log.on_game_over(&winner);

        assert_eq!(
            log.events(),
            &[
                WarEvent::GameStart,
                WarEvent::TurnStart { card1: c1, card2: c2 },
                WarEvent::TurnEnd { card1: c1, card2: c2, winner: PlayerId::SECOND },
                WarEvent::GameOver { winner: PlayerId::SECOND },
            ]
        );
    }

    #[test]
    fn test_borrowed_listener_forwards() {
        fn notify<L: GameListener>(mut listener: L) {
            listener.on_war_start();
            listener.on_game_save_error();
        }

        let mut log = EventLog::new();
        notify(&mut log);
        assert_eq!(log.events(), &[WarEvent::WarStart, WarEvent::GameSaveError]);
    }

    #[test]
    fn test_drain() {
        let mut log = EventLog::new();
        log.on_game_load();
        assert_eq!(log.len(), 1);

        assert_eq!(log.drain(), vec![WarEvent::GameLoad]);
        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }

    #[test]
    fn test_null_listener_accepts_everything() {
        let mut listener = NullListener;
        let player = Player::empty(PlayerId::FIRST, "Alice");
        listener.on_game_start();
        listener.on_game_over(&player);
    }
}
