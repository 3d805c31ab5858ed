//! Save/load tests.
//!
//! These verify that a game saved mid-play resumes identically, and that
//! persistence failures are reported to the listener without disturbing
//! the running game.

use war_engine::cards::Card;
use war_engine::core::{PlayerId, WarConfig};
use war_engine::events::{EventLog, WarEvent};
use war_engine::rules::{Phase, WarGame};
use war_engine::storage;

fn cards(names: &[&str]) -> Vec<Card> {
    names.iter().map(|s| s.parse().unwrap()).collect()
}

fn engine(config: WarConfig) -> WarGame<EventLog> {
    WarGame::new(config, EventLog::new())
}

/// Play `steps` driver steps (mobilize when at war, otherwise reveal).
fn play(game: &mut WarGame<EventLog>, steps: usize) {
    for _ in 0..steps {
        if game.is_war() {
            game.resolve_war().unwrap();
        } else {
            game.advance_turn().unwrap();
        }
    }
}

/// A saved game continues exactly like the original.
#[test]
fn test_saved_game_resumes_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.bin");

    let mut original = engine(WarConfig::new().with_seed(11));
    original.new_game();
    play(&mut original, 40);

    original.save_to(&path);
    assert_eq!(original.listener().last(), Some(&WarEvent::GameSave));

    let mut resumed = engine(WarConfig::new().with_seed(999));
    resumed.load_from(&path);
    assert_eq!(resumed.listener().events(), &[WarEvent::GameLoad]);
    assert_eq!(resumed.snapshot(), original.snapshot());

    original.listener_mut().drain();
    resumed.listener_mut().drain();
    play(&mut original, 200);
    play(&mut resumed, 200);

    assert_eq!(resumed.snapshot(), original.snapshot());
    assert_eq!(resumed.listener().events(), original.listener().events());
}

/// A loaded game deals the same next game as the one that was saved.
#[test]
fn test_loaded_game_deals_like_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deal.bin");

    let mut original = engine(WarConfig::new().with_seed(11));
    original.new_game();
    original.save_to(&path);

    let mut loaded = engine(WarConfig::new().with_seed(11));
    loaded.load_from(&path);

    original.new_game();
    loaded.new_game();
    assert_eq!(loaded.snapshot(), original.snapshot());

    let mut fresh = engine(WarConfig::new().with_seed(11));
    fresh.new_game();
    assert_ne!(loaded.snapshot(), fresh.snapshot());
}

/// A game saved in the middle of a war resumes in the war phase.
#[test]
fn test_save_during_war() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("war.bin");

    let mut game = engine(WarConfig::new().with_seed(1));
    game.new_game_with_decks(cards(&["h8", "s2", "h5"]), cards(&["d8", "c3", "c9"]));
    game.advance_turn().unwrap();
    game.resolve_war().unwrap();
    game.save_to(&path);

    let mut loaded = engine(WarConfig::new().with_seed(2));
    loaded.load_from(&path);

    assert_eq!(loaded.phase(), Phase::War);
    assert_eq!(loaded.pool().len(), 4);
    assert!(!loaded.last_mobilized(PlayerId::FIRST).unwrap().is_face_up());

    loaded.advance_turn().unwrap();
    assert_eq!(loaded.player2().cards_left(), 6);
}

/// A finished game loads as finished, with its winner.
#[test]
fn test_save_finished_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("over.bin");

    let mut game = engine(WarConfig::new().with_seed(1));
    game.new_game_with_decks(cards(&["h8"]), Vec::new());
    game.advance_turn().unwrap();
    game.save_to(&path);

    let mut loaded = engine(WarConfig::new().with_seed(1));
    loaded.load_from(&path);

    assert_eq!(loaded.phase(), Phase::Over);
    assert_eq!(loaded.winner(), Some(PlayerId::FIRST));

    loaded.advance_turn().unwrap();
    assert_eq!(loaded.listener().events(), &[WarEvent::GameLoad]);
}

/// `save_game` / `load_game` use the configured path.
#[test]
fn test_configured_save_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("slot1.bin");
    let config = WarConfig::new().with_seed(5).with_save_path(&path);

    let mut game = engine(config.clone());
    game.new_game();
    play(&mut game, 10);
    game.save_game();
    assert!(path.exists());

    let mut other = engine(config);
    other.load_game();
    assert_eq!(other.snapshot(), game.snapshot());
}

/// A missing save file reports an error and leaves the game running.
#[test]
fn test_load_error_keeps_game() {
    let dir = tempfile::tempdir().unwrap();

    let mut game = engine(WarConfig::new().with_seed(3));
    game.new_game();
    play(&mut game, 5);
    let before = game.snapshot();
    game.listener_mut().drain();

    game.load_from(dir.path().join("nope.bin"));

    assert_eq!(game.listener().events(), &[WarEvent::GameLoadError]);
    assert_eq!(game.snapshot(), before);
}

/// A corrupt save file reports an error.
#[test]
fn test_load_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.bin");
    std::fs::write(&path, b"definitely not a game").unwrap();

    let mut game = engine(WarConfig::new().with_seed(3));
    game.load_from(&path);

    assert_eq!(game.listener().events(), &[WarEvent::GameLoadError]);
    assert_eq!(game.phase(), Phase::NotStarted);
}

/// A save file holding an impossible state is rejected.
#[test]
fn test_load_invalid_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.bin");

    let mut source = engine(WarConfig::new().with_seed(3));
    source.new_game();
    let mut snapshot = source.snapshot();
    snapshot.war_in_progress = true;
    std::fs::write(&path, storage::encode(&snapshot).unwrap()).unwrap();

    let mut game = engine(WarConfig::new().with_seed(3));
    game.load_from(&path);
    assert_eq!(game.listener().events(), &[WarEvent::GameLoadError]);
}

/// A save that cannot be written reports an error.
#[test]
fn test_save_error_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"a file, not a directory").unwrap();

    let mut game = engine(WarConfig::new().with_seed(3));
    game.new_game();
    let before = game.snapshot();
    game.listener_mut().drain();

    game.save_to(blocker.join("game.bin"));

    assert_eq!(game.listener().events(), &[WarEvent::GameSaveError]);
    assert_eq!(game.snapshot(), before);
}
