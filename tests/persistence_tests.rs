//! The frame loop's persistence contract, exercised through the public
//! facade: a new record reaches the disk the moment it happens, and
//! nothing else touches the file.

use tui_flappy::core::{Session, SessionEvents};
use tui_flappy::effects::{persist, react};
use tui_flappy::score::ScoreStore;
use tui_flappy::types::SessionEvent;

fn events(items: &[SessionEvent]) -> SessionEvents {
    let mut out = SessionEvents::new();
    for item in items {
        out.push(*item);
    }
    out
}

#[test]
fn test_record_is_on_disk_before_the_run_ends() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.txt"));
    // Session state right after the tick that set a record of 1.
    let session = Session::new(1, 1);
    let mut persisted = 0;

    // The batch that scoring tick emits.
    react(
        &store,
        &mut persisted,
        &session,
        None,
        &events(&[SessionEvent::Scored, SessionEvent::NewRecord(1)]),
    );

    // Still mid-run, yet the record is already durable.
    assert_eq!(store.load(), 1);
}

#[test]
fn test_record_advances_on_disk_with_each_new_record_event() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.txt"));
    let mut persisted = 0;

    for n in 1..=3u32 {
        react(
            &store,
            &mut persisted,
            &Session::new(1, n),
            None,
            &events(&[SessionEvent::Scored, SessionEvent::NewRecord(n)]),
        );
        assert_eq!(store.load(), n);
    }
}

#[test]
fn test_game_over_without_a_record_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.txt"));
    store.save(10).unwrap();
    let mut persisted = 10;

    // A run that ended below the standing record.
    react(
        &store,
        &mut persisted,
        &Session::new(1, 10),
        None,
        &events(&[SessionEvent::GameOver]),
    );

    assert_eq!(store.load(), 10);
    assert_eq!(persisted, 10);
}

#[test]
fn test_quit_time_persist_is_a_no_op_when_records_were_flushed() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("highscore.txt"));
    let session = Session::new(1, 4);
    let mut persisted = 0;

    react(
        &store,
        &mut persisted,
        &session,
        None,
        &events(&[SessionEvent::NewRecord(4)]),
    );
    let written = std::fs::metadata(store.path()).unwrap().modified().unwrap();

    // The exit path's final write finds nothing left to do.
    persist(&store, &mut persisted, &session);
    assert_eq!(store.load(), 4);
    assert_eq!(
        std::fs::metadata(store.path()).unwrap().modified().unwrap(),
        written
    );
}
