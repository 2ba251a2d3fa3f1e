//! Session-event fan-out: sounds and high-score writes.
//!
//! The core returns [`SessionEvent`] values instead of doing I/O; this
//! module is the single place that turns them into side effects. It lives
//! in the library so the persistence contract is testable without a
//! terminal or an audio device.

use crate::audio::{Audio, Cue};
use tui_flappy_core::{Session, SessionEvents};
use tui_flappy_score::ScoreStore;
use tui_flappy_types::SessionEvent;

/// React to one batch of session events.
///
/// `persisted` tracks what is already on disk so repeated events never
/// rewrite an unchanged record. A new record is written the moment it
/// happens, not deferred to game over: the file must stay current even if
/// the process dies mid-run.
pub fn react(
    store: &ScoreStore,
    persisted: &mut u32,
    session: &Session,
    audio: Option<&Audio>,
    events: &SessionEvents,
) {
    for event in events {
        if let Some(audio) = audio {
            match event {
                SessionEvent::Flapped => audio.play(Cue::Jump),
                SessionEvent::Scored => audio.play(Cue::Score),
                SessionEvent::GameOver => audio.play(Cue::Hit),
                SessionEvent::NewRecord(_) => {}
            }
        }
        if matches!(event, SessionEvent::NewRecord(_)) {
            persist(store, persisted, session);
        }
    }
}

/// Write the high score if it advanced past what is already on disk.
/// A failed write is not worth crashing the game over.
pub fn persist(store: &ScoreStore, persisted: &mut u32, session: &Session) {
    if session.high_score() > *persisted {
        if store.save(session.high_score()).is_ok() {
            *persisted = session.high_score();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(items: &[SessionEvent]) -> SessionEvents {
        let mut out = SessionEvents::new();
        for item in items {
            out.push(*item);
        }
        out
    }

    #[test]
    fn test_new_record_event_writes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        let session = Session::new(1, 5);
        let mut persisted = 0;

        react(
            &store,
            &mut persisted,
            &session,
            None,
            &events(&[SessionEvent::Scored, SessionEvent::NewRecord(5)]),
        );

        assert_eq!(store.load(), 5);
        assert_eq!(persisted, 5);
    }

    #[test]
    fn test_events_without_a_record_do_not_touch_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        let session = Session::new(1, 5);
        let mut persisted = 5;

        react(
            &store,
            &mut persisted,
            &session,
            None,
            &events(&[
                SessionEvent::Flapped,
                SessionEvent::Scored,
                SessionEvent::GameOver,
            ]),
        );

        assert!(!store.path().exists());
        assert_eq!(persisted, 5);
    }

    #[test]
    fn test_persist_skips_when_disk_is_already_current() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("highscore.txt"));
        let session = Session::new(1, 7);
        let mut persisted = 7;

        persist(&store, &mut persisted, &session);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_write_leaves_persisted_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("no/such/dir/highscore.txt"));
        let session = Session::new(1, 9);
        let mut persisted = 0;

        persist(&store, &mut persisted, &session);
        // Next call may retry; nothing pretends the write happened.
        assert_eq!(persisted, 0);
    }
}
