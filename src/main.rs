//! Terminal flappy runner (default binary).
//!
//! Fixed-timestep frame loop: render, poll input until the next tick is due,
//! then advance the simulation by exactly one tick. Session events coming
//! back from the core drive audio cues and high-score persistence; the core
//! itself never touches I/O.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::audio::Audio;
use tui_flappy::core::Session;
use tui_flappy::effects::{persist, react};
use tui_flappy::input::{map_key_event, map_mouse_event, should_quit};
use tui_flappy::score::ScoreStore;
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = ScoreStore::open_default();
    let mut session = Session::new(time_seed(), store.load());
    let mut persisted = session.high_score();

    // No audio device is not an error; the game just runs silently.
    let audio = Audio::new().ok();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frame: u64 = 0;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, frame, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
        frame += 1;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        // Records are persisted as they happen; this is a
                        // final safety write before exit.
                        persist(&store, &mut persisted, &session);
                        return Ok(());
                    }
                    let events = session.handle_press(map_key_event(key));
                    react(&store, &mut persisted, &session, audio.as_ref(), &events);
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = map_mouse_event(mouse) {
                        let events = session.handle_press(Some(action));
                        react(&store, &mut persisted, &session, audio.as_ref(), &events);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let events = session.tick();
            react(&store, &mut persisted, &session, audio.as_ref(), &events);
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
