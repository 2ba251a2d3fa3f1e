//! Session state machine - the per-frame orchestrator.
//!
//! Ties together the bird, the obstacle track, and collision detection, and
//! owns score and high-score bookkeeping. The three lifecycle states are a
//! tagged enum: only `Playing` carries simulation data, so a finished run's
//! entity state is dropped rather than frozen by convention.
//!
//! Mutating entry points return [`SessionEvents`]; the frame loop turns
//! those into audio cues and high-score writes. Events never influence
//! transitions.

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::collision;
use crate::obstacle::Track;
use crate::rng::SimpleRng;
use tui_flappy_types::{
    Difficulty, DifficultyParams, DisplayToggles, GameAction, SessionEvent, SessionPhase,
    CEILING_Y, ENTITY_X, FLOOR_Y,
};

/// Per-tick event list; at most Scored + NewRecord + GameOver.
pub type SessionEvents = ArrayVec<SessionEvent, 4>;

/// Live simulation state of one play-through. Exists only while `Playing`.
#[derive(Debug, Clone)]
pub struct Run {
    difficulty: Difficulty,
    params: DifficultyParams,
    bird: Bird,
    track: Track,
}

impl Run {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn params(&self) -> DifficultyParams {
        self.params
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn track(&self) -> &Track {
        &self.track
    }
}

#[derive(Debug, Clone)]
enum PhaseData {
    Start,
    Playing(Run),
    GameOver,
}

/// The overall game session across runs.
#[derive(Debug, Clone)]
pub struct Session {
    phase: PhaseData,
    difficulty: Option<Difficulty>,
    score: u32,
    high_score: u32,
    toggles: DisplayToggles,
    /// Seeds each run's track so obstacle streams differ between runs but
    /// stay deterministic for a given session seed.
    rng: SimpleRng,
}

impl Session {
    /// A session on the start screen. `high_score` is whatever the score
    /// store loaded at startup (0 if nothing was persisted).
    pub fn new(seed: u32, high_score: u32) -> Self {
        Self {
            phase: PhaseData::Start,
            difficulty: None,
            score: 0,
            high_score,
            toggles: DisplayToggles::default(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.phase {
            PhaseData::Start => SessionPhase::Start,
            PhaseData::Playing(_) => SessionPhase::Playing,
            PhaseData::GameOver => SessionPhase::GameOver,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    /// Simulation state of the active run, if any.
    pub fn run(&self) -> Option<&Run> {
        match &self.phase {
            PhaseData::Playing(run) => Some(run),
            _ => None,
        }
    }

    /// React to one discrete press (key or pointer).
    ///
    /// `action` is the mapped input, `None` for unmapped keys - those still
    /// count as "any input" for dismissing the game-over screen. Display
    /// toggles apply in every phase.
    pub fn handle_press(&mut self, action: Option<GameAction>) -> SessionEvents {
        let mut events = SessionEvents::new();

        if let Some(action) = action {
            match action {
                GameAction::ToggleRain => self.toggles.rain = !self.toggles.rain,
                GameAction::ToggleFog => self.toggles.fog = !self.toggles.fog,
                GameAction::SetDarkTheme(dark) => self.toggles.dark = dark,
                GameAction::Select(difficulty) => {
                    if matches!(self.phase, PhaseData::Start) {
                        self.begin_run(difficulty);
                    }
                }
                GameAction::Flap => {
                    if let PhaseData::Playing(run) = &mut self.phase {
                        run.bird.apply_impulse(run.params.impulse);
                        events.push(SessionEvent::Flapped);
                    }
                }
            }
        }

        // Any press while game-over returns to the start screen and forces
        // a fresh difficulty selection.
        if matches!(self.phase, PhaseData::GameOver) {
            self.phase = PhaseData::Start;
            self.difficulty = None;
        }

        events
    }

    fn begin_run(&mut self, difficulty: Difficulty) {
        let mut track = Track::new(self.rng.next_u32());
        track.reset();
        self.difficulty = Some(difficulty);
        self.score = 0;
        self.phase = PhaseData::Playing(Run {
            difficulty,
            params: difficulty.params(),
            bird: Bird::new(),
            track,
        });
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Order per tick: gravity, integration, track advance + recycle,
    /// scoring, collision. Outside `Playing` this is a no-op.
    pub fn tick(&mut self) -> SessionEvents {
        let mut events = SessionEvents::new();
        let PhaseData::Playing(run) = &mut self.phase else {
            return events;
        };

        run.bird.apply_gravity(run.params.gravity);
        run.bird.integrate();

        run.track.advance(run.params.scroll_speed);
        run.track.recycle();

        if run.track.mark_passed_and_score(ENTITY_X) {
            self.score += 1;
            events.push(SessionEvent::Scored);
            if self.score > self.high_score {
                self.high_score = self.score;
                events.push(SessionEvent::NewRecord(self.high_score));
            }
        }

        let collided = collision::check(
            run.bird.bounds(),
            run.track.obstacles(),
            run.params.gap_height,
            CEILING_Y,
            FLOOR_Y,
        );
        if collided {
            self.phase = PhaseData::GameOver;
            events.push(SessionEvent::GameOver);
        }

        events
    }

    #[cfg(test)]
    fn run_mut(&mut self) -> Option<&mut Run> {
        match &mut self.phase {
            PhaseData::Playing(run) => Some(run),
            _ => None,
        }
    }
}
