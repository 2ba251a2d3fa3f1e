//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core simulation, input mapping, rendering).
//!
//! # Field Geometry
//!
//! The simulation runs in a fixed logical coordinate space, independent of
//! the terminal viewport it is later projected onto:
//!
//! - **Field**: 800 x 600 units, origin top-left, y grows downward
//! - **Ground strip**: bottom 60 units; the floor the entity can hit
//! - **Entity**: 40 x 30 box at fixed x = 100
//! - **Obstacle**: 80 units wide, gap top drawn from [120, 350]
//!
//! # Timing
//!
//! The simulation is tick-locked: gravity and scroll speed are fixed
//! per-tick increments at a 60 Hz target (`TICK_MS` = 16), not scaled by
//! wall-clock time. This is a deliberate fixed-timestep design choice.

/// Logical field dimensions.
pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;

/// Height of the ground strip at the bottom of the field.
pub const GROUND_HEIGHT: f32 = 60.0;

/// Top of the ground strip; the entity dies at or below this line.
pub const FLOOR_Y: f32 = FIELD_HEIGHT - GROUND_HEIGHT;

/// Ceiling; the entity dies at or above this line.
pub const CEILING_Y: f32 = 0.0;

/// Entity geometry. The horizontal position never changes.
pub const ENTITY_X: f32 = 100.0;
pub const ENTITY_WIDTH: f32 = 40.0;
pub const ENTITY_HEIGHT: f32 = 30.0;
pub const ENTITY_START_Y: f32 = FIELD_HEIGHT / 2.0;

/// Obstacle geometry. Gap top is drawn uniformly from the inclusive range.
pub const OBSTACLE_WIDTH: f32 = 80.0;
pub const GAP_TOP_MIN: u32 = 120;
pub const GAP_TOP_MAX: u32 = 350;

/// Fixed timestep interval (~60 Hz).
pub const TICK_MS: u32 = 16;

/// Upper bound on concurrently tracked obstacles. The reference design
/// recycles one at a time, so the track never approaches this.
pub const MAX_OBSTACLES: usize = 4;

/// Difficulty levels selectable on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parameter tuple locked in for the lifetime of a run.
    pub const fn params(self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                gravity: 0.3,
                impulse: -7.0,
                gap_height: 220.0,
                scroll_speed: 2.0,
            },
            Difficulty::Medium => DifficultyParams {
                gravity: 0.35,
                impulse: -8.0,
                gap_height: 180.0,
                scroll_speed: 3.0,
            },
            Difficulty::Hard => DifficultyParams {
                gravity: 0.45,
                impulse: -9.0,
                gap_height: 150.0,
                scroll_speed: 4.0,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

/// Per-difficulty simulation parameters, immutable once a run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Per-tick velocity increment (positive, downward).
    pub gravity: f32,
    /// Velocity override applied on a flap (negative, upward).
    pub impulse: f32,
    /// Vertical extent of the passable gap.
    pub gap_height: f32,
    /// Per-tick leftward obstacle movement.
    pub scroll_speed: f32,
}

/// Discrete inputs the session reacts to.
///
/// Display toggles are carried here too, but they mutate flags outside the
/// state machine's transition table and never affect the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Select(Difficulty),
    Flap,
    ToggleRain,
    ToggleFog,
    SetDarkTheme(bool),
}

/// The three session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    Playing,
    GameOver,
}

/// Side-effect notifications emitted by the session.
///
/// Consumed by the frame loop for audio cues and high-score persistence;
/// they never feed back into state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// An impulse was applied (jump cue).
    Flapped,
    /// An obstacle was passed and the score incremented (score cue).
    Scored,
    /// The high score increased to the contained value (persist it).
    NewRecord(u32),
    /// Collision or boundary violation ended the run (hit cue).
    GameOver,
}

/// Orthogonal display flags, mutable in any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayToggles {
    pub dark: bool,
    pub rain: bool,
    pub fog: bool,
}

/// Axis-aligned box in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Closed-interval overlap test: touching edges count as intersecting,
    /// consistent with the `<=`/`>=` boundary checks.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x + self.w >= other.x
            && other.x + other.w >= self.x
            && self.y + self.h >= other.y
            && other.y + other.h >= self.y
    }
}
