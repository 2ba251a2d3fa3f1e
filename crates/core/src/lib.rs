//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole per-tick simulation: entity physics, the
//! obstacle track, collision detection, and the session state machine. It
//! has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical obstacle sequences
//! - **Testable**: Unit tests for every rule without a terminal
//! - **Portable**: Can run headless
//!
//! # Module Structure
//!
//! - [`bird`]: the controlled entity (vertical position/velocity, gravity,
//!   impulse, integration)
//! - [`obstacle`]: obstacle descriptors and the recycling track
//! - [`collision`]: axis-aligned box collision against obstacles and field
//!   boundaries
//! - [`session`]: the Start / Playing / GameOver state machine, score and
//!   high-score bookkeeping
//! - [`rng`]: a small LCG that drives gap placement
//!
//! Side effects (audio cues, high-score persistence) are expressed as
//! [`tui_flappy_types::SessionEvent`] values returned from the mutating
//! entry points; the caller decides what to do with them.

pub mod bird;
pub mod collision;
pub mod obstacle;
pub mod rng;
pub mod session;

pub use bird::Bird;
pub use obstacle::{Obstacle, Track};
pub use rng::SimpleRng;
pub use session::{Run, Session, SessionEvents};

pub use tui_flappy_types as types;
