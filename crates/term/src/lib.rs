//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the simulation is projected into
//! a framebuffer of styled character cells, and the renderer flushes that
//! buffer to the terminal with diff-based redraws.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (framebuffer in, framebuffer out, no I/O)
//! - Let the frame loop reuse one framebuffer allocation throughout

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Theme, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
