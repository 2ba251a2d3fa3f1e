//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`tui_flappy_types::GameAction`]
//! values. The mapping is stateless: flapping is edge-triggered on discrete
//! presses, so no held-key repeat handling is needed.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{map_key_event, map_mouse_event, should_quit};
