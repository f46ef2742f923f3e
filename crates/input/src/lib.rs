//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::CursorAction`]s for the
//! interactive front end. Turn logic stays in `gamma-engine`.

pub mod map;

pub use gamma_types as types;

pub use map::{handle_key_event, should_quit};
