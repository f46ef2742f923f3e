//! Terminal front end for interactive games.
//!
//! A small rendering layer that avoids widget/layout frameworks: a
//! [`BoardView`] draws a [`Session`](gamma_engine::Session) into a
//! [`FrameBuffer`], and a [`TerminalRenderer`] flushes that buffer to the
//! terminal, rewriting only what changed since the previous frame.
//!
//! Rendering into the framebuffer is pure and unit-tested; only the renderer
//! touches the terminal.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use gamma_core as core;
pub use gamma_engine as engine;
pub use gamma_types as types;

pub use board_view::{BoardLayout, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
