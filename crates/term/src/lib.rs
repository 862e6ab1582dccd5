//! Terminal screen for the game.
//!
//! Tasks draw into a [`FrameBuffer`] through the core `Canvas` trait; the
//! [`TerminalRenderer`] flushes only the cells that changed since the previous
//! tick. No widget or layout library is involved.

pub mod fb;
pub mod renderer;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
