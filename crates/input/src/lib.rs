//! Terminal input module.
//!
//! Maps `crossterm` key events onto craft directions and the fire button, and
//! folds them into one [`crate::types::Controls`] value per tick. Works with
//! terminals that never report key releases.

pub mod handler;
pub mod map;

pub use space_garbage_types as types;

pub use handler::ControlsHandler;
pub use map::{map_key, should_quit, ControlKey};
