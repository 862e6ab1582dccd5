//! Space Garbage (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `space_garbage::{assets,core,input,term,types}` and adds
//! the runtime configuration used by the binary.

pub mod config;
pub mod setup;

pub use space_garbage_assets as assets;
pub use space_garbage_core as core;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;

pub use config::GameConfig;
