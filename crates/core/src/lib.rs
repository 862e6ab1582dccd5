//! Core simulation - cooperative tasks over a shared world
//!
//! This crate contains the whole game: the world state, the scheduler and the
//! behaviour tasks. It has no dependency on a terminal; it draws through the
//! [`Canvas`] trait, so every rule can be exercised headless on a [`Grid`].
//!
//! # Module Structure
//!
//! - [`world`]: obstacle registry, collision record, world clock, RNG
//! - [`scheduler`]: the cooperative [`Task`] model and the pass loop
//! - [`tasks`]: stars, craft, projectiles, garbage, explosions, clock and banners
//! - [`obstacle`]: rectangular hit regions
//! - [`frame`]: frame measurement and drawing on a [`Canvas`]
//! - [`physics`]: craft speed smoothing
//! - [`timeline`]: year-keyed spawn rate, phrases and weapon gate
//! - [`game`]: initial task set for a new game
//!
//! # Scheduling model
//!
//! Single-threaded and cooperative. Each tick the scheduler resumes every live
//! task once; a task mutates the [`World`] only inside its own step, so no
//! locking is needed. Obstacles are registered only while their garbage task is
//! suspended, and a hit recorded during a tick is seen by the obstacle's next
//! step regardless of task order.
//!
//! # Example
//!
//! ```
//! use space_garbage_core::{Game, GameAssets, Grid};
//! use space_garbage_types::Controls;
//!
//! let assets = GameAssets {
//!     rocket: vec![" ^ \n/#\\".to_string()].into(),
//!     garbage: vec!["##".to_string()].into(),
//!     explosion: vec!["*".to_string()].into(),
//!     game_over: "GAME OVER".into(),
//! };
//!
//! let mut grid = Grid::new(24, 80);
//! let mut game = Game::new(&mut grid, &assets, 42, 20);
//! for _ in 0..100 {
//!     game.tick(&mut grid, Controls::default());
//! }
//! assert!(game.world().year() > 1957);
//! ```

pub mod frame;
pub mod game;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod scheduler;
pub mod snapshot;
pub mod tasks;
pub mod timeline;
pub mod world;

pub use space_garbage_types as types;

// Re-export commonly used types for convenience
pub use frame::{draw_frame, frame_size, Canvas, Grid};
pub use game::{Game, GameAssets};
pub use obstacle::{Obstacle, ObstacleId};
pub use physics::update_speed;
pub use rng::SimpleRng;
pub use scheduler::{PassReport, Scheduler, Step, Task, TickContext};
pub use snapshot::WorldSnapshot;
pub use world::World;
