//! Behaviour tasks.
//!
//! Each task is a small state machine driven by the [`Scheduler`](crate::Scheduler):
//!
//! - [`Blink`]: one twinkling background star
//! - [`Craft`]: player craft, input, weapon, game-over transition
//! - [`Projectile`]: plasma shot flying until it leaves the play area or hits garbage
//! - [`Garbage`]: one falling obstacle, including its [`Explosion`]
//! - [`Spawner`]: releases new garbage at a year-dependent rate
//! - [`YearAdvancer`], [`YearDisplay`], [`EventBanner`]: the world clock and its text
//! - [`GameOver`]: banner shown forever once the craft is destroyed

pub mod blink;
pub mod craft;
pub mod explosion;
pub mod game_over;
pub mod garbage;
pub mod projectile;
pub mod spawner;
pub mod year;

use std::rc::Rc;

pub use blink::Blink;
pub use craft::Craft;
pub use explosion::Explosion;
pub use game_over::GameOver;
pub use garbage::{Garbage, GarbageOutcome};
pub use projectile::Projectile;
pub use spawner::Spawner;
pub use year::{EventBanner, YearAdvancer, YearDisplay};

/// Animation frames shared between tasks.
pub type Frames = Rc<[String]>;

/// Largest `(height, width)` over a set of frames.
pub fn max_frame_size(frames: &[String]) -> (u16, u16) {
    frames.iter().fold((0, 0), |(h, w), frame| {
        let (fh, fw) = crate::frame::frame_size(frame);
        (h.max(fh), w.max(fw))
    })
}
