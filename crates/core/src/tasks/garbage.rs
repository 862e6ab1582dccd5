//! Falling garbage.
//!
//! A piece of garbage is registered in the world only while it is suspended
//! between two of its own steps. Every step starts by erasing the frame and
//! deregistering, then either consumes a pending hit (and explodes), escapes
//! through the bottom of the play area, or moves down and registers again.

use serde::Serialize;
use tracing::debug;

use crate::frame::{draw_frame, play_area_limits};
use crate::obstacle::{Obstacle, ObstacleId};
use crate::scheduler::{Step, Task, TickContext};

use super::{max_frame_size, Explosion, Frames};

/// How a piece of garbage left the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GarbageOutcome {
    /// Fell past the bottom border.
    Escaped,
    /// Hit by a projectile or the craft.
    Destroyed,
}

pub struct Garbage {
    id: ObstacleId,
    frame: String,
    explosion_frames: Frames,
    row: f64,
    column: f64,
    speed: f64,
    height: u16,
    width: u16,
    drawn: bool,
    explosion: Option<Explosion>,
    outcome: Option<GarbageOutcome>,
}

impl Garbage {
    pub fn new(
        id: ObstacleId,
        frame: String,
        explosion_frames: Frames,
        row: f64,
        column: f64,
        speed: f64,
    ) -> Self {
        let (height, width) = max_frame_size(std::slice::from_ref(&frame));
        Self {
            id,
            frame,
            explosion_frames,
            row,
            column,
            speed,
            height,
            width,
            drawn: false,
            explosion: None,
            outcome: None,
        }
    }

    pub fn id(&self) -> ObstacleId {
        self.id
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    /// Set once the garbage has been hit or has escaped.
    pub fn outcome(&self) -> Option<GarbageOutcome> {
        self.outcome
    }

    fn obstacle(&self) -> Obstacle {
        Obstacle::new(self.id, self.row, self.column, self.height, self.width)
    }
}

impl Task for Garbage {
    fn name(&self) -> &'static str {
        "garbage"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if let Some(explosion) = self.explosion.as_mut() {
            return explosion.advance(cx.canvas);
        }

        if self.drawn {
            draw_frame(cx.canvas, self.row, self.column, &self.frame, true);
            cx.world.deregister(self.id);
            self.drawn = false;

            // A hit wins over escaping in the same tick.
            if cx.world.take_collision(self.id) {
                let (center_row, center_column) = self.obstacle().center();
                debug!(id = self.id.0, row = self.row, column = self.column, "garbage destroyed");
                self.outcome = Some(GarbageOutcome::Destroyed);
                let explosion = self.explosion.insert(Explosion::new(
                    self.explosion_frames.clone(),
                    center_row,
                    center_column,
                    cx.canvas.size(),
                ));
                return explosion.advance(cx.canvas);
            }

            self.row += self.speed;
            let (_, max_row, _, _) = play_area_limits(cx.canvas.size(), self.height, self.width);
            if self.row > max_row {
                debug!(id = self.id.0, "garbage escaped");
                self.outcome = Some(GarbageOutcome::Escaped);
                return Step::Done;
            }
        }

        cx.world.register(self.obstacle());
        draw_frame(cx.canvas, self.row, self.column, &self.frame, false);
        self.drawn = true;
        Step::Yield
    }
}
