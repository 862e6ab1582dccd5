//! The player's craft.
//!
//! Every tick the craft erases its previous frame and checks whether garbage
//! overlaps the spot it occupied. A collision ends the task and hands over to
//! the game-over banner; otherwise it moves, redraws and possibly fires.

use std::rc::Rc;

use tracing::info;

use crate::frame::{draw_frame, play_area_limits};
use crate::physics::update_speed;
use crate::scheduler::{Step, Task, TickContext};
use crate::timeline::weapon_unlocked;

use super::{max_frame_size, Frames, GameOver, Projectile};

pub struct Craft {
    frames: Frames,
    game_over: Rc<str>,
    frame_index: usize,
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    height: u16,
    width: u16,
    /// Position and frame drawn last tick, still on screen.
    drawn: Option<(f64, f64, usize)>,
}

impl Craft {
    pub fn new(frames: Frames, game_over: Rc<str>, row: f64, column: f64) -> Self {
        debug_assert!(!frames.is_empty(), "craft needs at least one frame");
        let (height, width) = max_frame_size(&frames);
        Self {
            frames,
            game_over,
            frame_index: 0,
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            height,
            width,
            drawn: None,
        }
    }

    /// A craft in the middle of the surface.
    pub fn centered(frames: Frames, game_over: Rc<str>, surface: (u16, u16)) -> Self {
        let (height, width) = max_frame_size(&frames);
        let (min_row, max_row, min_column, max_column) = play_area_limits(surface, height, width);
        let row = ((surface.0 as f64 - height as f64) / 2.0).floor().clamp(min_row, max_row);
        let column = ((surface.1 as f64 - width as f64) / 2.0).floor().clamp(min_column, max_column);
        Self::new(frames, game_over, row, column)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn speed(&self) -> (f64, f64) {
        (self.row_speed, self.column_speed)
    }

    /// Bounding box shared by all animation frames.
    pub fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    /// Where a shot leaves the craft: top row, horizontal centre.
    fn nose(&self) -> (f64, f64) {
        (self.row, self.column + (self.width / 2) as f64)
    }
}

impl Task for Craft {
    fn name(&self) -> &'static str {
        "craft"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if let Some((row, column, index)) = self.drawn.take() {
            if let Some(frame) = self.frames.get(index) {
                draw_frame(cx.canvas, row, column, frame, true);
            }
        }

        if let Some(id) = cx
            .world
            .first_hit(self.row, self.column, self.height, self.width)
        {
            cx.world.record_collision(id);
            cx.world.set_game_over();
            info!(row = self.row, column = self.column, obstacle = id.0, "craft hit by garbage");
            cx.spawn(GameOver::new(self.game_over.clone()));
            return Step::Done;
        }

        let controls = cx.controls;
        let (row_speed, column_speed) = update_speed(
            self.row_speed,
            self.column_speed,
            controls.rows,
            controls.columns,
        );
        self.row_speed = row_speed;
        self.column_speed = column_speed;

        let (min_row, max_row, min_column, max_column) =
            play_area_limits(cx.canvas.size(), self.height, self.width);
        self.row = (self.row + row_speed).clamp(min_row, max_row);
        self.column = (self.column + column_speed).clamp(min_column, max_column);

        if let Some(frame) = self.frames.get(self.frame_index) {
            draw_frame(cx.canvas, self.row, self.column, frame, false);
            self.drawn = Some((self.row, self.column, self.frame_index));
        }
        self.frame_index = (self.frame_index + 1) % self.frames.len().max(1);

        if controls.fire && weapon_unlocked(cx.world.year()) {
            let (row, column) = self.nose();
            cx.spawn(Projectile::new(row, column));
        }

        Step::Yield
    }
}
