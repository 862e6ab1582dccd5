//! Explosion playback.
//!
//! Normally driven inline by [`Garbage`](super::Garbage) once it is hit, but it
//! is a regular task as well and can be scheduled on its own.

use crate::frame::{draw_frame, play_area_limits, Canvas};
use crate::scheduler::{Step, Task, TickContext};

use super::{max_frame_size, Frames};

pub struct Explosion {
    frames: Frames,
    row: f64,
    column: f64,
    index: usize,
    drawn: bool,
}

impl Explosion {
    /// Centre the explosion on `(center_row, center_column)`, clamped so every
    /// frame stays inside the play area.
    pub fn new(frames: Frames, center_row: f64, center_column: f64, surface: (u16, u16)) -> Self {
        let (height, width) = max_frame_size(&frames);
        let (min_row, max_row, min_column, max_column) = play_area_limits(surface, height, width);
        let row = (center_row - height as f64 / 2.0).round().clamp(min_row, max_row);
        let column = (center_column - width as f64 / 2.0).round().clamp(min_column, max_column);
        Self {
            frames,
            row,
            column,
            index: 0,
            drawn: false,
        }
    }

    /// Top-left corner of every frame.
    pub fn corner(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    /// Show the next frame for one tick, erasing the previous one.
    pub fn advance(&mut self, canvas: &mut dyn Canvas) -> Step {
        if self.drawn {
            if let Some(frame) = self.frames.get(self.index) {
                draw_frame(canvas, self.row, self.column, frame, true);
            }
            self.index += 1;
            self.drawn = false;
        }

        match self.frames.get(self.index) {
            Some(frame) => {
                draw_frame(canvas, self.row, self.column, frame, false);
                self.drawn = true;
                Step::Yield
            }
            None => Step::Done,
        }
    }
}

impl Task for Explosion {
    fn name(&self) -> &'static str {
        "explosion"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        self.advance(cx.canvas)
    }
}
