//! Game-over banner.

use std::rc::Rc;

use crate::frame::{draw_frame, frame_size, play_area_limits};
use crate::scheduler::{Step, Task, TickContext};

/// Draws the banner centred on the surface every tick, forever.
pub struct GameOver {
    frame: Rc<str>,
}

impl GameOver {
    pub fn new(frame: Rc<str>) -> Self {
        Self { frame }
    }
}

impl Task for GameOver {
    fn name(&self) -> &'static str {
        "game_over"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        let surface = cx.canvas.size();
        let (height, width) = frame_size(&self.frame);
        let (min_row, max_row, min_column, max_column) = play_area_limits(surface, height, width);
        let row = ((surface.0 as f64 - height as f64) / 2.0).floor().clamp(min_row, max_row);
        let column = ((surface.1 as f64 - width as f64) / 2.0).floor().clamp(min_column, max_column);
        draw_frame(cx.canvas, row, column, &self.frame, false);
        Step::Yield
    }
}
