//! World clock tasks: the advancer and the two text displays.

use serde::Serialize;
use tracing::info;

use crate::frame::{draw_text, erase_text};
use crate::scheduler::{Step, Task, TickContext};
use crate::timeline::phrase;
use crate::types::{Brightness, BORDER_INDENT, STATUS_LINE_ROWS, TICKS_PER_YEAR};

/// Column where the year text starts.
const YEAR_COLUMN: u16 = BORDER_INDENT + 1;

/// Column where event phrases start, right of `Year: NNNN`.
const PHRASE_COLUMN: u16 = YEAR_COLUMN + 12;

/// Row of the status line: the last row inside the bottom border.
fn status_row(rows: u16) -> u16 {
    rows.saturating_sub(BORDER_INDENT + STATUS_LINE_ROWS)
}

/// Advances the world clock by one every `interval` ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearAdvancer {
    interval: u32,
    elapsed: u32,
}

impl YearAdvancer {
    pub fn new() -> Self {
        Self::with_interval(TICKS_PER_YEAR)
    }

    pub fn with_interval(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
        }
    }
}

impl Default for YearAdvancer {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for YearAdvancer {
    fn name(&self) -> &'static str {
        "year_advancer"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if self.elapsed == self.interval {
            let year = cx.world.advance_year();
            if phrase(year).is_some() {
                info!(year, "milestone year reached");
            }
            self.elapsed = 0;
        }
        self.elapsed += 1;
        Step::Yield
    }
}

/// Redraws `Year: NNNN` on the status line every tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearDisplay;

impl YearDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Task for YearDisplay {
    fn name(&self) -> &'static str {
        "year_display"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        let row = status_row(cx.canvas.size().0);
        let text = format!("Year: {}", cx.world.year());
        draw_text(cx.canvas, row, YEAR_COLUMN, &text, Brightness::Bold);
        Step::Yield
    }
}

/// Shows the phrase of the current year, if any.
///
/// A phrase stays on screen while the clock still matches it and is erased by
/// the first step that sees a year without a phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventBanner {
    shown: Option<&'static str>,
}

impl EventBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phrase currently on screen.
    pub fn shown(&self) -> Option<&'static str> {
        self.shown
    }
}

impl Task for EventBanner {
    fn name(&self) -> &'static str {
        "event_banner"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        let row = status_row(cx.canvas.size().0);
        let current = phrase(cx.world.year());

        if let Some(old) = self.shown {
            if current != Some(old) {
                erase_text(cx.canvas, row, PHRASE_COLUMN, old.chars().count());
                self.shown = None;
            }
        }

        if let Some(text) = current {
            draw_text(cx.canvas, row, PHRASE_COLUMN, text, Brightness::Normal);
            self.shown = Some(text);
        }
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Grid;
    use crate::types::{Controls, START_YEAR};
    use crate::world::World;

    fn step(task: &mut dyn Task, world: &mut World, grid: &mut Grid) {
        let mut spawned = Vec::new();
        let mut cx = TickContext::new(world, grid, Controls::default(), &mut spawned);
        assert_eq!(task.step(&mut cx), Step::Yield);
    }

    #[test]
    fn test_advancer_ticks_every_interval() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 60);
        let mut advancer = YearAdvancer::with_interval(3);

        let mut years = Vec::new();
        for _ in 0..10 {
            step(&mut advancer, &mut world, &mut grid);
            years.push(world.year() - START_YEAR);
        }
        assert_eq!(years, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_display_shows_current_year() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 60);
        let mut display = YearDisplay::new();

        step(&mut display, &mut world, &mut grid);
        assert!(grid.row_text(8).contains("Year: 1957"));
        world.advance_year();
        step(&mut display, &mut world, &mut grid);
        assert!(grid.row_text(8).contains("Year: 1958"));
    }

    #[test]
    fn test_banner_erases_phrase_when_year_moves_on() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 60);
        let mut banner = EventBanner::new();

        step(&mut banner, &mut world, &mut grid);
        assert_eq!(banner.shown(), Some("First Sputnik"));
        assert!(grid.contains("First Sputnik"));

        world.advance_year();
        step(&mut banner, &mut world, &mut grid);
        assert_eq!(banner.shown(), None);
        assert!(!grid.contains("Sputnik"));
    }

    #[test]
    fn test_banner_replaces_phrase_without_leftovers() {
        let mut world = World::with_year(1, 1969);
        let mut grid = Grid::new(10, 80);
        let mut banner = EventBanner::new();

        step(&mut banner, &mut world, &mut grid);
        world.advance_year();
        world.advance_year();
        step(&mut banner, &mut world, &mut grid);
        assert_eq!(banner.shown(), Some("First orbital space station Salute-1"));
        assert!(!grid.contains("Armstrong"));
    }
}
