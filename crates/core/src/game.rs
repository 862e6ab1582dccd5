//! Game setup: the world, the scheduler and the initial task set.

use std::rc::Rc;

use tracing::info;

use crate::frame::{draw_border, frame_size, Canvas};
use crate::scheduler::{PassReport, Scheduler};
use crate::tasks::{max_frame_size, Blink, Craft, EventBanner, Frames, Spawner, YearAdvancer, YearDisplay};
use crate::types::{Controls, BLINK_MAX_OFFSET, BORDER_INDENT, PHRASES, STAR_SYMBOLS, STATUS_LINE_ROWS};
use crate::world::World;

/// Frames the tasks animate with.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub rocket: Frames,
    pub garbage: Frames,
    pub explosion: Frames,
    pub game_over: Rc<str>,
}

impl GameAssets {
    /// Smallest surface `(rows, columns)` on which every frame and the status
    /// line fit inside the border.
    pub fn min_surface(&self) -> (u16, u16) {
        let sizes = [
            max_frame_size(&self.rocket),
            max_frame_size(&self.garbage),
            max_frame_size(&self.explosion),
            frame_size(&self.game_over),
        ];
        let height = sizes.iter().map(|s| s.0).max().unwrap_or(0);
        let width = sizes.iter().map(|s| s.1).max().unwrap_or(0);
        let longest_phrase = PHRASES
            .iter()
            .map(|(_, text)| text.chars().count() as u16)
            .max()
            .unwrap_or(0);

        // Status line: "Year: NNNN" plus gap plus the longest phrase.
        let status = BORDER_INDENT + 1 + 12 + longest_phrase;
        (
            height + 2 * BORDER_INDENT + STATUS_LINE_ROWS,
            (width + 2 * BORDER_INDENT).max(status + BORDER_INDENT),
        )
    }
}

/// One running game.
pub struct Game {
    world: World,
    scheduler: Scheduler,
}

impl Game {
    /// Set up a game on `canvas`: border, stars, craft, spawner and clock tasks.
    pub fn new(canvas: &mut dyn Canvas, assets: &GameAssets, seed: u32, star_count: usize) -> Self {
        let mut world = World::new(seed);
        let mut scheduler = Scheduler::new();
        let surface = canvas.size();

        draw_border(canvas);
        seed_stars(&mut scheduler, &mut world, surface, star_count);

        scheduler.spawn(Craft::centered(
            assets.rocket.clone(),
            assets.game_over.clone(),
            surface,
        ));
        scheduler.spawn(Spawner::new(assets.garbage.clone(), assets.explosion.clone()));
        scheduler.spawn(YearAdvancer::new());
        scheduler.spawn(YearDisplay::new());
        scheduler.spawn(EventBanner::new());

        info!(
            rows = surface.0,
            columns = surface.1,
            seed,
            stars = star_count,
            tasks = scheduler.len(),
            "game started"
        );

        Self { world, scheduler }
    }

    /// Run one tick.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, controls: Controls) -> PassReport {
        self.scheduler.run_pass(&mut self.world, canvas, controls)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }
}

/// Scatter `count` stars over the play area.
fn seed_stars(scheduler: &mut Scheduler, world: &mut World, surface: (u16, u16), count: usize) {
    let (rows, columns) = surface;
    if rows <= 2 * BORDER_INDENT + STATUS_LINE_ROWS || columns <= 2 * BORDER_INDENT {
        return;
    }
    // Stars stay off the status line.
    let max_row = (rows - BORDER_INDENT - STATUS_LINE_ROWS - 1) as u32;
    let max_column = (columns - BORDER_INDENT - 1) as u32;

    for _ in 0..count {
        let rng = world.rng();
        let row = rng.range_inclusive(BORDER_INDENT as u32, max_row) as u16;
        let column = rng.range_inclusive(BORDER_INDENT as u32, max_column) as u16;
        let symbol = rng.choose(&STAR_SYMBOLS).copied().unwrap_or('*');
        let offset = rng.range_inclusive(0, BLINK_MAX_OFFSET);
        scheduler.spawn(Blink::new(row, column, symbol, offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Grid;

    fn assets() -> GameAssets {
        GameAssets {
            rocket: vec![" ^ \n/#\\".to_string()].into(),
            garbage: vec!["##".to_string()].into(),
            explosion: vec!["*".to_string()].into(),
            game_over: Rc::from("GAME OVER"),
        }
    }

    #[test]
    fn test_initial_task_set() {
        let mut grid = Grid::new(30, 80);
        let game = Game::new(&mut grid, &assets(), 7, 25);
        let s = game.scheduler();
        assert_eq!(s.count("blink"), 25);
        assert_eq!(s.count("craft"), 1);
        assert_eq!(s.count("spawner"), 1);
        assert_eq!(s.count("year_advancer"), 1);
        assert_eq!(s.count("year_display"), 1);
        assert_eq!(s.count("event_banner"), 1);
        assert_eq!(grid.get(0, 0), Some('┌'));
    }

    #[test]
    fn test_stars_stay_inside_border() {
        let mut grid = Grid::new(12, 30);
        let mut game = Game::new(&mut grid, &assets(), 11, 200);
        game.tick(&mut grid, Controls::default());

        for c in 0..30 {
            assert!(matches!(grid.get(0, c), Some('┌' | '─' | '┐')));
            assert!(matches!(grid.get(11, c), Some('└' | '─' | '┘')));
        }
        let status = grid.row_text(10);
        assert!(!status.contains(['+', '*', '.']));
    }

    #[test]
    fn test_craft_never_covers_status_line() {
        let mut grid = Grid::new(12, 60);
        let mut game = Game::new(&mut grid, &assets(), 3, 0);
        for _ in 0..40 {
            game.tick(&mut grid, Controls::new(1, 0, false));
        }

        // Rows 1..=9 are the play area, row 10 the status line.
        assert!(grid.row_text(9).contains("/#\\"));
        assert!(grid.row_text(10).contains("Year: 1959"));
        assert!(!grid.row_text(10).contains('#'));
    }

    #[test]
    fn test_min_surface_covers_status_line() {
        let (rows, columns) = assets().min_surface();
        assert_eq!(rows, 5);
        assert_eq!(columns, 2 + 12 + 39 + 1);
    }
}
