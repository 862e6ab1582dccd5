//! Garbage spawner.

use tracing::debug;

use crate::frame::play_area_limits;
use crate::scheduler::{Step, Task, TickContext};
use crate::timeline::spawn_delay;
use crate::types::{BORDER_INDENT, GARBAGE_SPEED};

use super::{max_frame_size, Frames, Garbage};

/// Releases a new piece of garbage every `spawn_delay(year)` ticks.
///
/// While spawning is disabled the delay is re-checked every tick, so the first
/// piece follows the first enabled year closely.
pub struct Spawner {
    garbage_frames: Frames,
    explosion_frames: Frames,
    /// Ticks still to wait; meaningful only while `armed`.
    remaining: u32,
    armed: bool,
    spawned: u64,
}

impl Spawner {
    pub fn new(garbage_frames: Frames, explosion_frames: Frames) -> Self {
        Self {
            garbage_frames,
            explosion_frames,
            remaining: 0,
            armed: false,
            spawned: 0,
        }
    }

    /// Pieces of garbage released so far.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    fn release(&mut self, cx: &mut TickContext<'_>) {
        let index = cx.world.rng().next_range(self.garbage_frames.len() as u32) as usize;
        let Some(frame) = self.garbage_frames.get(index) else {
            return;
        };
        let (height, width) = max_frame_size(std::slice::from_ref(frame));
        let (_, _, min_column, max_column) = play_area_limits(cx.canvas.size(), height, width);
        let column = cx
            .world
            .rng()
            .range_inclusive(min_column as u32, max_column as u32);

        let id = cx.world.allocate_obstacle_id();
        debug!(id = id.0, column, year = cx.world.year(), "garbage released");
        cx.spawn(Garbage::new(
            id,
            frame.clone(),
            self.explosion_frames.clone(),
            BORDER_INDENT as f64,
            column as f64,
            GARBAGE_SPEED,
        ));
        self.spawned += 1;
    }
}

impl Task for Spawner {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if self.armed && self.remaining == 0 {
            self.release(cx);
            self.armed = false;
        }

        if !self.armed {
            match spawn_delay(cx.world.year()) {
                Some(delay) => {
                    self.remaining = delay;
                    self.armed = true;
                }
                None => return Step::Yield,
            }
        }

        self.remaining = self.remaining.saturating_sub(1);
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Grid;
    use crate::types::{Controls, FIRST_SPAWN_YEAR, START_YEAR};
    use crate::world::World;

    fn spawner() -> Spawner {
        Spawner::new(
            vec!["##".to_string(), "@@@".to_string()].into(),
            vec!["*".to_string()].into(),
        )
    }

    /// Steps the spawner once and returns how many tasks it spawned.
    fn step(s: &mut Spawner, world: &mut World, grid: &mut Grid) -> usize {
        let mut spawned = Vec::new();
        let mut cx = TickContext::new(world, grid, Controls::default(), &mut spawned);
        assert_eq!(s.step(&mut cx), Step::Yield);
        for task in &spawned {
            assert_eq!(task.name(), "garbage");
        }
        spawned.len()
    }

    #[test]
    fn test_silent_before_first_spawn_year() {
        let mut world = World::with_year(1, START_YEAR);
        let mut grid = Grid::new(20, 40);
        let mut s = spawner();
        for _ in 0..100 {
            assert_eq!(step(&mut s, &mut world, &mut grid), 0);
        }
        assert_eq!(s.spawned(), 0);
    }

    #[test]
    fn test_spawns_once_per_delay() {
        let mut world = World::with_year(1, 2020);
        let mut grid = Grid::new(20, 40);
        let mut s = spawner();

        let counts: Vec<usize> = (0..7).map(|_| step(&mut s, &mut world, &mut grid)).collect();
        // Delay 2: arm, wait, release, wait, release, ...
        assert_eq!(counts, vec![0, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_first_spawn_follows_enabled_year() {
        let mut world = World::with_year(1, FIRST_SPAWN_YEAR - 1);
        let mut grid = Grid::new(20, 40);
        let mut s = spawner();
        step(&mut s, &mut world, &mut grid);
        world.advance_year();

        let first = (1..=30)
            .find(|_| step(&mut s, &mut world, &mut grid) == 1)
            .unwrap();
        assert_eq!(first, 21);
    }
}
