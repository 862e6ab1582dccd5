//! Plasma projectile.

use serde::Serialize;

use crate::frame::Canvas;
use crate::scheduler::{Step, Task, TickContext};
use crate::types::{Brightness, BORDER_INDENT, PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Phase {
    /// Muzzle flash, first tick.
    Spark,
    /// Muzzle flash, second tick.
    Glow,
    Flying,
}

/// A shot travelling in a straight line.
///
/// It finishes when it leaves the play area or on its first hit; it can never
/// hit more than one obstacle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: Phase,
    hit: bool,
}

impl Projectile {
    /// A shot with the default upward speed.
    pub fn new(row: f64, column: f64) -> Self {
        Self::with_speed(row, column, PROJECTILE_ROW_SPEED, PROJECTILE_COLUMN_SPEED)
    }

    pub fn with_speed(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: Phase::Spark,
            hit: false,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    /// Whether the shot finished by hitting something.
    pub fn hit(&self) -> bool {
        self.hit
    }

    fn symbol(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    /// Rounded cell of the current position, if it lies in
    /// `[1, rows - 1) x [1, columns - 1)`.
    fn cell(&self, canvas: &dyn Canvas) -> Option<(u16, u16)> {
        let (rows, columns) = canvas.size();
        let row = self.row.round();
        let column = self.column.round();
        let min = BORDER_INDENT as f64;
        let inside = row >= min
            && column >= min
            && row < rows as f64 - min
            && column < columns as f64 - min;
        inside.then_some((row as u16, column as u16))
    }

    fn put(&self, canvas: &mut dyn Canvas, ch: char) {
        if let Some((row, column)) = self.cell(canvas) {
            canvas.put_char(row, column, ch, Brightness::Normal);
        }
    }
}

impl Task for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        match self.phase {
            Phase::Spark => {
                self.put(cx.canvas, '*');
                self.phase = Phase::Glow;
                return Step::Yield;
            }
            Phase::Glow => {
                self.put(cx.canvas, 'O');
                self.phase = Phase::Flying;
                return Step::Yield;
            }
            Phase::Flying => {}
        }

        // Erase whatever was drawn last tick (the flash or the shot) and move on.
        self.put(cx.canvas, ' ');
        self.row += self.row_speed;
        self.column += self.column_speed;

        if self.cell(cx.canvas).is_none() {
            return Step::Done;
        }

        if let Some(id) = cx.world.first_hit(self.row, self.column, 1, 1) {
            cx.world.record_collision(id);
            self.hit = true;
            return Step::Done;
        }

        self.put(cx.canvas, self.symbol());
        Step::Yield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Grid;
    use crate::obstacle::Obstacle;
    use crate::types::Controls;
    use crate::world::World;

    fn step(p: &mut Projectile, world: &mut World, grid: &mut Grid) -> Step {
        let mut spawned = Vec::new();
        let mut cx = TickContext::new(world, grid, Controls::default(), &mut spawned);
        p.step(&mut cx)
    }

    #[test]
    fn test_flash_then_flight_until_top_border() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 10);
        let mut p = Projectile::with_speed(4.0, 5.0, -1.0, 0.0);

        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(grid.get(4, 5), Some('*'));
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(grid.get(4, 5), Some('O'));

        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(grid.get(4, 5), Some(' '));
        assert_eq!(grid.get(3, 5), Some('|'));

        // Rows 2 and 1, then it leaves through the border row.
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Done);
        assert!(!p.hit());
        assert!(!grid.contains("|"));
    }

    #[test]
    fn test_border_check_uses_rounded_cell() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 10);
        let mut p = Projectile::with_speed(2.0, 5.0, -0.6, 0.0);
        step(&mut p, &mut world, &mut grid);
        step(&mut p, &mut world, &mut grid);

        // 1.4 and 0.8 both round to row 1.
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(grid.get(1, 5), Some('|'));
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Yield);
        assert_eq!(grid.get(1, 5), Some('|'));

        // 0.2 rounds onto the border row.
        assert_eq!(step(&mut p, &mut world, &mut grid), Step::Done);
        assert!(!grid.contains("|"));
    }

    #[test]
    fn test_horizontal_shot_uses_dash() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 10);
        let mut p = Projectile::with_speed(4.0, 2.0, 0.0, 1.0);
        for _ in 0..3 {
            step(&mut p, &mut world, &mut grid);
        }
        assert_eq!(grid.get(4, 3), Some('-'));
    }

    #[test]
    fn test_records_only_the_first_hit() {
        let mut world = World::new(1);
        let mut grid = Grid::new(10, 10);
        let a = world.allocate_obstacle_id();
        let b = world.allocate_obstacle_id();
        world.register(Obstacle::new(a, 2.0, 4.0, 2, 3));
        world.register(Obstacle::new(b, 2.0, 5.0, 2, 3));

        let mut p = Projectile::with_speed(5.0, 5.0, -1.0, 0.0);
        let mut outcome = Step::Yield;
        for _ in 0..10 {
            outcome = step(&mut p, &mut world, &mut grid);
            if outcome == Step::Done {
                break;
            }
        }

        assert_eq!(outcome, Step::Done);
        assert!(p.hit());
        assert_eq!(world.collisions(), &[a]);
    }
}
