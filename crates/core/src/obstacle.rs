//! Rectangular hit regions.

use serde::Serialize;

/// Identity of an obstacle, unique for the lifetime of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObstacleId(pub u64);

/// Hit region of one piece of falling garbage.
///
/// Covers rows `[row, row + height)` and columns `[column, column + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub row: f64,
    pub column: f64,
    pub height: u16,
    pub width: u16,
}

impl Obstacle {
    pub fn new(id: ObstacleId, row: f64, column: f64, height: u16, width: u16) -> Self {
        debug_assert!(height >= 1 && width >= 1, "obstacle must cover at least one cell");
        Self {
            id,
            row,
            column,
            height: height.max(1),
            width: width.max(1),
        }
    }

    /// Whether a single cell at `(row, column)` lies inside the region.
    pub fn contains(&self, row: f64, column: f64) -> bool {
        self.has_collision(row, column, 1, 1)
    }

    /// Whether the `height x width` region with top-left corner `(row, column)`
    /// overlaps this obstacle.
    pub fn has_collision(&self, row: f64, column: f64, height: u16, width: u16) -> bool {
        let rows_overlap = row < self.row + self.height as f64 && self.row < row + height as f64;
        let columns_overlap =
            column < self.column + self.width as f64 && self.column < column + width as f64;
        rows_overlap && columns_overlap
    }

    /// Centre of the region as `(row, column)`.
    pub fn center(&self) -> (f64, f64) {
        (
            self.row + self.height as f64 / 2.0,
            self.column + self.width as f64 / 2.0,
        )
    }
}
