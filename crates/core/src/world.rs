//! World state shared by every task.
//!
//! The world is threaded through each task step by `&mut`; nothing in it is
//! global and nothing is locked. Tasks only touch it between two of their own
//! suspension points, which is what keeps the obstacle registry and the
//! collision record consistent.

use tracing::{debug, info};

use crate::obstacle::{Obstacle, ObstacleId};
use crate::rng::SimpleRng;
use crate::types::{Year, START_YEAR};

#[derive(Debug, Clone)]
pub struct World {
    obstacles: Vec<Obstacle>,
    collisions: Vec<ObstacleId>,
    year: Year,
    next_obstacle_id: u64,
    game_over: bool,
    rng: SimpleRng,
}

impl World {
    pub fn new(seed: u32) -> Self {
        Self::with_year(seed, START_YEAR)
    }

    /// A world whose clock starts at `year`.
    pub fn with_year(seed: u32, year: Year) -> Self {
        Self {
            obstacles: Vec::new(),
            collisions: Vec::new(),
            year,
            next_obstacle_id: 1,
            game_over: false,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// Advance the clock by exactly one year and return the new value.
    pub fn advance_year(&mut self) -> Year {
        self.year += 1;
        debug!(year = self.year, "year advanced");
        self.year
    }

    pub fn rng(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self) {
        if !self.game_over {
            info!(year = self.year, "craft destroyed, game over");
        }
        self.game_over = true;
    }

    /// Reserve an id for a new obstacle.
    pub fn allocate_obstacle_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_obstacle_id);
        self.next_obstacle_id += 1;
        id
    }

    /// Live obstacles in registration order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn is_registered(&self, id: ObstacleId) -> bool {
        self.obstacles.iter().any(|ob| ob.id == id)
    }

    /// Add an obstacle for the current tick.
    ///
    /// Each id may be registered at most once at a time.
    pub fn register(&mut self, obstacle: Obstacle) {
        debug_assert!(
            !self.is_registered(obstacle.id),
            "obstacle {:?} registered twice",
            obstacle.id
        );
        self.obstacles.push(obstacle);
    }

    /// Remove an obstacle; returns whether it was registered.
    pub fn deregister(&mut self, id: ObstacleId) -> bool {
        match self.obstacles.iter().position(|ob| ob.id == id) {
            Some(i) => {
                self.obstacles.remove(i);
                true
            }
            None => false,
        }
    }

    /// First registered obstacle (in registration order) overlapping the region.
    pub fn first_hit(&self, row: f64, column: f64, height: u16, width: u16) -> Option<ObstacleId> {
        self.obstacles
            .iter()
            .find(|ob| ob.has_collision(row, column, height, width))
            .map(|ob| ob.id)
    }

    /// Mark a registered obstacle as hit.
    ///
    /// Returns `false` when the obstacle is not registered or already marked;
    /// an obstacle is never recorded twice before its owner consumes the mark.
    pub fn record_collision(&mut self, id: ObstacleId) -> bool {
        if !self.is_registered(id) || self.collisions.contains(&id) {
            return false;
        }
        self.collisions.push(id);
        true
    }

    pub fn collisions(&self) -> &[ObstacleId] {
        &self.collisions
    }

    /// Consume the hit mark of `id`, if any.
    pub fn take_collision(&mut self, id: ObstacleId) -> bool {
        match self.collisions.iter().position(|&hit| hit == id) {
            Some(i) => {
                self.collisions.swap_remove(i);
                true
            }
            None => false,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(1)
    }
}
