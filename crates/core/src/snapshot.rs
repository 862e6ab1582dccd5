//! Serializable view of the world, for logs and tests.

use serde::Serialize;

use crate::obstacle::{Obstacle, ObstacleId};
use crate::types::Year;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub year: Year,
    pub game_over: bool,
    pub obstacles: Vec<Obstacle>,
    pub collisions: Vec<ObstacleId>,
}

impl World {
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            year: self.year(),
            game_over: self.is_game_over(),
            obstacles: self.obstacles().to_vec(),
            collisions: self.collisions().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serializes_world_state() {
        let mut world = World::new(3);
        let id = world.allocate_obstacle_id();
        world.register(Obstacle::new(id, 1.0, 2.5, 2, 3));
        world.record_collision(id);

        let json = serde_json::to_value(world.snapshot()).unwrap();
        assert_eq!(json["year"], 1957);
        assert_eq!(json["game_over"], false);
        assert_eq!(json["obstacles"][0]["column"], 2.5);
        assert_eq!(json["obstacles"][0]["id"], 1);
        assert_eq!(json["collisions"][0], 1);
    }
}
