//! World state: the grid and every entity, built once from level data.

use tilerun_core::entity::Entity;
use tilerun_core::types::Vec2;
use tilerun_level::map::{LevelData, ObjectKind};
use tilerun_level::TileGrid;

/// Explicitly owned world state, passed by reference into each phase
/// function. Entity storage never reorders; monster/treasure indices are
/// stable for the whole session.
#[derive(Debug, Clone)]
pub struct World {
    pub grid: TileGrid,
    pub player: Entity,
    pub monsters: Vec<Entity>,
    pub treasures: Vec<Entity>,
}

impl World {
    /// Build the world from level data.
    ///
    /// Assumes the level passed validation (exactly one player object,
    /// rectangular tile layer); on a violated precondition the player
    /// falls back to a default spawn rather than crashing.
    pub fn from_level(level: &LevelData) -> Self {
        let mut player = None;
        let mut monsters = Vec::new();
        let mut treasures = Vec::new();

        for obj in &level.objects {
            let position = Vec2::new(obj.x, obj.y);
            match obj.kind {
                ObjectKind::Player => player = Some(Entity::player(position, &obj.tuning)),
                ObjectKind::Monster => monsters.push(Entity::monster(position, &obj.tuning)),
                ObjectKind::Treasure => treasures.push(Entity::treasure(position, &obj.tuning)),
            }
        }

        Self {
            grid: level.grid(),
            player: player.unwrap_or_else(|| Entity::player(Vec2::ZERO, &Default::default())),
            monsters,
            treasures,
        }
    }
}
