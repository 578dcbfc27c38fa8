//! Snapshot building: the render view of the world for one display frame.

use tilerun_core::entity::{Entity, EntityKind};
use tilerun_core::events::GameEvent;
use tilerun_core::state::{EntityView, HudView, TreasureView, WorldSnapshot};
use tilerun_core::types::SimTime;

use crate::world::World;

/// Build the frame view. `leftover_secs` is the step clock's unconsumed
/// remainder; positions are extrapolated by it so motion stays smooth at
/// display rates that do not divide the step rate.
pub fn build(
    world: &World,
    time: SimTime,
    leftover_secs: f64,
    events: Vec<GameEvent>,
) -> WorldSnapshot {
    let (killed, collected) = match world.player.kind {
        EntityKind::Player { killed, collected } => (killed, collected),
        _ => (0, 0),
    };

    WorldSnapshot {
        time,
        player: entity_view(&world.player, leftover_secs),
        monsters: world
            .monsters
            .iter()
            .filter(|m| !m.is_inert())
            .map(|m| entity_view(m, leftover_secs))
            .collect(),
        treasures: world
            .treasures
            .iter()
            .filter(|t| !t.is_inert())
            .map(|t| TreasureView {
                position: t.position,
            })
            .collect(),
        hud: HudView { killed, collected },
        events,
    }
}

fn entity_view(entity: &Entity, leftover_secs: f64) -> EntityView {
    EntityView {
        position: entity.position + entity.velocity * leftover_secs,
        velocity: entity.velocity,
        falling: entity.falling,
    }
}
