//! Pairwise interaction rules: player vs. monster, player vs. treasure.

use tilerun_core::constants::TILE;
use tilerun_core::entity::{Entity, EntityKind};
use tilerun_core::events::GameEvent;
use tilerun_core::types::Vec2;

/// Inclusive-edge AABB overlap: two boxes overlap unless one's near edge
/// is strictly past the other's far edge. The one-unit forgiveness on the
/// far edges is deliberate tuning — a corner-perfect touch does not count
/// as contact.
pub fn overlap(a: Vec2, aw: f64, ah: f64, b: Vec2, bw: f64, bh: f64) -> bool {
    !((a.x + aw - 1.0) < b.x
        || (b.x + bw - 1.0) < a.x
        || (a.y + ah - 1.0) < b.y
        || (b.y + bh - 1.0) < a.y)
}

/// Resolve contact between the player and one live monster that has just
/// moved. Falling onto the monster from more than half a tile above
/// stomps it; any other contact kills the player. Never both.
pub fn monster_contact(
    player: &mut Entity,
    monster: &mut Entity,
    index: usize,
    events: &mut Vec<GameEvent>,
) {
    if !overlap(player.position, TILE, TILE, monster.position, TILE, TILE) {
        return;
    }

    let stomp =
        player.velocity.y > 0.0 && monster.position.y - player.position.y > TILE / 2.0;
    if stomp {
        if let EntityKind::Player { killed, .. } = &mut player.kind {
            *killed += 1;
        }
        if let EntityKind::Monster { dead } = &mut monster.kind {
            *dead = true;
        }
        events.push(GameEvent::MonsterStomped { index });
    } else {
        kill_player(player, events);
    }
}

/// The player dies: respawn at the start position with velocity zeroed.
/// The player is never marked inert — lives are unlimited.
fn kill_player(player: &mut Entity, events: &mut Vec<GameEvent>) {
    player.position = player.start;
    player.velocity = Vec2::ZERO;
    events.push(GameEvent::PlayerKilled {
        respawn: player.start,
    });
}

/// Sweep all uncollected treasures against the player. Collection is
/// terminal: an inert treasure is skipped and can never double-count.
pub fn collect_treasures(
    player: &mut Entity,
    treasures: &mut [Entity],
    events: &mut Vec<GameEvent>,
) {
    for (index, treasure) in treasures.iter_mut().enumerate() {
        if treasure.is_inert() {
            continue;
        }
        if overlap(player.position, TILE, TILE, treasure.position, TILE, TILE) {
            if let EntityKind::Treasure { collected } = &mut treasure.kind {
                *collected = true;
            }
            if let EntityKind::Player { collected, .. } = &mut player.kind {
                *collected += 1;
            }
            events.push(GameEvent::TreasureCollected { index });
        }
    }
}
