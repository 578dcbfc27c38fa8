//! Entity kinematics: per-step integration and tile-collision resolution.
//!
//! Horizontal and vertical collision are resolved independently (axis
//! separation), not as a single swept test. Straddle checks against the
//! diagonal neighbor keep a corner hit from tunneling through, but an
//! entity moving faster than one tile per step can still tunnel — a
//! documented limit of the scheme, not something this module hides.

use tilerun_core::constants::{AIR_CONTROL, TILE};
use tilerun_core::entity::Entity;
use tilerun_level::grid::{to_tile, to_world};
use tilerun_level::TileGrid;

/// Advance one entity by a fixed step against the tile grid.
///
/// Mutates acceleration, velocity, and position in place. Total over any
/// well-formed input: out-of-bounds cells read as empty.
pub fn update(entity: &mut Entity, grid: &TileGrid, dt: f64) {
    let wasleft = entity.velocity.x < 0.0;
    let wasright = entity.velocity.x > 0.0;
    let falling = entity.falling;
    // Reduced air control: half accel and friction while airborne.
    let control = if falling { AIR_CONTROL } else { 1.0 };
    let friction = entity.params.friction * control;
    let accel = entity.params.accel * control;

    entity.acceleration.x = 0.0;
    entity.acceleration.y = entity.params.gravity;

    if entity.left {
        entity.acceleration.x -= accel;
    } else if wasleft {
        entity.acceleration.x += friction;
    }

    if entity.right {
        entity.acceleration.x += accel;
    } else if wasright {
        entity.acceleration.x -= friction;
    }

    // One instantaneous kick per ground contact, not a sustained force.
    if entity.jump && !entity.jumping && !falling {
        entity.acceleration.y -= entity.params.impulse;
        entity.jumping = true;
    }

    entity.position.x += dt * entity.velocity.x;
    entity.position.y += dt * entity.velocity.y;
    entity.velocity.x = (entity.velocity.x + dt * entity.acceleration.x)
        .clamp(-entity.params.maxdx, entity.params.maxdx);
    entity.velocity.y = (entity.velocity.y + dt * entity.acceleration.y)
        .clamp(-entity.params.maxdy, entity.params.maxdy);

    // Friction decelerates toward zero; a discrete step that crosses zero
    // would otherwise jiggle the entity side to side.
    if (wasleft && entity.velocity.x > 0.0) || (wasright && entity.velocity.x < 0.0) {
        entity.velocity.x = 0.0;
    }

    let tx = to_tile(entity.position.x);
    let ty = to_tile(entity.position.y);
    let nx = entity.position.x % TILE;
    let mut ny = entity.position.y % TILE;
    let mut cell = grid.is_solid(tx, ty);
    let mut cellright = grid.is_solid(tx + 1, ty);
    let celldown = grid.is_solid(tx, ty + 1);
    let celldiag = grid.is_solid(tx + 1, ty + 1);

    if entity.velocity.y > 0.0 {
        if (celldown && !cell) || (celldiag && !cellright && nx != 0.0) {
            // Landed: snap to the top of the tile row.
            entity.position.y = to_world(ty);
            entity.velocity.y = 0.0;
            entity.falling = false;
            entity.jumping = false;
            ny = 0.0;
        }
    } else if entity.velocity.y < 0.0 {
        if (cell && !celldown) || (cellright && !celldiag && nx != 0.0) {
            // Hit a ceiling: snap below it, and re-read the neighbor row
            // the horizontal pass must now test against.
            entity.position.y = to_world(ty + 1);
            entity.velocity.y = 0.0;
            cell = celldown;
            cellright = celldiag;
            ny = 0.0;
        }
    }

    if entity.velocity.x > 0.0 {
        if (cellright && !cell) || (celldiag && !celldown && ny != 0.0) {
            entity.position.x = to_world(tx);
            entity.velocity.x = 0.0;
        }
    } else if entity.velocity.x < 0.0 {
        if (cell && !cellright) || (celldown && !celldiag && ny != 0.0) {
            entity.position.x = to_world(tx + 1);
            entity.velocity.x = 0.0;
        }
    }

    // Patrol turnaround: wall ahead, or no ground past the leading edge.
    if entity.is_monster() {
        if entity.left && (cell || !celldown) {
            entity.left = false;
            entity.right = true;
        } else if entity.right && (cellright || !celldiag) {
            entity.right = false;
            entity.left = true;
        }
    }

    entity.falling = !(celldown || (nx != 0.0 && celldiag));
}
