//! Seeded demo-level generation.
//!
//! Builds a small valid level for the headless driver when no map file is
//! given: a walled box with a ground strip, floating platforms, patrolling
//! monsters, and treasures. Same seed, same level.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tilerun_core::constants::TILE;
use tilerun_core::entity::EntityTuning;

use crate::map::{LevelData, ObjectKind, PlacedObject};

/// Demo level width in tiles.
const WIDTH: u32 = 40;
/// Demo level height in tiles.
const HEIGHT: u32 = 24;
/// Number of floating platforms.
const PLATFORMS: usize = 6;
/// Patrol speed for generated monsters (tiles/s).
const MONSTER_MAXDX: f64 = 4.0;

/// Generate the demo level from a seed.
pub fn demo_level(seed: u64) -> LevelData {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tiles = vec![0u8; (WIDTH * HEIGHT) as usize];
    let idx = |tx: u32, ty: u32| (tx + ty * WIDTH) as usize;

    // Walled box with a ground strip.
    for ty in 0..HEIGHT {
        tiles[idx(0, ty)] = 1;
        tiles[idx(WIDTH - 1, ty)] = 1;
    }
    for tx in 0..WIDTH {
        tiles[idx(tx, HEIGHT - 1)] = 2;
    }

    let mut objects = vec![PlacedObject {
        kind: ObjectKind::Player,
        x: 2.0 * TILE,
        y: (HEIGHT - 2) as f64 * TILE,
        tuning: EntityTuning::default(),
    }];

    for n in 0..PLATFORMS {
        let len = rng.gen_range(3..8u32);
        let tx = rng.gen_range(2..WIDTH - 2 - len);
        let ty = rng.gen_range(6..HEIGHT - 4);
        let code = rng.gen_range(1..=5u8);
        for t in tx..tx + len {
            tiles[idx(t, ty)] = code;
        }

        // Every other platform gets a patroller; all get a treasure.
        if n % 2 == 0 {
            objects.push(PlacedObject {
                kind: ObjectKind::Monster,
                x: tx as f64 * TILE,
                y: (ty - 1) as f64 * TILE,
                tuning: EntityTuning {
                    maxdx: Some(MONSTER_MAXDX),
                    left: true,
                    ..Default::default()
                },
            });
        }
        objects.push(PlacedObject {
            kind: ObjectKind::Treasure,
            x: (tx + len - 1) as f64 * TILE,
            y: (ty - 1) as f64 * TILE,
            tuning: EntityTuning::default(),
        });
    }

    LevelData {
        width: WIDTH,
        height: HEIGHT,
        tiles,
        objects,
    }
}
