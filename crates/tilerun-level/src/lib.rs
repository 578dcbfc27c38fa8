//! Level data for tilerun.
//!
//! Tile grid lookups, Tiled-subset map loading and validation,
//! and seeded demo-level generation.

pub mod grid;
pub mod map;
pub mod procgen;

// Re-export key types for convenience.
pub use grid::TileGrid;
pub use map::{LevelData, ObjectKind, PlacedObject};
