//! TileGrid: immutable per-level lookup of tile codes by cell coordinate.

use serde::{Deserialize, Serialize};

use tilerun_core::constants::TILE;

/// Tile code for an empty cell. Codes 1..N are solid material variants,
/// distinguished only for rendering color.
pub const EMPTY: u8 = 0;

/// The level's tile grid: row-major codes, `width * height` cells.
/// Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<u8>,
}

impl TileGrid {
    /// Create a grid from row-major tile codes.
    pub fn new(width: u32, height: u32, tiles: Vec<u8>) -> Self {
        debug_assert_eq!(tiles.len(), width as usize * height as usize);
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile code at cell (tx, ty). Out-of-bounds lookups — including
    /// negative coordinates — are empty, not an error.
    pub fn tile(&self, tx: i64, ty: i64) -> u8 {
        if tx < 0 || ty < 0 || tx >= self.width as i64 || ty >= self.height as i64 {
            return EMPTY;
        }
        self.tiles[(tx + ty * self.width as i64) as usize]
    }

    /// Whether the cell at (tx, ty) is solid.
    pub fn is_solid(&self, tx: i64, ty: i64) -> bool {
        self.tile(tx, ty) != EMPTY
    }

    /// Iterate all cells with their codes, row by row (for renderers).
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &code)| {
            let tx = i as u32 % self.width;
            let ty = i as u32 / self.width;
            (tx, ty, code)
        })
    }
}

/// Tile coordinate containing a world-space coordinate.
pub fn to_tile(p: f64) -> i64 {
    (p / TILE).floor() as i64
}

/// World-space coordinate of the near edge of a tile row or column.
pub fn to_world(t: i64) -> f64 {
    t as f64 * TILE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_grid() -> TileGrid {
        // 4×3: solid bottom row, one block at (2, 1).
        #[rustfmt::skip]
        let tiles = vec![
            0, 0, 0, 0,
            0, 0, 5, 0,
            1, 2, 3, 4,
        ];
        TileGrid::new(4, 3, tiles)
    }

    #[test]
    fn test_tile_lookup() {
        let grid = make_grid();
        assert_eq!(grid.tile(0, 0), 0);
        assert_eq!(grid.tile(2, 1), 5);
        assert_eq!(grid.tile(3, 2), 4);
        assert!(grid.is_solid(0, 2));
        assert!(!grid.is_solid(1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_empty() {
        let grid = make_grid();
        assert_eq!(grid.tile(-1, 0), EMPTY);
        assert_eq!(grid.tile(0, -1), EMPTY);
        assert_eq!(grid.tile(4, 0), EMPTY);
        assert_eq!(grid.tile(0, 3), EMPTY);
        assert!(!grid.is_solid(-100, -100));
        assert!(!grid.is_solid(1_000_000, 0));
    }

    #[test]
    fn test_world_tile_mapping() {
        assert_eq!(to_tile(0.0), 0);
        assert_eq!(to_tile(31.9), 0);
        assert_eq!(to_tile(32.0), 1);
        assert_eq!(to_tile(-0.5), -1);
        assert_eq!(to_world(3), 96.0);
        assert_eq!(to_world(-1), -32.0);
    }

    #[test]
    fn test_cells_iteration() {
        let grid = make_grid();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[6], (2, 1, 5));
        assert_eq!(cells[11], (3, 2, 4));
    }
}
