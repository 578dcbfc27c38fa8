//! Level data and the Tiled-subset JSON map loader.
//!
//! A level is a tile layer plus an object layer. Malformed level data is
//! rejected here, at load time; the simulation engine assumes a validated
//! level (exactly one player, rectangular grid).

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use tilerun_core::entity::EntityTuning;

use crate::grid::TileGrid;

/// Object type tag in level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Player,
    Monster,
    Treasure,
}

/// One placed object from the level's object layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    /// World-space spawn position (top-left corner of the bounding box).
    pub x: f64,
    pub y: f64,
    /// Physics overrides; missing fields use the world defaults.
    #[serde(default)]
    pub tuning: EntityTuning,
}

/// A level: tile grid dimensions and codes, plus placed objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Row-major tile codes, `width * height` entries.
    pub tiles: Vec<u8>,
    pub objects: Vec<PlacedObject>,
}

impl LevelData {
    /// Check the structural preconditions the simulation engine relies on.
    pub fn validate(&self) -> io::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid("level dimensions must be non-zero"));
        }
        let expected = self.width as usize * self.height as usize;
        if self.tiles.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "tile layer has {} cells, expected {}",
                    self.tiles.len(),
                    expected
                ),
            ));
        }
        let players = self
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Player)
            .count();
        match players {
            1 => Ok(()),
            0 => Err(invalid("level has no player object")),
            n => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("level has {n} player objects, expected 1"),
            )),
        }
    }

    /// Build the immutable tile grid.
    pub fn grid(&self) -> TileGrid {
        TileGrid::new(self.width, self.height, self.tiles.clone())
    }
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

// --- Tiled-export subset ---
// Layer 0 is the tile layer (`data`), layer 1 the object layer
// (`objects` with `type`, position, and a `properties` tuning bag).

#[derive(Debug, Deserialize)]
struct TiledMap {
    width: u32,
    height: u32,
    layers: Vec<TiledLayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TiledLayer {
    data: Option<Vec<u8>>,
    objects: Option<Vec<TiledObject>>,
}

#[derive(Debug, Deserialize)]
struct TiledObject {
    #[serde(rename = "type")]
    kind: String,
    x: f64,
    y: f64,
    #[serde(default)]
    properties: EntityTuning,
}

/// Load and validate a level from a Tiled-style JSON export.
pub fn load_level(path: &Path) -> io::Result<LevelData> {
    let text = std::fs::read_to_string(path)?;
    parse_level(&text)
}

/// Parse and validate a level from Tiled-style JSON text.
pub fn parse_level(text: &str) -> io::Result<LevelData> {
    let map: TiledMap =
        serde_json::from_str(text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut layers = map.layers.into_iter();
    let tiles = layers
        .next()
        .and_then(|l| l.data)
        .ok_or_else(|| invalid("layer 0 must be a tile layer with data"))?;
    let raw_objects = layers
        .next()
        .and_then(|l| l.objects)
        .ok_or_else(|| invalid("layer 1 must be an object layer"))?;

    let mut objects = Vec::with_capacity(raw_objects.len());
    for obj in raw_objects {
        let kind = match obj.kind.as_str() {
            "player" => ObjectKind::Player,
            "monster" => ObjectKind::Monster,
            "treasure" => ObjectKind::Treasure,
            other => {
                log::warn!(
                    "skipping object of unknown type {other:?} at ({}, {})",
                    obj.x,
                    obj.y
                );
                continue;
            }
        };
        objects.push(PlacedObject {
            kind,
            x: obj.x,
            y: obj.y,
            tuning: obj.properties,
        });
    }

    let level = LevelData {
        width: map.width,
        height: map.height,
        tiles,
        objects,
    };
    level.validate()?;
    Ok(level)
}
