//! World snapshot — the render-facing view built once per display frame.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::types::{SimTime, Vec2};

/// Complete render view of the world for one display frame.
///
/// Inert entities (dead monsters, collected treasures) are absent; the
/// HUD counters carry the permanent record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub player: EntityView,
    /// Live monsters only.
    pub monsters: Vec<EntityView>,
    /// Uncollected treasures only.
    pub treasures: Vec<TreasureView>,
    pub hud: HudView,
    /// Interaction outcomes since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// A moving entity as the renderer should draw it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityView {
    /// Position extrapolated by the step clock's leftover fraction.
    pub position: Vec2,
    pub velocity: Vec2,
    pub falling: bool,
}

/// A static pickup as the renderer should draw it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreasureView {
    pub position: Vec2,
}

/// HUD counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Monsters stomped.
    pub killed: u32,
    /// Treasures collected.
    pub collected: u32,
}
