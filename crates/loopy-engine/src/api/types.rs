use serde::{Deserialize, Serialize};

/// Unique identifier for an entity in the scene.
///
/// Entities are compared by this handle, never by value: two entities may
/// share an identical transform and still be distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Identifies which texture atlas (sprite sheet) an entity draws from.
/// The host owns the texture; the engine only carries the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AtlasId(pub u32);

/// A movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One overlapping pair found while resolving a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The entity that was moving.
    pub mover: EntityId,
    /// The entity it ran into.
    pub other: EntityId,
    /// The axis whose probe found the overlap.
    pub axis: Axis,
    /// Penetration depth along `axis` in the direction of travel.
    pub penetration: f32,
}
