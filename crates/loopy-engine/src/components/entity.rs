use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::{AtlasId, EntityId};
use crate::components::animation::SpriteSheet;
use crate::components::path::{AutoPath, PathVector};
use crate::components::reaction::CollisionReaction;
use crate::core::collision::Aabb;

/// Behaviour flags of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityFlags {
    /// Integrated each tick (static scenery is not).
    pub movable: bool,
    /// Driven by keyboard input.
    pub controllable: bool,
    /// Pulled down by the world's gravity.
    pub gravity: bool,
    /// Touching it resets a controllable entity.
    pub enemy: bool,
    /// Landing on it clears a controllable entity's jump.
    pub platform: bool,
    /// Takes part in collision probing. Non-collidable entities are ghosts.
    pub collidable: bool,
    /// Skipped by updates and probing. Still rendered while visible.
    pub disabled: bool,
    /// Mid-jump; a new jump impulse is refused until it clears.
    pub jumping: bool,
    /// Raised by enemy contact, consumed by the respawn step.
    pub pending_reset: bool,
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self {
            movable: false,
            controllable: false,
            gravity: false,
            enemy: false,
            platform: false,
            collidable: true,
            disabled: false,
            jumping: false,
            pending_reset: false,
        }
    }
}

/// Fat Entity: a single struct carrying everything the simulation needs.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Free-form label for finding entities and for logs.
    pub name: String,
    /// Top-left corner in world space (y grows downward).
    pub pos: Vec2,
    /// Velocity in units per second.
    pub vel: Vec2,
    /// Acceleration in units per second squared.
    pub accel: Vec2,
    /// Unscaled frame size (width, height).
    pub size: Vec2,
    /// Uniform scale applied to `size` for both drawing and collision.
    pub scale: f32,
    pub flags: EntityFlags,
    /// Whether the entity is drawn.
    pub visible: bool,
    /// Texture atlas the sprite sheet lives in.
    pub atlas: AtlasId,
    pub sheet: SpriteSheet,
    pub path: AutoPath,
    pub reaction: CollisionReaction,
    /// How many times this entity's reaction has run.
    pub touches: u32,
}

impl Entity {
    /// Create a new static, collidable 1×1 entity at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: String::new(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size: Vec2::ONE,
            scale: 1.0,
            flags: EntityFlags::default(),
            visible: true,
            atlas: AtlasId(0),
            sheet: SpriteSheet::still(),
            path: AutoPath::default(),
            reaction: CollisionReaction::None,
            touches: 0,
        }
    }

    /// Build an entity from a description.
    pub fn from_desc(id: EntityId, desc: &EntityDesc) -> Self {
        Self {
            id,
            name: desc.name.clone(),
            pos: desc.pos,
            vel: desc.vel,
            accel: desc.accel,
            size: desc.size,
            scale: desc.scale,
            flags: desc.flags,
            visible: true,
            atlas: desc.atlas,
            sheet: desc.sheet,
            path: AutoPath::new(desc.path.clone()),
            reaction: desc.reaction,
            touches: 0,
        }
    }

    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_accel(mut self, accel: Vec2) -> Self {
        self.accel = accel;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_atlas(mut self, atlas: AtlasId) -> Self {
        self.atlas = atlas;
        self
    }

    pub fn with_sheet(mut self, sheet: SpriteSheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_path(mut self, vectors: Vec<PathVector>) -> Self {
        self.path = AutoPath::new(vectors);
        self
    }

    pub fn with_reaction(mut self, reaction: CollisionReaction) -> Self {
        self.reaction = reaction;
        self
    }

    // -- Geometry --

    /// Scaled size: the rendered box and the collision box.
    pub fn extent(&self) -> Vec2 {
        self.size * self.scale
    }

    /// Collision box at the entity's current position.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.extent())
    }

    // -- Flag accessors used by collision side effects and the respawn step --

    pub fn is_jumping(&self) -> bool {
        self.flags.jumping
    }

    pub fn set_jumping(&mut self, jumping: bool) {
        self.flags.jumping = jumping;
    }

    pub fn is_pending_reset(&self) -> bool {
        self.flags.pending_reset
    }

    pub fn set_pending_reset(&mut self, reset: bool) {
        self.flags.pending_reset = reset;
    }

    /// Whether other entities' probes can hit this one.
    pub fn is_solid(&self) -> bool {
        self.flags.collidable && !self.flags.disabled
    }

    /// Whether the auto-motion path drives this entity's velocity.
    pub fn follows_path(&self) -> bool {
        self.flags.movable && !self.flags.controllable && !self.path.is_empty()
    }
}

/// Serializable description of an entity, used by level files and
/// `EngineContext::spawn`. Every option is named; omitted fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDesc {
    pub name: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    pub size: Vec2,
    pub scale: f32,
    pub flags: EntityFlags,
    pub atlas: AtlasId,
    pub sheet: SpriteSheet,
    pub path: Vec<PathVector>,
    pub reaction: CollisionReaction,
}

impl Default for EntityDesc {
    fn default() -> Self {
        Self {
            name: String::new(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size: Vec2::ONE,
            scale: 1.0,
            flags: EntityFlags::default(),
            atlas: AtlasId(0),
            sheet: SpriteSheet::still(),
            path: Vec::new(),
            reaction: CollisionReaction::None,
        }
    }
}
