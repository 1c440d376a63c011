//! Keyboard-to-velocity mapping for controllable entities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::input::keyboard::{keys, KeyState};

/// Horizontal and vertical walking speed in px/s.
pub const DEFAULT_MOVE_SPEED: f32 = 300.0;

/// Upward speed given by a jump, in px/s.
pub const DEFAULT_JUMP_IMPULSE: f32 = 800.0;

/// Movement bindings for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    pub up: u32,
    pub down: u32,
    pub left: u32,
    pub right: u32,
    pub jump: u32,
}

impl KeyMap {
    /// Arrow keys, with Up doubling as jump.
    pub fn arrows() -> Self {
        Self {
            up: keys::UP,
            down: keys::DOWN,
            left: keys::LEFT,
            right: keys::RIGHT,
            jump: keys::UP,
        }
    }
}

impl Default for KeyMap {
    /// W/A/S/D with Space to jump.
    fn default() -> Self {
        Self {
            up: keys::W,
            down: keys::S,
            left: keys::A,
            right: keys::D,
            jump: keys::SPACE,
        }
    }
}

/// Drives controllable entities from the keyboard and owns the pause toggle.
///
/// One entity can be marked as *the* controlled entity (it uses the default
/// map unless it has its own); any other entity with a registered map is
/// driven too, e.g. a second player.
#[derive(Debug, Clone)]
pub struct Controller {
    move_speed: f32,
    jump_impulse: f32,
    default_map: KeyMap,
    maps: HashMap<EntityId, KeyMap>,
    controlled: Option<EntityId>,
    paused: bool,
}

impl Controller {
    pub fn new(move_speed: f32, jump_impulse: f32) -> Self {
        Self {
            move_speed,
            jump_impulse,
            default_map: KeyMap::default(),
            maps: HashMap::new(),
            controlled: None,
            paused: false,
        }
    }

    pub fn set_controlled(&mut self, id: Option<EntityId>) {
        self.controlled = id;
    }

    pub fn controlled(&self) -> Option<EntityId> {
        self.controlled
    }

    /// Bind keys for a specific entity (overrides the default map).
    pub fn set_key_map_for(&mut self, id: EntityId, map: KeyMap) {
        self.maps.insert(id, map);
    }

    pub fn clear_key_map_for(&mut self, id: EntityId) {
        self.maps.remove(&id);
    }

    /// Map used by the controlled entity when it has no override.
    pub fn set_default_key_map(&mut self, map: KeyMap) {
        self.default_map = map;
    }

    pub fn key_map_for(&self, id: EntityId) -> &KeyMap {
        self.maps.get(&id).unwrap_or(&self.default_map)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Apply this tick's keyboard snapshot: toggle pause on an Escape press,
    /// then (unless paused) overwrite the velocity of every driven entity.
    pub fn apply(&mut self, input: &KeyState, scene: &mut Scene) {
        if input.pressed(keys::ESCAPE) {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        }
        if self.paused {
            return;
        }

        if let Some(id) = self.controlled {
            let map = *self.key_map_for(id);
            if let Some(entity) = scene.get_mut(id) {
                drive(entity, &map, input, self.move_speed, self.jump_impulse);
            }
        }

        for (&id, map) in &self.maps {
            if Some(id) == self.controlled {
                continue;
            }
            if let Some(entity) = scene.get_mut(id) {
                drive(entity, map, input, self.move_speed, self.jump_impulse);
            }
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_SPEED, DEFAULT_JUMP_IMPULSE)
    }
}

/// -1, 0 or 1 from a pair of opposing keys; both held cancels out.
fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Overwrite an entity's velocity from its key map.
///
/// Horizontal velocity always follows the keys. Vertical velocity follows
/// the keys only for entities without gravity; gravity-bound entities get a
/// single jump impulse per jump press instead, refused while already jumping.
pub fn drive(entity: &mut Entity, map: &KeyMap, input: &KeyState, speed: f32, jump_impulse: f32) {
    if entity.flags.disabled {
        return;
    }

    entity.vel.x = axis(input.down(map.left), input.down(map.right)) * speed;

    if !entity.flags.gravity {
        entity.vel.y = axis(input.down(map.up), input.down(map.down)) * speed;
    } else if input.pressed(map.jump) && !entity.is_jumping() {
        entity.vel.y = -jump_impulse;
        entity.set_jumping(true);
    }
}
