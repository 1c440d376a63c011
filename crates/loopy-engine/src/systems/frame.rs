//! Frame driver. Runs one simulation tick over the whole scene.
//!
//! Entities are processed strictly in scene order, and each one finishes its
//! whole pipeline (respawn, animation, auto-motion, integration, collision)
//! before the next one starts. Collision reactions can change entities further
//! down the list, and those changes are visible when their turn comes.

use glam::Vec2;

use crate::api::types::Contact;
use crate::components::entity::Entity;
use crate::core::collision::resolve;
use crate::core::physics::Integrator;
use crate::core::scene::Scene;

/// Consume a pending reset: move the entity to `spawn`, stop it, and clear
/// both the reset and jump flags.
pub fn respawn(entity: &mut Entity, spawn: Vec2) {
    log::info!("{:?} '{}' respawning at {:?}", entity.id, entity.name, spawn);
    entity.pos = spawn;
    entity.vel = Vec2::ZERO;
    entity.set_jumping(false);
    entity.set_pending_reset(false);
}

/// Let the auto-motion path set the entity's velocity for this tick.
pub fn advance_path(entity: &mut Entity) {
    if !entity.follows_path() {
        return;
    }
    if let Some(vel) = entity.path.advance() {
        entity.vel = vel;
    }
}

/// Run one tick.
///
/// `frame` is the tick number used for animation timing. Every contact the
/// resolver reports is appended to `contacts`.
pub fn step_frame(
    scene: &mut Scene,
    integrator: &Integrator,
    frame: u64,
    spawn: Vec2,
    contacts: &mut Vec<Contact>,
) {
    let entities = scene.entities_mut();

    for index in 0..entities.len() {
        let entity = &mut entities[index];
        if entity.flags.disabled {
            continue;
        }

        if entity.flags.controllable && entity.is_pending_reset() {
            respawn(entity, spawn);
        }

        entity.sheet.advance(frame);
        advance_path(entity);

        let target = integrator.integrate(entity);
        let resolution = resolve(entities, index, target);
        contacts.extend(resolution.contacts);
    }
}
