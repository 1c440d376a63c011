use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// How an entity responds when another entity's move runs into it.
///
/// Dispatched by tag from the collision resolver, once per touching pair per
/// resolve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionReaction {
    /// Nothing happens.
    #[default]
    None,
    /// Turns around: horizontal velocity is reversed.
    Enemy,
    /// Collected: the entity is disabled and hidden, and stops blocking the
    /// move that collected it.
    Pickup,
    /// Only counts the touch.
    Trigger,
}

impl CollisionReaction {
    /// Apply this reaction to `target`, which was just touched by `by`.
    pub fn react(self, target: &mut Entity, by: EntityId) {
        match self {
            CollisionReaction::None => return,
            CollisionReaction::Enemy => {
                target.vel.x = -target.vel.x;
            }
            CollisionReaction::Pickup => {
                target.flags.disabled = true;
                target.visible = false;
            }
            CollisionReaction::Trigger => {}
        }
        target.touches += 1;
        log::debug!("{:?} '{}' touched by {:?} ({:?})", target.id, target.name, by, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn none_leaves_target_alone() {
        let mut e = Entity::new(EntityId(1)).with_vel(Vec2::new(5.0, 0.0));
        CollisionReaction::None.react(&mut e, EntityId(2));
        assert_eq!(e.vel, Vec2::new(5.0, 0.0));
        assert_eq!(e.touches, 0);
    }

    #[test]
    fn enemy_turns_around() {
        let mut e = Entity::new(EntityId(1)).with_vel(Vec2::new(5.0, 3.0));
        CollisionReaction::Enemy.react(&mut e, EntityId(2));
        assert_eq!(e.vel, Vec2::new(-5.0, 3.0));
        assert_eq!(e.touches, 1);
    }

    #[test]
    fn pickup_is_collected() {
        let mut e = Entity::new(EntityId(1));
        CollisionReaction::Pickup.react(&mut e, EntityId(2));
        assert!(e.flags.disabled);
        assert!(!e.visible);
    }

    #[test]
    fn trigger_counts_touches() {
        let mut e = Entity::new(EntityId(1));
        CollisionReaction::Trigger.react(&mut e, EntityId(2));
        CollisionReaction::Trigger.react(&mut e, EntityId(3));
        assert_eq!(e.touches, 2);
    }
}
