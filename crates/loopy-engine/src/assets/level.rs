use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::entity::EntityDesc;

/// A level: world overrides plus the entities to spawn, in update order.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDesc {
    /// Overrides the world gravity when present.
    #[serde(default)]
    pub gravity: Option<f32>,
    /// Overrides the respawn point when present.
    #[serde(default)]
    pub respawn: Option<Vec2>,
    /// Name of the entity the keyboard drives.
    #[serde(default)]
    pub player: Option<String>,
    pub entities: Vec<EntityDesc>,
}

impl LevelDesc {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Description of the player entity, if the level names one.
    pub fn player_desc(&self) -> Option<&EntityDesc> {
        let name = self.player.as_deref()?;
        self.entities.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::path::PathVector;
    use crate::components::reaction::CollisionReaction;

    #[test]
    fn parse_minimal_level() {
        let level = LevelDesc::from_json(r#"{ "entities": [] }"#).unwrap();
        assert!(level.entities.is_empty());
        assert_eq!(level.gravity, None);
        assert_eq!(level.player_desc(), None);
    }

    #[test]
    fn parse_full_level() {
        let json = r#"{
            "gravity": 1500.0,
            "respawn": [10.0, 20.0],
            "player": "hero",
            "entities": [
                {
                    "name": "hero",
                    "size": [32.0, 32.0],
                    "flags": { "movable": true, "controllable": true, "gravity": true }
                },
                {
                    "name": "slime",
                    "flags": { "movable": true, "enemy": true },
                    "path": [
                        { "vel": [60.0, 0.0], "ticks": 30 },
                        { "vel": [-60.0, 0.0], "ticks": 30 }
                    ]
                },
                { "name": "coin", "reaction": "pickup" }
            ]
        }"#;
        let level = LevelDesc::from_json(json).unwrap();
        assert_eq!(level.gravity, Some(1500.0));
        assert_eq!(level.respawn, Some(Vec2::new(10.0, 20.0)));
        assert_eq!(level.entities.len(), 3);

        let hero = level.player_desc().unwrap();
        assert!(hero.flags.controllable);
        assert_eq!(hero.size, Vec2::splat(32.0));

        assert_eq!(
            level.entities[1].path,
            vec![
                PathVector::new(Vec2::new(60.0, 0.0), 30),
                PathVector::new(Vec2::new(-60.0, 0.0), 30),
            ]
        );
        assert_eq!(level.entities[2].reaction, CollisionReaction::Pickup);
    }

    #[test]
    fn missing_entities_is_an_error() {
        assert!(LevelDesc::from_json(r#"{ "gravity": 10.0 }"#).is_err());
        assert!(LevelDesc::from_json("not json").is_err());
    }

    #[test]
    fn unknown_player_resolves_to_none() {
        let level = LevelDesc::from_json(r#"{ "player": "ghost", "entities": [{ "name": "a" }] }"#)
            .unwrap();
        assert_eq!(level.player_desc(), None);
    }
}
