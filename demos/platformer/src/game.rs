use loopy_engine::*;
use loopy_engine::api::game::GameConfig;
use loopy_engine::input::keyboard::KeyState;

const WORLD_W: f32 = 1920.0;
const WORLD_H: f32 = 1080.0;
const LEVEL: &str = include_str!("../level.json");

/// Single-screen platformer: walk with A/D, jump with Space, avoid the
/// slime, grab the coin. Escape pauses.
pub struct Platformer {
    collected: Vec<EntityId>,
}

impl Platformer {
    pub fn new() -> Self {
        Self { collected: Vec::new() }
    }

    pub fn collected(&self) -> usize {
        self.collected.len()
    }
}

impl Game for Platformer {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.collected.clear();
        match LevelDesc::from_json(LEVEL) {
            Ok(level) => {
                ctx.load_level(&level);
            }
            Err(e) => log::error!("Platformer: bad built-in level: {}", e),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, _input: &KeyState) {
        for contact in &ctx.contacts {
            let Some(other) = ctx.scene.get(contact.other) else {
                continue;
            };
            if other.reaction == CollisionReaction::Pickup
                && other.flags.disabled
                && !self.collected.contains(&other.id)
            {
                self.collected.push(other.id);
                log::info!("Platformer: picked up '{}' ({} total)", other.name, self.collected.len());
            }
        }
    }
}
