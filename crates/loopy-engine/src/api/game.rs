use glam::Vec2;

use crate::api::types::{Contact, EntityId};
use crate::assets::level::LevelDesc;
use crate::components::entity::{Entity, EntityDesc};
use crate::core::physics::{Integrator, DEFAULT_DT, DEFAULT_GRAVITY};
use crate::core::scene::Scene;
use crate::input::control::{Controller, DEFAULT_JUMP_IMPULSE, DEFAULT_MOVE_SPEED};
use crate::input::keyboard::KeyState;
use crate::renderer::instance::RenderBuffer;
use crate::systems::frame::step_frame;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Downward acceleration in px/s² applied to gravity-affected entities
    /// (default: 2000). Y grows downward.
    pub gravity: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Keyboard walking speed in px/s (default: 300).
    pub move_speed: f32,
    /// Upward speed of a jump in px/s (default: 800).
    pub jump_impulse: f32,
    /// Where controllable entities reappear after touching an enemy.
    pub respawn: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: DEFAULT_DT,
            gravity: DEFAULT_GRAVITY,
            world_width: 1920.0,
            world_height: 1080.0,
            max_instances: 512,
            move_speed: DEFAULT_MOVE_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            respawn: Vec2::new(500.0, -100.0),
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-tick game logic, run after the keyboard has been applied and before
    /// the simulation step. Not called while paused.
    fn update(&mut self, _ctx: &mut EngineContext, _input: &KeyState) {}

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub integrator: Integrator,
    pub controller: Controller,
    /// Every overlap found during the most recent tick.
    pub contacts: Vec<Contact>,
    respawn: Vec2,
    frame: u64,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            integrator: Integrator::new(config.gravity, config.fixed_dt),
            controller: Controller::new(config.move_speed, config.jump_impulse),
            contacts: Vec::new(),
            respawn: config.respawn,
            frame: 0,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Build an entity from its description and append it to the scene.
    pub fn spawn(&mut self, desc: &EntityDesc) -> EntityId {
        let id = self.next_id();
        self.scene.spawn(Entity::from_desc(id, desc));
        id
    }

    /// Replace the current scene with a level's entities.
    ///
    /// Applies the level's gravity and respawn overrides and hands keyboard
    /// control to the entity named as the player. Returns the new IDs in
    /// level order.
    pub fn load_level(&mut self, level: &LevelDesc) -> Vec<EntityId> {
        self.teardown();

        if let Some(gravity) = level.gravity {
            self.integrator.set_gravity(gravity);
        }
        if let Some(respawn) = level.respawn {
            self.respawn = respawn;
        }

        let ids: Vec<EntityId> = level.entities.iter().map(|desc| self.spawn(desc)).collect();

        if let Some(name) = level.player.as_deref() {
            match self.scene.find_by_name(name) {
                Some(player) => self.controller.set_controlled(Some(player.id)),
                None => log::warn!("Level player '{}' not found among its entities", name),
            }
        }

        log::info!(
            "Level loaded: {} entities, gravity {}",
            ids.len(),
            self.integrator.gravity()
        );
        ids
    }

    pub fn gravity(&self) -> f32 {
        self.integrator.gravity()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.integrator.set_gravity(gravity);
    }

    pub fn fixed_dt(&self) -> f32 {
        self.integrator.dt()
    }

    /// Change the simulation timestep. Non-positive values are ignored.
    pub fn set_fixed_dt(&mut self, dt: f32) {
        self.integrator.set_dt(dt);
    }

    pub fn respawn_point(&self) -> Vec2 {
        self.respawn
    }

    pub fn set_respawn_point(&mut self, respawn: Vec2) {
        self.respawn = respawn;
    }

    /// Number of simulation ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    /// Apply this tick's keyboard snapshot to the controlled entities.
    pub fn apply_input(&mut self, input: &KeyState) {
        self.controller.apply(input, &mut self.scene);
    }

    /// Run one simulation tick unless paused.
    pub fn step(&mut self) {
        if self.is_paused() {
            return;
        }
        self.frame += 1;
        self.contacts.clear();
        step_frame(
            &mut self.scene,
            &self.integrator,
            self.frame,
            self.respawn,
            &mut self.contacts,
        );
    }

    /// Drop every entity and per-run state, and unpause. Configuration is kept.
    pub fn teardown(&mut self) {
        self.scene.clear();
        self.contacts.clear();
        self.controller.set_controlled(None);
        self.controller.set_paused(false);
        self.frame = 0;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
