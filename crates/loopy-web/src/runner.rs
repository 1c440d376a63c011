use loopy_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, KeyState, LevelDesc, RenderBuffer, TickClock,
};
use loopy_engine::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `platformer`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    keys: KeyState,
    render_buffer: RenderBuffer,
    clock: TickClock,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            keys: KeyState::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            clock: TickClock::new(config.fixed_dt),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_render_buffer();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: fold queued key events, run every simulation tick
    /// that is due, then rebuild the render buffer.
    ///
    /// Rendering happens even while paused, so the last frame stays on screen.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        for event in self.input.drain() {
            self.keys.apply(&event);
        }

        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.keys.snapshot();
            self.ctx.apply_input(&self.keys);
            if self.ctx.is_paused() {
                continue;
            }
            self.game.update(&mut self.ctx, &self.keys);
            self.ctx.step();
        }

        self.rebuild_render_buffer();
    }

    fn rebuild_render_buffer(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        // Allow game to add custom render commands
        let mut render_ctx = RenderContext {
            render_buffer: &mut self.render_buffer,
        };
        self.game.render(&mut render_ctx);
    }

    /// Replace the scene with a level parsed from JSON.
    /// A malformed level is logged and the current scene is kept.
    pub fn load_level(&mut self, json: &str) {
        match LevelDesc::from_json(json) {
            Ok(level) => {
                self.ctx.load_level(&level);
                self.rebuild_render_buffer();
            }
            Err(e) => {
                log::error!("Failed to parse level: {}", e);
            }
        }
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.ctx.set_gravity(gravity);
    }

    /// Change the simulation timestep. Non-positive values are ignored.
    pub fn set_timestep(&mut self, dt: f32) {
        if dt <= 0.0 {
            log::warn!("Ignoring non-positive timestep {}", dt);
            return;
        }
        self.ctx.set_fixed_dt(dt);
        self.clock.set_dt(dt);
        self.config.fixed_dt = dt;
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn instance_floats(&self) -> &[f32] {
        self.render_buffer.as_floats()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn gravity(&self) -> f32 {
        self.ctx.gravity()
    }

    pub fn timestep(&self) -> f32 {
        self.ctx.fixed_dt()
    }

    pub fn is_paused(&self) -> bool {
        self.ctx.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loopy_engine::{keys, EntityDesc, EntityFlags, EntityId, RenderInstance};
    use glam::Vec2;

    struct Walker {
        updates: u32,
    }

    impl Game for Walker {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 0.25,
                gravity: 0.0,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.spawn(&EntityDesc {
                name: "walker".into(),
                size: Vec2::splat(8.0),
                flags: EntityFlags {
                    movable: true,
                    controllable: true,
                    ..Default::default()
                },
                ..Default::default()
            });
            ctx.controller.set_controlled(Some(id));
        }

        fn update(&mut self, _ctx: &mut EngineContext, _input: &KeyState) {
            self.updates += 1;
        }
    }

    fn runner() -> GameRunner<Walker> {
        let mut r = GameRunner::new(Walker { updates: 0 });
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(Walker { updates: 0 });
        r.tick(1.0);
        assert_eq!(r.game().updates, 0);
        assert_eq!(r.instance_count(), 0);
    }

    #[test]
    fn init_fills_render_buffer() {
        let r = runner();
        assert_eq!(r.instance_count(), 1);
        assert_eq!(r.instance_floats().len(), RenderInstance::FLOATS);
        assert_eq!(r.max_instances(), 512);
    }

    #[test]
    fn ticks_follow_accumulated_time() {
        let mut r = runner();
        r.tick(0.125);
        assert_eq!(r.game().updates, 0);
        r.tick(0.375);
        assert_eq!(r.game().updates, 2);
        assert_eq!(r.context().frame(), 2);
    }

    #[test]
    fn key_events_drive_the_player() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: keys::D });
        r.tick(0.25);

        let walker = r.context().scene.get(EntityId(1)).unwrap();
        assert_eq!(walker.vel.x, 300.0);
        assert_eq!(walker.pos.x, 75.0);
        assert_eq!(r.instance_floats()[0], 75.0);
    }

    #[test]
    fn pause_stops_updates_but_keeps_rendering() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: keys::ESCAPE });
        r.tick(0.5);

        assert!(r.is_paused());
        assert_eq!(r.game().updates, 0);
        assert_eq!(r.instance_count(), 1);
    }

    #[test]
    fn bad_level_keeps_current_scene() {
        let mut r = runner();
        r.load_level("{ not json");
        assert_eq!(r.context().scene.len(), 1);

        r.load_level(r#"{ "entities": [{ "name": "a" }, { "name": "b" }] }"#);
        assert_eq!(r.context().scene.len(), 2);
        assert_eq!(r.instance_count(), 2);
    }

    #[test]
    fn timestep_and_gravity_are_settable() {
        let mut r = runner();
        r.set_timestep(0.5);
        r.set_timestep(0.0);
        r.set_gravity(100.0);
        assert_eq!(r.timestep(), 0.5);
        assert_eq!(r.gravity(), 100.0);

        r.tick(0.25);
        assert_eq!(r.game().updates, 0);
        r.tick(0.25);
        assert_eq!(r.game().updates, 1);
    }
}
