pub mod runner;

pub use runner::GameRunner;
pub use js_sys;

/// Copy the current render instances into a fresh JS array, for hosts that
/// cannot read wasm memory through the instance pointer.
pub fn instance_array(floats: &[f32]) -> js_sys::Float32Array {
    js_sys::Float32Array::from(floats)
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, key handlers, level
///   loading, world settings, render buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use loopy_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// loopy_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `loopy_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_load_level(json: &str) {
            with_runner(|r| r.load_level(json));
        }

        // ---- World settings ----

        #[wasm_bindgen]
        pub fn game_set_gravity(gravity: f32) {
            with_runner(|r| r.set_gravity(gravity));
        }

        #[wasm_bindgen]
        pub fn game_set_timestep(dt: f32) {
            with_runner(|r| r.set_timestep(dt));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_instance_data() -> $crate::js_sys::Float32Array {
            with_runner(|r| $crate::instance_array(r.instance_floats()))
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_gravity() -> f32 {
            with_runner(|r| r.gravity())
        }

        #[wasm_bindgen]
        pub fn get_timestep() -> f32 {
            with_runner(|r| r.timestep())
        }

        #[wasm_bindgen]
        pub fn is_paused() -> bool {
            with_runner(|r| r.is_paused())
        }
    };
}
