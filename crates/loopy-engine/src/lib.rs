pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, AtlasId, Axis, Contact};
pub use components::entity::{Entity, EntityDesc, EntityFlags};
pub use components::animation::SpriteSheet;
pub use components::path::{AutoPath, PathVector};
pub use components::reaction::CollisionReaction;
pub use core::collision::{resolve, Aabb, Resolution};
pub use core::physics::{Integrator, Motion};
pub use core::scene::Scene;
pub use core::time::TickClock;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use input::keyboard::{keys, KeyState};
pub use input::control::{Controller, KeyMap};
pub use assets::level::LevelDesc;
pub use systems::frame::step_frame;
pub use systems::render::build_render_buffer;
