pub mod collision;
pub mod physics;
pub mod scene;
pub mod time;
