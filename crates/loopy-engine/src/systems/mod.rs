pub mod frame;
pub mod render;
