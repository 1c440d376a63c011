pub mod animation;
pub mod entity;
pub mod path;
pub mod reaction;
