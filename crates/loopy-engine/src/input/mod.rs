pub mod control;
pub mod keyboard;
pub mod queue;
