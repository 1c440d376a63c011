//! Fixed-step motion integration.
//!
//! The integrator only *proposes* where an entity wants to be after one tick.
//! Nothing is committed here; the collision resolver decides what actually
//! happens to the proposal.

use glam::Vec2;

use crate::components::entity::Entity;

/// Default downward gravity in px/s² (y grows downward).
pub const DEFAULT_GRAVITY: f32 = 2000.0;

/// Default fixed timestep in seconds.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// A position/velocity pair: the integrator's proposal for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// The entity's current position and velocity, unchanged.
    pub fn current(entity: &Entity) -> Self {
        Self::new(entity.pos, entity.vel)
    }
}

/// Semi-implicit Euler integrator with world-wide gravity and timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    gravity: f32,
    dt: f32,
}

impl Integrator {
    pub fn new(gravity: f32, dt: f32) -> Self {
        Self { gravity, dt }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Set the fixed timestep. Non-positive values are ignored.
    pub fn set_dt(&mut self, dt: f32) {
        if dt > 0.0 {
            self.dt = dt;
        } else {
            log::warn!("ignoring non-positive timestep {dt}");
        }
    }

    /// Propose the entity's motion after one timestep.
    ///
    /// Reads only `entity`; gravity is added to this step's acceleration
    /// without touching the stored value. Non-movable entities come back
    /// exactly as they are.
    pub fn integrate(&self, entity: &Entity) -> Motion {
        if !entity.flags.movable {
            return Motion::current(entity);
        }

        let mut accel = entity.accel;
        if entity.flags.gravity {
            accel.y += self.gravity;
        }

        let vel = entity.vel + accel * self.dt;
        let pos = entity.pos + vel * self.dt;
        Motion { pos, vel }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY, DEFAULT_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::EntityFlags;

    fn movable(gravity: bool) -> EntityFlags {
        EntityFlags {
            movable: true,
            gravity,
            ..Default::default()
        }
    }

    #[test]
    fn non_movable_is_unchanged_every_time() {
        let integrator = Integrator::default();
        let e = Entity::new(EntityId(1))
            .with_pos(Vec2::new(3.0, 4.0))
            .with_vel(Vec2::new(50.0, -10.0))
            .with_accel(Vec2::new(1.0, 1.0));
        for _ in 0..5 {
            let m = integrator.integrate(&e);
            assert_eq!(m.pos, Vec2::new(3.0, 4.0));
            assert_eq!(m.vel, Vec2::new(50.0, -10.0));
        }
    }

    #[test]
    fn semi_implicit_euler_uses_new_velocity() {
        let integrator = Integrator::new(0.0, 0.5);
        let e = Entity::new(EntityId(1))
            .with_flags(movable(false))
            .with_vel(Vec2::new(2.0, 0.0))
            .with_accel(Vec2::new(4.0, 0.0));
        let m = integrator.integrate(&e);
        // v' = 2 + 4 * 0.5 = 4, x' = 0 + 4 * 0.5 = 2
        assert_eq!(m.vel, Vec2::new(4.0, 0.0));
        assert_eq!(m.pos, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn gravity_only_affects_this_step() {
        let integrator = Integrator::new(100.0, 0.25);
        let e = Entity::new(EntityId(1)).with_flags(movable(true));
        let m = integrator.integrate(&e);
        assert_eq!(m.vel, Vec2::new(0.0, 25.0));
        assert_eq!(m.pos, Vec2::new(0.0, 6.25));
        assert_eq!(e.accel, Vec2::ZERO);
    }

    #[test]
    fn gravity_ignored_without_flag() {
        let integrator = Integrator::new(100.0, 0.25);
        let e = Entity::new(EntityId(1)).with_flags(movable(false));
        assert_eq!(integrator.integrate(&e).vel, Vec2::ZERO);
    }

    #[test]
    fn rejects_non_positive_dt() {
        let mut integrator = Integrator::default();
        integrator.set_dt(0.0);
        assert_eq!(integrator.dt(), DEFAULT_DT);
        integrator.set_dt(0.5);
        assert_eq!(integrator.dt(), 0.5);
    }
}
