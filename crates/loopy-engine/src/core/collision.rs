//! Axis-separated AABB collision resolution.
//!
//! A proposed move is resolved one axis at a time, horizontal first. Each
//! axis probe places the mover's box at the proposed coordinate and scans
//! every other solid entity. If anything overlaps, the move is backed off by
//! the deepest penetration found, never past where the mover started, and
//! then snapped so it ends exactly clear of the intruder's face.
//! Contact side effects (enemy reset, platform landing, reactions) happen
//! inside the probe that finds them.

use glam::Vec2;

use crate::api::types::{Axis, Contact};
use crate::components::entity::Entity;
use crate::core::physics::Motion;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box with its top-left corner at `pos`.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on X; boxes sharing an edge do not overlap.
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }

    /// Strict overlap on Y.
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.min.y < other.max.y && self.max.y > other.min.y
    }

    /// Overlap on both axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// How far this box reaches into `other` along `axis`, travelling in
    /// direction `dir` (positive or negative).
    pub fn penetration(&self, other: &Aabb, axis: Axis, dir: f32) -> f32 {
        let (min, max, other_min, other_max) = match axis {
            Axis::X => (self.min.x, self.max.x, other.min.x, other.max.x),
            Axis::Y => (self.min.y, self.max.y, other.min.y, other.max.y),
        };
        if dir > 0.0 {
            max - other_min
        } else {
            other_max - min
        }
    }
}

/// Outcome of resolving one entity's move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// The horizontal move was cut short.
    pub blocked_x: bool,
    /// The vertical move was cut short.
    pub blocked_y: bool,
    /// Every overlap found by the probes, in discovery order.
    pub contacts: Vec<Contact>,
}

/// Per-call probe bookkeeping: who has already reacted, what was touched.
struct ProbeState {
    reacted: Vec<usize>,
    contacts: Vec<Contact>,
}

/// The deepest blocking intruder found by one axis probe.
#[derive(Debug, Clone, Copy)]
struct Blocker {
    /// Penetration along the probed axis.
    depth: f32,
    /// The intruder's face the mover must stop at: its min edge when moving
    /// positive, its max edge when moving negative.
    face: f32,
}

/// Scan `entities` for overlaps with `probe` and return the deepest blocking
/// intruder along `axis`, or `None` when the probe is clear.
///
/// An entity that its own reaction just removed (a collected pickup) is
/// still reported as a contact but does not block.
fn probe_axis(
    entities: &mut [Entity],
    index: usize,
    probe: Aabb,
    axis: Axis,
    dir: f32,
    state: &mut ProbeState,
) -> Option<Blocker> {
    let mover_id = entities[index].id;
    let controllable = entities[index].flags.controllable;

    let mut deepest: Option<Blocker> = None;
    let mut hit_enemy = false;
    let mut landed = false;

    for (i, other) in entities.iter_mut().enumerate() {
        if i == index || !other.is_solid() {
            continue;
        }
        let other_box = other.aabb();
        if !probe.overlaps(&other_box) {
            continue;
        }

        let depth = probe.penetration(&other_box, axis, dir);
        state.contacts.push(Contact {
            mover: mover_id,
            other: other.id,
            axis,
            penetration: depth,
        });

        if !state.reacted.contains(&i) {
            state.reacted.push(i);
            let reaction = other.reaction;
            reaction.react(other, mover_id);
        }

        if other.is_solid() && deepest.map_or(true, |b| depth > b.depth) {
            let face = match (axis, dir > 0.0) {
                (Axis::X, true) => other_box.min.x,
                (Axis::X, false) => other_box.max.x,
                (Axis::Y, true) => other_box.min.y,
                (Axis::Y, false) => other_box.max.y,
            };
            deepest = Some(Blocker { depth, face });
        }

        if controllable && other.flags.enemy {
            hit_enemy = true;
            break;
        }
        if controllable && other.flags.platform {
            landed = true;
        }
    }

    let mover = &mut entities[index];
    if hit_enemy {
        log::debug!("{:?} '{}' hit an enemy, reset pending", mover.id, mover.name);
        mover.set_pending_reset(true);
    }
    if landed && mover.is_jumping() {
        log::debug!("{:?} '{}' landed", mover.id, mover.name);
        mover.set_jumping(false);
    }

    deepest
}

/// Back `target` off by `depth` toward `start`, never past `start`.
fn back_off(start: f32, target: f32, depth: f32) -> f32 {
    let delta = target - start;
    let dir = delta.signum();
    let backoff = delta.abs().min(depth);
    let candidate = target - dir * backoff;
    if dir > 0.0 {
        candidate.max(start)
    } else {
        candidate.min(start)
    }
}

/// Next representable f32 toward negative infinity.
fn next_down(x: f32) -> f32 {
    if x.is_nan() || x == f32::NEG_INFINITY {
        return x;
    }
    if x == 0.0 {
        return -f32::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

/// Next representable f32 toward positive infinity.
fn next_up(x: f32) -> f32 {
    -next_down(-x)
}

/// Remove rounding residue left by `back_off`: move `pos` until the mover's
/// box (`pos .. pos + extent`) no longer reaches past `face`, never past
/// `start`.
fn flush_against(start: f32, pos: f32, extent: f32, face: f32, dir: f32) -> f32 {
    let mut pos = pos;
    if dir > 0.0 {
        if pos + extent > face {
            pos = (face - extent).max(start);
        }
        while pos + extent > face && pos > start {
            pos = next_down(pos).max(start);
        }
    } else {
        if pos < face {
            pos = face.min(start);
        }
        while pos < face && pos < start {
            pos = next_up(pos).min(start);
        }
    }
    pos
}

/// Resolve the move of `entities[index]` toward `target` and commit it.
///
/// This is the only writer of committed position and velocity. It may also
/// change other entities through their collision reactions. An out-of-range
/// index, a disabled mover, or a mover with nowhere to go is a no-op.
pub fn resolve(entities: &mut [Entity], index: usize, target: Motion) -> Resolution {
    let mut resolution = Resolution::default();
    let Some(mover) = entities.get_mut(index) else {
        return resolution;
    };
    if mover.flags.disabled {
        return resolution;
    }
    if !mover.flags.collidable {
        mover.pos = target.pos;
        mover.vel = target.vel;
        return resolution;
    }

    let start = mover.pos;
    let start_vel = mover.vel;
    let extent = mover.extent();
    let controllable = mover.flags.controllable;

    let mut state = ProbeState {
        reacted: Vec::new(),
        contacts: Vec::new(),
    };
    let mut pos = start;

    if target.pos.x != start.x {
        let dir = (target.pos.x - start.x).signum();
        let probe = Aabb::from_pos_size(Vec2::new(target.pos.x, start.y), extent);
        match probe_axis(entities, index, probe, Axis::X, dir, &mut state) {
            Some(blocker) => {
                let backed = back_off(start.x, target.pos.x, blocker.depth);
                pos.x = flush_against(start.x, backed, extent.x, blocker.face, dir);
                resolution.blocked_x = true;
            }
            None => pos.x = target.pos.x,
        }
    }

    if target.pos.y != start.y {
        let dir = (target.pos.y - start.y).signum();
        let probe = Aabb::from_pos_size(Vec2::new(pos.x, target.pos.y), extent);
        match probe_axis(entities, index, probe, Axis::Y, dir, &mut state) {
            Some(blocker) => {
                let backed = back_off(start.y, target.pos.y, blocker.depth);
                pos.y = flush_against(start.y, backed, extent.y, blocker.face, dir);
                resolution.blocked_y = true;
            }
            None => pos.y = target.pos.y,
        }
    }

    // Blocked axes: controllable bodies stop dead, others keep their momentum.
    let blocked_vel = |axis_start: f32| if controllable { 0.0 } else { axis_start };
    let vel = Vec2::new(
        if resolution.blocked_x { blocked_vel(start_vel.x) } else { target.vel.x },
        if resolution.blocked_y { blocked_vel(start_vel.y) } else { target.vel.y },
    );

    let mover = &mut entities[index];
    mover.pos = pos;
    mover.vel = vel;

    resolution.contacts = state.contacts;
    resolution
}
