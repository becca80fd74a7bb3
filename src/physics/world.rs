// physics/world.rs
// Built-in rigid-body backend: point masses, semi-implicit Euler, plane walls.

use std::collections::HashMap;

use ultraviolet::Vec3;

use super::{BodyDesc, BodyHandle, RigidBodies, Wall, WallSide};
use crate::config;
use crate::error::{Result, SimError};
use crate::utils::{component, set_component};

/// Standard gravity (m/s²) along -y, only applied to bodies created with `gravity: true`.
pub const GRAVITY_Y: f32 = -9.81;

#[derive(Clone, Debug)]
struct RigidBody {
    pos: Vec3,
    vel: Vec3,
    force: Vec3,
    inv_mass: f32,
    gravity: bool,
    ccd: bool,
}

pub struct PhysicsWorld {
    bodies: HashMap<u64, RigidBody>,
    next_handle: u64,
    walls: Vec<Wall>,
    pub restitution: f32,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(config::DEFAULT_WALL_RESTITUTION)
    }
}

impl PhysicsWorld {
    pub fn new(restitution: f32) -> Self {
        Self {
            bodies: HashMap::new(),
            next_handle: 0,
            walls: Vec::new(),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    fn body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get(&handle.0).ok_or(SimError::UnknownHandle(handle.0))
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies
            .get_mut(&handle.0)
            .ok_or(SimError::UnknownHandle(handle.0))
    }
}

/// Push `pos` back to the permitted side of `wall` and reflect the normal
/// velocity. With `ccd` the overshoot is mirrored, so the body keeps the
/// distance it would have travelled after bouncing; without it the body is
/// clamped onto the plane.
fn resolve_wall(wall: &Wall, pos: &mut Vec3, vel: &mut Vec3, ccd: bool, restitution: f32) {
    let depth = -wall.clearance(*pos);
    if depth <= 0.0 {
        return;
    }
    let c = component(*pos, wall.axis);
    let corrected = if ccd {
        let push = depth * (1.0 + restitution);
        match wall.side {
            WallSide::Min => c + push,
            WallSide::Max => c - push,
        }
    } else {
        wall.offset
    };
    set_component(pos, wall.axis, corrected);

    let v = component(*vel, wall.axis);
    let outward = match wall.side {
        WallSide::Min => v < 0.0,
        WallSide::Max => v > 0.0,
    };
    if outward {
        set_component(vel, wall.axis, -v * restitution);
    }
}

/// Mirror passes before a body that is still outside gets clamped onto the
/// planes. One pass is enough unless the overshoot exceeds the box width.
const MAX_MIRROR_PASSES: usize = 8;

fn outside_any(walls: &[Wall], pos: Vec3) -> bool {
    walls.iter().any(|w| w.clearance(pos) < 0.0)
}

/// Bring `pos` back inside every wall. Mirroring repeats while a reflection
/// lands past the opposite face; whatever is still outside after that is
/// clamped, so the body always ends inside the walls.
fn contain(walls: &[Wall], pos: &mut Vec3, vel: &mut Vec3, ccd: bool, restitution: f32) {
    let passes = if ccd { MAX_MIRROR_PASSES } else { 1 };
    for _ in 0..passes {
        for wall in walls {
            resolve_wall(wall, pos, vel, ccd, restitution);
        }
        if !outside_any(walls, *pos) {
            return;
        }
    }
    for wall in walls {
        resolve_wall(wall, pos, vel, false, restitution);
    }
}

impl RigidBodies for PhysicsWorld {
    fn spawn(&mut self, desc: BodyDesc) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        let inv_mass = if desc.mass > 0.0 { 1.0 / desc.mass } else { 0.0 };
        self.bodies.insert(
            handle.0,
            RigidBody {
                pos: desc.position,
                vel: desc.velocity,
                force: Vec3::zero(),
                inv_mass,
                gravity: desc.gravity,
                ccd: desc.ccd,
            },
        );
        handle
    }

    fn destroy(&mut self, handle: BodyHandle) -> Result<()> {
        self.bodies
            .remove(&handle.0)
            .map(|_| ())
            .ok_or(SimError::UnknownHandle(handle.0))
    }

    fn apply_force(&mut self, handle: BodyHandle, force: Vec3) -> Result<()> {
        self.body_mut(handle)?.force += force;
        Ok(())
    }

    fn position(&self, handle: BodyHandle) -> Result<Vec3> {
        Ok(self.body(handle)?.pos)
    }

    fn velocity(&self, handle: BodyHandle) -> Result<Vec3> {
        Ok(self.body(handle)?.vel)
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> Result<()> {
        self.body_mut(handle)?.pos = position;
        Ok(())
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3) -> Result<()> {
        self.body_mut(handle)?.vel = velocity;
        Ok(())
    }

    fn set_walls(&mut self, walls: &[Wall]) {
        self.walls.clear();
        self.walls.extend_from_slice(walls);
    }

    fn step(&mut self, dt: f32) {
        crate::profile_scope!("physics_step");
        let walls = &self.walls;
        let restitution = self.restitution;
        for body in self.bodies.values_mut() {
            let mut acc = body.force * body.inv_mass;
            if body.gravity {
                acc.y += GRAVITY_Y;
            }
            // semi-implicit Euler: velocity first, then position with the new velocity
            body.vel += acc * dt;
            body.pos += body.vel * dt;
            contain(walls, &mut body.pos, &mut body.vel, body.ccd, restitution);
            body.force = Vec3::zero();
        }
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
