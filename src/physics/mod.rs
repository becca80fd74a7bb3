//! Rigid-body port used by the simulation core.
//!
//! The core only needs to create and destroy bodies, apply forces, read and
//! write position/velocity and ask the backend to advance one step. The
//! built-in [`PhysicsWorld`] implements that with semi-implicit Euler and
//! plane walls; any other engine can be plugged in through [`RigidBodies`].

mod world;

pub use world::PhysicsWorld;

use ultraviolet::Vec3;

use crate::error::Result;

/// Opaque handle to a body owned by a [`RigidBodies`] backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u64);

/// Creation parameters for a rigid body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDesc {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    pub gravity: bool,
    /// Continuous collision detection against walls.
    pub ccd: bool,
}

impl BodyDesc {
    /// A charged point particle: no gravity, CCD on, at rest.
    pub fn particle(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::zero(),
            mass,
            gravity: false,
            ccd: true,
        }
    }
}

/// Which face of an axis a wall sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallSide {
    /// Keeps bodies at `coord >= offset`.
    Min,
    /// Keeps bodies at `coord <= offset`.
    Max,
}

/// Infinite axis-aligned plane collider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    /// 0 = x, 1 = y, 2 = z.
    pub axis: usize,
    pub side: WallSide,
    pub offset: f32,
}

impl Wall {
    /// Signed distance to the permitted side; negative means penetrating.
    pub fn clearance(&self, p: Vec3) -> f32 {
        let c = crate::utils::component(p, self.axis);
        match self.side {
            WallSide::Min => c - self.offset,
            WallSide::Max => self.offset - c,
        }
    }
}

pub trait RigidBodies {
    fn spawn(&mut self, desc: BodyDesc) -> BodyHandle;
    fn destroy(&mut self, handle: BodyHandle) -> Result<()>;
    /// Accumulate a force to be consumed by the next `step`.
    fn apply_force(&mut self, handle: BodyHandle, force: Vec3) -> Result<()>;
    fn position(&self, handle: BodyHandle) -> Result<Vec3>;
    fn velocity(&self, handle: BodyHandle) -> Result<Vec3>;
    fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> Result<()>;
    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3) -> Result<()>;
    /// Replace the set of walls bodies collide with. Empty disables containment.
    fn set_walls(&mut self, walls: &[Wall]);
    /// Advance every body by `dt` seconds and clear force accumulators.
    fn step(&mut self, dt: f32);
    fn body_count(&self) -> usize;
}
