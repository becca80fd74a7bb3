// body/types.rs
// Particle identity and per-particle data. Position and velocity live in the
// rigid-body backend and are reached through `body`.

use std::fmt;

use ultraviolet::Vec3;

use crate::error::{Result, SimError};
use crate::physics::BodyHandle;
use crate::renderer::RenderHandle;

/// Stable particle identifier, unique within a store generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn of(charge: f32) -> Self {
        if charge > 0.0 {
            Polarity::Positive
        } else if charge < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Parameters for a new particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Coulombs.
    pub charge: f32,
    /// Kilograms, > 0.
    pub mass: f32,
    pub position: Vec3,
}

impl ParticleSpec {
    pub fn new(charge: f32, mass: f32, position: Vec3) -> Self {
        Self {
            charge,
            mass,
            position,
        }
    }

    /// Errors:
    /// - `SimError::InvalidParticle` if mass is non-positive or any value is NaN/inf.
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SimError::InvalidParticle(format!(
                "mass must be finite and > 0, got {}",
                self.mass
            )));
        }
        if !self.charge.is_finite() {
            return Err(SimError::InvalidParticle("charge must be finite".into()));
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite() && self.position.z.is_finite()) {
            return Err(SimError::InvalidParticle("position must be finite".into()));
        }
        Ok(())
    }
}

/// A point charge registered with the store. Fields are read-only outside
/// the crate; the store is the only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub(crate) id: ParticleId,
    pub(crate) charge: f32,
    pub(crate) mass: f32,
    pub(crate) body: BodyHandle,
    pub(crate) visual: RenderHandle,
}

impl Particle {
    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn charge(&self) -> f32 {
        self.charge
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.charge)
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn visual(&self) -> RenderHandle {
        self.visual
    }
}
