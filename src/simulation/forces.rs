//! Electrostatic force calculation.
//!
//! Exact pairwise Coulomb summation: every unordered pair is evaluated once
//! and its force is applied equal and opposite to both particles. O(n²), no
//! cutoff, no softening. Separations below [`config::MIN_DISTANCE`] are
//! clamped for the magnitude; exactly coincident particles have no defined
//! direction and exert no force on each other.

use ultraviolet::Vec3;

use crate::config;
use crate::units::COULOMB_CONSTANT;

/// What the solver needs to know about one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeSample {
    pub charge: f32,
    pub position: Vec3,
}

/// Net force per particle, in the order of the input samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceField {
    pub forces: Vec<Vec3>,
    /// Number of pair evaluations performed, n(n-1)/2.
    pub pair_evaluations: usize,
}

impl ForceField {
    pub fn net(&self) -> Vec3 {
        self.forces.iter().fold(Vec3::zero(), |acc, f| acc + *f)
    }
}

/// Force exerted on `a` by `b`. Positive charge product pushes `a` away from `b`.
#[inline]
pub fn pair_force(a: &ChargeSample, b: &ChargeSample) -> Vec3 {
    let delta = a.position - b.position;
    let dist_sq = delta.mag_sq();
    if dist_sq == 0.0 {
        return Vec3::zero();
    }
    let dist = dist_sq.sqrt();
    let r = dist.max(config::MIN_DISTANCE);
    // q_a * q_b is commutative in floating point, which keeps pair_force(a, b) == -pair_force(b, a)
    let magnitude = COULOMB_CONSTANT * (a.charge * b.charge) / (r * r);
    (delta / dist) * magnitude
}

/// Net electrostatic force on every sample.
pub fn solve(samples: &[ChargeSample]) -> ForceField {
    crate::profile_scope!("forces_solve");
    let n = samples.len();
    let mut forces = vec![Vec3::zero(); n];
    let mut pair_evaluations = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let f = pair_force(&samples[i], &samples[j]);
            forces[i] += f;
            forces[j] -= f;
            pair_evaluations += 1;
        }
    }
    ForceField {
        forces,
        pair_evaluations,
    }
}

/// Electrostatic potential energy of the configuration, using the same
/// distance clamp as the force.
pub fn potential_energy(samples: &[ChargeSample]) -> f32 {
    let mut energy = 0.0;
    for (i, a) in samples.iter().enumerate() {
        for b in &samples[i + 1..] {
            let r = (a.position - b.position).mag().max(config::MIN_DISTANCE);
            energy += COULOMB_CONSTANT * (a.charge * b.charge) / r;
        }
    }
    energy
}
