// diagnostics.rs
// Whole-system quantities for the `status` command and for conservation checks.

use std::fmt;

use ultraviolet::Vec3;

use crate::physics::RigidBodies;
use crate::renderer::Renderer;
use crate::simulation::forces::{self, ChargeSample};
use crate::simulation::Simulation;

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub sim_time: f64,
    pub particles: usize,
    pub positive: usize,
    pub negative: usize,
    pub total_charge: f32,
    pub kinetic_energy: f32,
    pub potential_energy: f32,
    pub momentum: Vec3,
    pub time_scale: f32,
    pub paused: bool,
    pub boundaries_active: bool,
}

impl Snapshot {
    pub fn capture<P: RigidBodies, R: Renderer>(sim: &Simulation<P, R>) -> Self {
        let mut kinetic_energy = 0.0;
        let mut momentum = Vec3::zero();
        let mut samples = Vec::with_capacity(sim.store().len());
        let (mut positive, mut negative) = (0, 0);
        let mut total_charge = 0.0;
        for p in sim.store() {
            let vel = sim.physics().velocity(p.body()).unwrap_or_else(|_| Vec3::zero());
            let pos = sim.physics().position(p.body()).unwrap_or_else(|_| Vec3::zero());
            kinetic_energy += 0.5 * p.mass() * vel.mag_sq();
            momentum += vel * p.mass();
            total_charge += p.charge();
            if p.charge() > 0.0 {
                positive += 1;
            } else if p.charge() < 0.0 {
                negative += 1;
            }
            samples.push(ChargeSample {
                charge: p.charge(),
                position: pos,
            });
        }
        Self {
            tick: sim.tick_count(),
            sim_time: sim.sim_time(),
            particles: sim.store().len(),
            positive,
            negative,
            total_charge,
            kinetic_energy,
            potential_energy: forces::potential_energy(&samples),
            momentum,
            time_scale: sim.clock().time_scale(),
            paused: sim.clock().is_paused(),
            boundaries_active: sim.boundaries().is_active(),
        }
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy + self.potential_energy
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tick {} (t = {:.4} s)", self.tick, self.sim_time)?;
        writeln!(
            f,
            "particles: {} (+{} / -{}), net charge {:.3e} C",
            self.particles, self.positive, self.negative, self.total_charge
        )?;
        writeln!(
            f,
            "energy: kinetic {:.4e} J, potential {:.4e} J, total {:.4e} J",
            self.kinetic_energy,
            self.potential_energy,
            self.total_energy()
        )?;
        writeln!(
            f,
            "momentum: ({:.3e}, {:.3e}, {:.3e}) kg m/s",
            self.momentum.x, self.momentum.y, self.momentum.z
        )?;
        let time = if self.paused {
            "paused".to_string()
        } else {
            format!("x{}", self.time_scale)
        };
        write!(
            f,
            "time scale: {}, boundaries: {}",
            time,
            if self.boundaries_active { "on" } else { "off" }
        )
    }
}
