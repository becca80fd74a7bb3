use tracing::{info, warn};

use crate::physics::RigidBodies;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

/// Add a particle from raw console text.
pub fn handle_add_particle<P: RigidBodies, R: Renderer>(
    simulation: &mut Simulation<P, R>,
    charge: &str,
    mass: &str,
) {
    match simulation.add_particle_from_text(charge, mass) {
        Ok(id) => info!(%id, "particle added"),
        Err(e) => warn!(error = %e, "could not add particle"),
    }
}

pub fn handle_add_random<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    match simulation.add_random_particle() {
        Ok(id) => info!(%id, "random particle added"),
        Err(e) => warn!(error = %e, "could not add particle"),
    }
}

pub fn handle_setup<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>, count: usize) {
    if let Err(e) = simulation.setup_random_particles(count) {
        warn!(error = %e, count, "setup stopped early");
    }
}

pub fn handle_delete_all<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    simulation.destroy_particles();
}

pub fn handle_regenerate<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    let failures = simulation.regenerate_particles();
    if failures > 0 {
        warn!(failures, "some particles were not regenerated");
    }
}
