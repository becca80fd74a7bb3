use tracing::{info, warn};

use crate::physics::RigidBodies;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

#[cfg(feature = "profiling")]
use crate::PROFILER;

/// Advance exactly one tick at the current time scale and leave time paused.
pub fn handle_step_once<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    if simulation.clock().is_paused() {
        simulation.toggle_time();
    }
    if let Err(e) = simulation.tick() {
        warn!(error = %e, "step failed");
    }
    simulation.toggle_time();
    #[cfg(feature = "profiling")]
    {
        PROFILER.lock().log_and_clear();
    }
}

pub fn handle_toggle_boundaries<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    let active = simulation.toggle_boundaries();
    println!("Boundaries: {}", if active { "on" } else { "off" });
}

pub fn handle_slower<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    if !simulation.halve_timescale() {
        info!("time is paused, time scale unchanged");
    }
    println!("{}", simulation.clock().display_text());
}

pub fn handle_faster<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    if !simulation.double_timescale() {
        info!("time is paused, time scale unchanged");
    }
    println!("{}", simulation.clock().display_text());
}

pub fn handle_toggle_pause<P: RigidBodies, R: Renderer>(simulation: &mut Simulation<P, R>) {
    simulation.toggle_time();
    println!("{}", simulation.clock().display_text());
}

pub fn handle_status<P: RigidBodies, R: Renderer>(simulation: &Simulation<P, R>) {
    println!("{}", simulation.status());
}
