// simulation/simulation.rs
// The Simulation struct: owns the particle store, the collaborators, the clock
// and the walls, and exposes the operations the console drives.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};
use ultraviolet::Vec3;

use super::clock::SimulationClock;
use super::forces::{self, ChargeSample, ForceField};
use super::store::{ClearReport, ParticleStore};
use crate::body::{ParticleId, ParticleSpec};
use crate::boundary::{BoundaryController, BoundarySet};
use crate::diagnostics::Snapshot;
use crate::error::Result;
use crate::init_config::SimConfig;
use crate::physics::{PhysicsWorld, RigidBodies};
use crate::renderer::{HeadlessRenderer, Renderer};
use crate::utils::{self, Aabb};

pub struct Simulation<P = PhysicsWorld, R = HeadlessRenderer> {
    store: ParticleStore,
    physics: P,
    renderer: R,
    clock: SimulationClock,
    boundaries: BoundaryController,
    default_extent: Aabb,
    rng: StdRng,
    tick: u64,
    sim_time: f64,
}

impl Simulation<PhysicsWorld, HeadlessRenderer> {
    /// Simulation with the built-in physics backend and a headless renderer.
    pub fn new(config: &SimConfig) -> Self {
        Self::with_backends(
            PhysicsWorld::new(config.wall_restitution),
            HeadlessRenderer::new(),
            config,
        )
    }
}

impl<P: RigidBodies, R: Renderer> Simulation<P, R> {
    pub fn with_backends(physics: P, renderer: R, config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            store: ParticleStore::new(),
            physics,
            renderer,
            clock: SimulationClock::new(config.base_tick()),
            boundaries: BoundaryController::new(BoundarySet::enclosing(Aabb::cube(
                config.boundary_half_extent,
            ))),
            default_extent: Aabb::cube(config.default_half_extent),
            rng,
            tick: 0,
            sim_time: 0.0,
        }
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn boundaries(&self) -> &BoundaryController {
        &self.boundaries
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed, the sum of every tick's effective duration.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn position(&self, id: ParticleId) -> Option<Vec3> {
        let p = self.store.get(id)?;
        self.physics.position(p.body()).ok()
    }

    pub fn velocity(&self, id: ParticleId) -> Option<Vec3> {
        let p = self.store.get(id)?;
        self.physics.velocity(p.body()).ok()
    }

    pub fn status(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Region used for new and regenerated particles.
    pub fn spawn_region(&self) -> Aabb {
        self.boundaries.spawn_region().unwrap_or(self.default_extent)
    }

    // ====================
    // Particle lifecycle
    // ====================

    /// Add a particle at a given position.
    pub fn add_particle_at(&mut self, spec: ParticleSpec) -> Result<ParticleId> {
        self.store.add(&mut self.physics, &mut self.renderer, spec)
    }

    /// Add a particle at a random point of the spawn region.
    pub fn add_particle(&mut self, charge: f32, mass: f32) -> Result<ParticleId> {
        let position = self.spawn_region().random_point(&mut self.rng);
        self.add_particle_at(ParticleSpec::new(charge, mass, position))
    }

    /// Add a particle from raw text fields. Anything that does not parse to a
    /// usable value is replaced by a random one instead of failing.
    pub fn add_particle_from_text(&mut self, charge_text: &str, mass_text: &str) -> Result<ParticleId> {
        let charge = match charge_text.trim().parse::<f32>() {
            Ok(q) if q.is_finite() => q,
            _ => {
                let q = utils::random_charge(&mut self.rng);
                warn!(input = charge_text, substitute = q, "unusable charge, using a random one");
                q
            }
        };
        let mass = match mass_text.trim().parse::<f32>() {
            Ok(m) if m.is_finite() && m > 0.0 => m,
            _ => {
                let m = utils::random_mass(&mut self.rng);
                warn!(input = mass_text, substitute = m, "unusable mass, using a random one");
                m
            }
        };
        self.add_particle(charge, mass)
    }

    pub fn add_random_particle(&mut self) -> Result<ParticleId> {
        let charge = utils::random_charge(&mut self.rng);
        let mass = utils::random_mass(&mut self.rng);
        self.add_particle(charge, mass)
    }

    /// Replace the current particles with `count` random ones, ids `0..count`.
    pub fn setup_random_particles(&mut self, count: usize) -> Result<()> {
        self.destroy_particles();
        for _ in 0..count {
            self.add_random_particle()?;
        }
        info!(count, "random particles set up");
        Ok(())
    }

    pub fn destroy_particles(&mut self) -> ClearReport {
        let report = self.store.clear(&mut self.physics, &mut self.renderer);
        if report.is_clean() {
            info!(removed = report.removed, "particles destroyed");
        } else {
            warn!(
                removed = report.removed,
                body_failures = report.body_failures,
                visual_failures = report.visual_failures,
                "particles destroyed with failures"
            );
        }
        report
    }

    /// Returns how many particles could not be moved.
    pub fn regenerate_particles(&mut self) -> usize {
        let region = self.spawn_region();
        self.store
            .regenerate_positions(&mut self.physics, &mut self.renderer, Some(region), &mut self.rng)
    }

    // ====================
    // Walls
    // ====================

    /// Returns the new wall state.
    pub fn toggle_boundaries(&mut self) -> bool {
        self.boundaries
            .toggle(&self.store, &mut self.physics, &mut self.renderer, &mut self.rng)
    }

    // ====================
    // Time control
    // ====================

    pub fn halve_timescale(&mut self) -> bool {
        let changed = self.clock.halve();
        debug!(tick = self.clock.effective_tick(), "{}", self.clock.display_text());
        changed
    }

    pub fn double_timescale(&mut self) -> bool {
        let changed = self.clock.double();
        debug!(tick = self.clock.effective_tick(), "{}", self.clock.display_text());
        changed
    }

    pub fn toggle_time(&mut self) {
        self.clock.toggle_pause();
        debug!(tick = self.clock.effective_tick(), "{}", self.clock.display_text());
    }

    // ====================
    // Fixed tick
    // ====================

    /// Solve Coulomb forces for the current positions and hand them to the
    /// rigid bodies. Does not move anything.
    pub fn apply_forces(&mut self) -> Result<ForceField> {
        crate::profile_scope!("apply_forces");
        let mut samples = Vec::with_capacity(self.store.len());
        for p in &self.store {
            samples.push(ChargeSample {
                charge: p.charge(),
                position: self.physics.position(p.body())?,
            });
        }
        let field = forces::solve(&samples);
        for (p, f) in self.store.iter().zip(&field.forces) {
            self.physics.apply_force(p.body(), *f)?;
        }
        Ok(field)
    }

    /// One fixed tick: forces for every pair, then one integrator step of
    /// the clock's effective duration, then position writes to renderables.
    pub fn tick(&mut self) -> Result<()> {
        crate::profile_scope!("simulation_tick");
        let field = self.apply_forces()?;
        let dt = self.clock.effective_tick();
        self.physics.step(dt);
        self.sync_renderables();
        self.tick += 1;
        self.sim_time += f64::from(dt);
        trace!(tick = self.tick, dt, pairs = field.pair_evaluations, "tick");
        Ok(())
    }

    fn sync_renderables(&mut self) {
        for p in &self.store {
            match self.physics.position(p.body()) {
                Ok(pos) => {
                    if let Err(e) = self.renderer.set_position(p.visual(), pos) {
                        warn!(id = %p.id(), error = %e, "failed to move renderable");
                    }
                }
                Err(e) => warn!(id = %p.id(), error = %e, "particle has no rigid body"),
            }
        }
    }
}
