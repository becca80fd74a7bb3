// simulation/store.rs
// Authoritative particle collection: id assignment, bulk clear, bulk regeneration.

use rand::Rng;
use tracing::{debug, warn};
use ultraviolet::Vec3;

use crate::body::{Particle, ParticleId, ParticleSpec};
use crate::error::Result;
use crate::physics::{BodyDesc, RigidBodies};
use crate::renderer::{Appearance, Renderer};
use crate::utils::Aabb;

/// Outcome of a bulk clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub removed: usize,
    pub body_failures: usize,
    pub visual_failures: usize,
}

impl ClearReport {
    pub fn is_clean(&self) -> bool {
        self.body_failures == 0 && self.visual_failures == 0
    }
}

/// Insertion-ordered particle collection.
///
/// Ids come from a counter that only grows until the next `clear`, so the
/// vector is always sorted by id and lookups are a binary search. After a
/// clear followed by `n` adds the ids are exactly `0..n`.
#[derive(Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the rigid body and the renderable for `spec` and register the particle.
    pub fn add<P, R>(&mut self, physics: &mut P, renderer: &mut R, spec: ParticleSpec) -> Result<ParticleId>
    where
        P: RigidBodies + ?Sized,
        R: Renderer + ?Sized,
    {
        spec.validate()?;
        let body = physics.spawn(BodyDesc::particle(spec.position, spec.mass));
        let visual = match renderer.create(Appearance::for_particle(spec.charge, spec.mass), spec.position) {
            Ok(visual) => visual,
            Err(e) => {
                if let Err(undo) = physics.destroy(body) {
                    warn!(error = %undo, "failed to roll back rigid body");
                }
                return Err(e);
            }
        };
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            charge: spec.charge,
            mass: spec.mass,
            body,
            visual,
        });
        debug!(%id, charge = spec.charge, mass = spec.mass, "particle added");
        Ok(id)
    }

    /// Destroy every particle's resources and empty the store. A failure for
    /// one particle is logged and counted; the remaining ones are still destroyed.
    pub fn clear<P, R>(&mut self, physics: &mut P, renderer: &mut R) -> ClearReport
    where
        P: RigidBodies + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut report = ClearReport::default();
        for p in self.particles.drain(..) {
            if let Err(e) = renderer.destroy(p.visual) {
                warn!(id = %p.id, error = %e, "failed to destroy renderable");
                report.visual_failures += 1;
            }
            if let Err(e) = physics.destroy(p.body) {
                warn!(id = %p.id, error = %e, "failed to destroy rigid body");
                report.body_failures += 1;
            }
            report.removed += 1;
        }
        self.next_id = 0;
        report
    }

    /// Put every particle at rest at a uniformly random point of `bounds`
    /// (the default extent when `None`). Charge, mass and id are untouched.
    /// A particle whose rigid body rejects the move is logged and skipped;
    /// the rest are still placed. Returns the number skipped.
    pub fn regenerate_positions<P, R, G>(
        &self,
        physics: &mut P,
        renderer: &mut R,
        bounds: Option<Aabb>,
        rng: &mut G,
    ) -> usize
    where
        P: RigidBodies + ?Sized,
        R: Renderer + ?Sized,
        G: Rng + ?Sized,
    {
        let bounds = bounds.unwrap_or_else(Aabb::default_extent);
        let mut failures = 0;
        for p in &self.particles {
            let pos = bounds.random_point(rng);
            let placed = physics
                .set_velocity(p.body, Vec3::zero())
                .and_then(|()| physics.set_position(p.body, pos));
            if let Err(e) = placed {
                warn!(id = %p.id, error = %e, "failed to regenerate rigid body");
                failures += 1;
                continue;
            }
            if let Err(e) = renderer.set_position(p.visual, pos) {
                warn!(id = %p.id, error = %e, "failed to move renderable");
            }
        }
        debug!(count = self.particles.len(), failures, ?bounds, "positions regenerated");
        failures
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles in insertion order. Each call starts a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.particles[i])
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
