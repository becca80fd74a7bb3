//! Containment walls.
//!
//! The six walls of a box are switched together: either all of them collide
//! or none do. Turning them on also regenerates particle positions inside
//! the box so nothing starts outside; turning them off leaves particles
//! where they are.

use rand::Rng;
use tracing::{info, warn};

use crate::physics::{RigidBodies, Wall, WallSide};
use crate::renderer::Renderer;
use crate::simulation::store::ParticleStore;
use crate::utils::Aabb;

/// One wall of the set with its own active flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryVolume {
    pub wall: Wall,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundarySet {
    interior: Aabb,
    volumes: Vec<BoundaryVolume>,
}

impl BoundarySet {
    /// Six inactive walls enclosing `interior`.
    pub fn enclosing(interior: Aabb) -> Self {
        let mut volumes = Vec::with_capacity(6);
        for axis in 0..3 {
            volumes.push(BoundaryVolume {
                wall: Wall {
                    axis,
                    side: WallSide::Min,
                    offset: crate::utils::component(interior.min, axis),
                },
                active: false,
            });
            volumes.push(BoundaryVolume {
                wall: Wall {
                    axis,
                    side: WallSide::Max,
                    offset: crate::utils::component(interior.max, axis),
                },
                active: false,
            });
        }
        Self { interior, volumes }
    }

    pub fn interior(&self) -> Aabb {
        self.interior
    }

    pub fn volumes(&self) -> &[BoundaryVolume] {
        &self.volumes
    }

    /// True when every wall is active.
    pub fn is_active(&self) -> bool {
        self.volumes.iter().all(|v| v.active)
    }

    fn set_active(&mut self, active: bool) {
        for v in &mut self.volumes {
            v.active = active;
        }
    }

    fn active_walls(&self) -> Vec<Wall> {
        self.volumes.iter().filter(|v| v.active).map(|v| v.wall).collect()
    }
}

pub struct BoundaryController {
    set: BoundarySet,
}

impl BoundaryController {
    pub fn new(set: BoundarySet) -> Self {
        Self { set }
    }

    pub fn is_active(&self) -> bool {
        self.set.is_active()
    }

    pub fn boundaries(&self) -> &BoundarySet {
        &self.set
    }

    /// Region new and regenerated particles should land in: the interior
    /// while walls are up, `None` (the default extent) otherwise.
    pub fn spawn_region(&self) -> Option<Aabb> {
        self.is_active().then(|| self.set.interior())
    }

    /// Flip every wall and return the new state. Activation regenerates all
    /// positions inside the interior; deactivation does not move anything.
    pub fn toggle<P, R, G>(
        &mut self,
        store: &ParticleStore,
        physics: &mut P,
        renderer: &mut R,
        rng: &mut G,
    ) -> bool
    where
        P: RigidBodies + ?Sized,
        R: Renderer + ?Sized,
        G: Rng + ?Sized,
    {
        if self.is_active() {
            self.set.set_active(false);
            physics.set_walls(&[]);
            info!("boundaries disabled");
            return false;
        }
        self.set.set_active(true);
        physics.set_walls(&self.set.active_walls());
        let failures = store.regenerate_positions(physics, renderer, Some(self.set.interior()), rng);
        if failures > 0 {
            warn!(failures, "some particles could not be moved inside the walls");
        }
        info!(particles = store.len(), interior = ?self.set.interior(), "boundaries enabled");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ParticleSpec;
    use crate::physics::PhysicsWorld;
    use crate::renderer::HeadlessRenderer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ultraviolet::Vec3;

    #[test]
    fn enclosing_builds_six_inactive_walls() {
        let set = BoundarySet::enclosing(Aabb::cube(2.0));
        assert_eq!(set.volumes().len(), 6);
        assert!(set.volumes().iter().all(|v| !v.active));
        let inside = Vec3::new(1.9, -1.9, 0.0);
        assert!(set.volumes().iter().all(|v| v.wall.clearance(inside) > 0.0));
    }

    #[test]
    fn toggle_on_then_off() {
        let mut physics = PhysicsWorld::default();
        let mut renderer = HeadlessRenderer::new();
        let mut store = ParticleStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        for i in 0..5 {
            let far = Vec3::new(100.0 + i as f32, -50.0, 30.0);
            store
                .add(&mut physics, &mut renderer, ParticleSpec::new(1e-3, 10.0, far))
                .unwrap();
        }
        let interior = Aabb::cube(2.0);
        let mut ctl = BoundaryController::new(BoundarySet::enclosing(interior));

        assert!(ctl.toggle(&store, &mut physics, &mut renderer, &mut rng));
        assert!(ctl.boundaries().volumes().iter().all(|v| v.active));
        assert_eq!(physics.walls().len(), 6);
        let placed: Vec<Vec3> = store.iter().map(|p| physics.position(p.body()).unwrap()).collect();
        assert!(placed.iter().all(|p| interior.contains(*p)));

        assert!(!ctl.toggle(&store, &mut physics, &mut renderer, &mut rng));
        assert!(ctl.boundaries().volumes().iter().all(|v| !v.active));
        assert!(physics.walls().is_empty());
        let after: Vec<Vec3> = store.iter().map(|p| physics.position(p.body()).unwrap()).collect();
        assert_eq!(placed, after, "deactivation must not move particles");
    }

    #[test]
    fn spawn_region_follows_state() {
        let mut ctl = BoundaryController::new(BoundarySet::enclosing(Aabb::cube(1.0)));
        assert_eq!(ctl.spawn_region(), None);
        let store = ParticleStore::new();
        let mut physics = PhysicsWorld::default();
        let mut renderer = HeadlessRenderer::new();
        let mut rng = StdRng::seed_from_u64(0);
        ctl.toggle(&store, &mut physics, &mut renderer, &mut rng);
        assert_eq!(ctl.spawn_region(), Some(Aabb::cube(1.0)));
    }
}
