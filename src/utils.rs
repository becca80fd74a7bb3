// utils.rs
// Geometry and random-sampling helpers shared by the store, the walls and spawning.

use rand::Rng;
use ultraviolet::Vec3;

use crate::config;

/// Axis-aligned box, `min` and `max` inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: Vec3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Vec3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Cube centred at the origin.
    pub fn cube(half_extent: f32) -> Self {
        let h = half_extent.abs();
        Self::new(Vec3::new(-h, -h, -h), Vec3::new(h, h, h))
    }

    /// Extent used for regeneration when the caller supplies no bounds.
    pub fn default_extent() -> Self {
        Self::cube(config::DEFAULT_HALF_EXTENT)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Uniformly random point inside the box.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
            rng.random_range(self.min.z..=self.max.z),
        )
    }
}

/// Component `axis` (0 = x, 1 = y, 2 = z) of a vector.
#[inline]
pub fn component(v: Vec3, axis: usize) -> f32 {
    match axis {
        0 => v.x,
        1 => v.y,
        _ => v.z,
    }
}

#[inline]
pub fn set_component(v: &mut Vec3, axis: usize, value: f32) {
    match axis {
        0 => v.x = value,
        1 => v.y = value,
        _ => v.z = value,
    }
}

/// Random charge: magnitude `u^-3` C for `u` uniform in [6, 20], random sign.
pub fn random_charge<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let u: f32 = rng.random_range(config::RANDOM_CHARGE_BASE_MIN..=config::RANDOM_CHARGE_BASE_MAX);
    let magnitude = u.powi(-3);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Random mass uniform in [5, 15] kg.
pub fn random_mass<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(config::RANDOM_MASS_MIN..=config::RANDOM_MASS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_points_stay_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Aabb::new(Vec3::new(1.0, -2.0, 0.0), Vec3::new(2.0, 2.0, 0.5));
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.random_point(&mut rng)));
        }
    }

    #[test]
    fn new_orders_corners() {
        let b = Aabb::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn random_charge_follows_inverse_cube_rule() {
        let mut rng = StdRng::seed_from_u64(11);
        let lo = config::RANDOM_CHARGE_BASE_MAX.powi(-3);
        let hi = config::RANDOM_CHARGE_BASE_MIN.powi(-3);
        let (mut pos, mut neg) = (0, 0);
        for _ in 0..2000 {
            let q = random_charge(&mut rng);
            assert!(q.abs() >= lo * 0.999 && q.abs() <= hi * 1.001, "q = {q}");
            if q > 0.0 {
                pos += 1;
            } else {
                neg += 1;
            }
        }
        assert!(pos > 800 && neg > 800);
    }

    #[test]
    fn random_mass_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let m = random_mass(&mut rng);
            assert!((config::RANDOM_MASS_MIN..=config::RANDOM_MASS_MAX).contains(&m));
        }
    }

    #[test]
    fn component_accessors() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(component(v, 1), 2.0);
        set_component(&mut v, 2, -4.0);
        assert_eq!(v.z, -4.0);
    }
}
