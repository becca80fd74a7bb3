// Centralized configuration for simulation parameters.
// Runtime overrides live in init_config.rs; these are the built-in defaults.

use std::time::Duration;

// ====================
// Scheduler
// ====================
/// Fixed tick rate of the scheduler in wall-clock ticks per second.
pub const DEFAULT_TICK_HZ: f32 = 50.0;
/// Unscaled duration of one fixed tick (seconds). Matches `DEFAULT_TICK_HZ`.
pub const DEFAULT_BASE_TICK: f32 = 1.0 / DEFAULT_TICK_HZ;
/// Initial time-scale multiplier.
pub const DEFAULT_TIME_SCALE: f32 = 1.0;

/// Wall-clock period for a tick rate, falling back to the default rate for
/// non-positive or non-finite input.
pub fn tick_interval(tick_hz: f32) -> Duration {
    let hz = if tick_hz.is_finite() && tick_hz > 0.0 {
        tick_hz
    } else {
        DEFAULT_TICK_HZ
    };
    Duration::from_secs_f32(1.0 / hz)
}

// ====================
// Forces
// ====================
/// Lower bound on pair separation used for the Coulomb magnitude (metres).
pub const MIN_DISTANCE: f32 = 1.0e-3;

// ====================
// Random particles
// ====================
/// Range of the base value `u` for random charges; magnitude is `u^-3` C.
pub const RANDOM_CHARGE_BASE_MIN: f32 = 6.0;
pub const RANDOM_CHARGE_BASE_MAX: f32 = 20.0;
/// Range of random particle masses (kg).
pub const RANDOM_MASS_MIN: f32 = 5.0;
pub const RANDOM_MASS_MAX: f32 = 15.0;
/// Number of random particles spawned at start-up.
pub const DEFAULT_INITIAL_PARTICLES: usize = 10;

// ====================
// Domain
// ====================
/// Half-size of the cube used for regeneration when no bounds are given.
pub const DEFAULT_HALF_EXTENT: f32 = 10.0;
/// Half-size of the cube enclosed by the boundary walls.
pub const DEFAULT_BOUNDARY_HALF_EXTENT: f32 = 10.0;
/// Normal-velocity restitution applied when a particle hits a wall.
pub const DEFAULT_WALL_RESTITUTION: f32 = 1.0;

// ====================
// Appearance
// ====================
/// Charge magnitude (C) that maps to a fully saturated colour.
pub const APPEARANCE_FULL_CHARGE: f32 = 5.0e-3;
/// Scale from cube-root mass to rendered radius.
pub const APPEARANCE_RADIUS_SCALE: f32 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tick_matches_tick_rate() {
        assert!((tick_interval(DEFAULT_TICK_HZ).as_secs_f32() - DEFAULT_BASE_TICK).abs() < 1e-6);
    }

    #[test]
    fn bad_tick_rate_uses_default() {
        assert_eq!(tick_interval(0.0), tick_interval(DEFAULT_TICK_HZ));
        assert_eq!(tick_interval(f32::NAN), tick_interval(DEFAULT_TICK_HZ));
    }
}
