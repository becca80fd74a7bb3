//! Physical constants and unit conversions.
//!
//! The simulation works in plain SI units:
//! - Length: metre (m)
//! - Time: second (s)
//! - Charge: coulomb (C)
//! - Mass: kilogram (kg)

/// Coulomb's constant k = 1/(4πε₀) in N·m²/C².
pub const COULOMB_CONSTANT_F64: f64 = 8.987_551_792_314e9;
/// Coulomb's constant narrowed to the simulation's working precision.
pub const COULOMB_CONSTANT: f32 = COULOMB_CONSTANT_F64 as f32;

/// One millicoulomb in coulombs.
pub const MILLICOULOMB: f32 = 1.0e-3;

/// Convert millicoulombs to coulombs.
#[inline]
pub fn millicoulombs(mc: f32) -> f32 {
    mc * MILLICOULOMB
}
