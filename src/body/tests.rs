use super::*;
use ultraviolet::Vec3;

#[test]
fn polarity_follows_sign() {
    assert_eq!(Polarity::of(1e-3), Polarity::Positive);
    assert_eq!(Polarity::of(-1e-3), Polarity::Negative);
    assert_eq!(Polarity::of(0.0), Polarity::Neutral);
}

#[test]
fn valid_particle_is_accepted() {
    assert!(ParticleSpec::new(-2e-3, 10.0, Vec3::new(1.0, 0.0, -1.0)).validate().is_ok());
}

#[test]
fn non_positive_mass_is_rejected() {
    for mass in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = ParticleSpec::new(1e-3, mass, Vec3::zero()).validate().unwrap_err();
        assert!(err.to_string().contains("mass"), "mass = {mass}");
    }
}

#[test]
fn non_finite_charge_and_position_are_rejected() {
    assert!(ParticleSpec::new(f32::NAN, 1.0, Vec3::zero()).validate().is_err());
    assert!(ParticleSpec::new(1e-3, 1.0, Vec3::new(0.0, f32::INFINITY, 0.0))
        .validate()
        .is_err());
}

#[test]
fn id_display() {
    assert_eq!(ParticleId(4).to_string(), "#4");
}
