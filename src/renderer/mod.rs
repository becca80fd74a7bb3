//! Renderable port.
//!
//! The core never looks inside a renderable: it creates one per particle,
//! forwards position writes and destroys it on clear. Colour and size are
//! derived from charge and mass once, at creation.

mod headless;

pub use headless::HeadlessRenderer;

use palette::{Hsluv, IntoColor, Srgba};
use ultraviolet::Vec3;

use crate::body::Polarity;
use crate::config;
use crate::error::Result;

/// Opaque handle to a renderable owned by a [`Renderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderHandle(pub u64);

/// Visual parameters of a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: [u8; 4],
    pub radius: f32,
}

impl Appearance {
    /// Red hues for positive charges, blue for negative, grey for neutral.
    /// Saturation grows with |charge|, radius with the cube root of mass.
    pub fn for_particle(charge: f32, mass: f32) -> Self {
        let strength = (charge.abs() / config::APPEARANCE_FULL_CHARGE).clamp(0.0, 1.0);
        let (h, s): (f32, f32) = match Polarity::of(charge) {
            Polarity::Positive => (12.0, 40.0 + 60.0 * strength),
            Polarity::Negative => (250.0, 40.0 + 60.0 * strength),
            Polarity::Neutral => (0.0, 0.0),
        };
        let c: Hsluv = Hsluv::new(h, s, 55.0);
        let rgba: Srgba = c.into_color();
        let color = [
            (rgba.red.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.green.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.blue.clamp(0.0, 1.0) * 255.0) as u8,
            (rgba.alpha.clamp(0.0, 1.0) * 255.0) as u8,
        ];
        Self {
            color,
            radius: mass.max(0.0).cbrt() * config::APPEARANCE_RADIUS_SCALE,
        }
    }
}

pub trait Renderer {
    fn create(&mut self, appearance: Appearance, position: Vec3) -> Result<RenderHandle>;
    fn set_position(&mut self, handle: RenderHandle, position: Vec3) -> Result<()>;
    fn destroy(&mut self, handle: RenderHandle) -> Result<()>;
    fn live_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_picks_the_hue() {
        let pos = Appearance::for_particle(1e-3, 10.0);
        let neg = Appearance::for_particle(-1e-3, 10.0);
        assert!(pos.color[0] > pos.color[2], "positive should be red-ish: {:?}", pos.color);
        assert!(neg.color[2] > neg.color[0], "negative should be blue-ish: {:?}", neg.color);
        assert_eq!(pos.color[3], 255);
    }

    #[test]
    fn radius_grows_with_mass() {
        let light = Appearance::for_particle(1e-3, 5.0);
        let heavy = Appearance::for_particle(1e-3, 15.0);
        assert!(heavy.radius > light.radius);
        assert!((Appearance::for_particle(0.0, 8.0).radius - 2.0 * config::APPEARANCE_RADIUS_SCALE).abs() < 1e-6);
    }
}
