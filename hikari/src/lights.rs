use crate::{materials::Material, math::Spectrum};

/// Glow of an emissive shape seen along a ray
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightContribution {
    /// Color of the light
    pub color: Spectrum<f32>,
    /// Falloff in [0,1], 1 when the ray touches the light
    pub multiplier: f32,
}

impl LightContribution {
    /// Returns the color scaled by the falloff.
    pub fn radiance(&self) -> Spectrum<f32> {
        self.color * self.multiplier
    }
}

/// Returns the halo of a light with `material` for a ray passing at `dist` from it.
///
/// The halo reaches `halo_max_distance * intensity` and falls off linearly,
/// `None` means the ray is out of its reach.
pub fn halo(material: &Material, dist: f32, halo_max_distance: f32) -> Option<LightContribution> {
    let halo_radius = halo_max_distance * material.intensity;
    if dist >= halo_radius {
        return None;
    }

    Some(LightContribution {
        color: material.color,
        multiplier: 1.0 - dist / halo_radius,
    })
}
