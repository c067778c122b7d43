use serde::{Deserialize, Serialize};

use crate::math::Spectrum;

/// Surface properties of a shape
///
/// How much of the reflected light a surface carries is given by its color.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Material {
    /// Surface color with channels in [0,1]
    pub color: Spectrum<f32>,
    /// Emitted strength. Shapes with positive intensity glow as light bulbs.
    #[serde(default)]
    pub intensity: f32,
}

impl Material {
    /// Creates a new `Material`.
    pub fn new(color: Spectrum<f32>, intensity: f32) -> Self {
        debug_assert!(color == color.clamped(), "Color {:?} outside [0,1]", color);
        debug_assert!(intensity >= 0.0);

        Self { color, intensity }
    }

    /// Returns `true` if this `Material` emits light.
    pub fn is_emissive(&self) -> bool {
        self.intensity > 0.0
    }
}

pub const MIRRORISH: Material = Material {
    color: Spectrum { r: 0.85, g: 0.85, b: 0.85 },
    intensity: 0.0,
};
pub const DULL: Material = Material {
    color: Spectrum { r: 0.25, g: 0.2, b: 0.35 },
    intensity: 0.0,
};
pub const BRIGHT: Material = Material {
    color: Spectrum { r: 0.6, g: 0.3, b: 0.3 },
    intensity: 0.0,
};
pub const LIGHT: Material = Material {
    color: Spectrum { r: 1.0, g: 1.0, b: 0.9 },
    intensity: 1.0,
};
pub const GRAYISH: Material = Material {
    color: Spectrum { r: 0.4, g: 0.4, b: 0.4 },
    intensity: 0.0,
};
pub const YELLOWISH: Material = Material {
    color: Spectrum { r: 0.5, g: 0.45, b: 0.2 },
    intensity: 0.0,
};
pub const WHITEISH: Material = Material {
    color: Spectrum { r: 0.6, g: 0.6, b: 0.6 },
    intensity: 0.0,
};
