use super::{scan, Integrator, RadianceResult, TraceResult};
use crate::{
    hikari_error,
    math::{spectrum::TURQUOISE, Ray, Spectrum},
    shapes::Shape,
};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Number of reflection bounces evaluated after the primary hit
    pub max_depth: u32,
    /// Strength of the flat local term on hit surfaces
    pub ambient_intensity: f32,
    /// Color seen by rays that escape the scene
    pub background: Spectrum<f32>,
    /// Halo radius of a light with unit intensity
    pub halo_max_distance: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_depth: 5,
            ambient_intensity: 0.2,
            background: TURQUOISE,
            halo_max_distance: 2.0,
        }
    }
}

/// Mirror reflections with a flat ambient term and glowing lights.
pub struct Glow {
    params: Params,
}

impl Glow {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Integrator for Glow {
    fn li(
        &self,
        ray: Ray<f32>,
        shapes: &[Shape],
        depth: u32,
        exclude: Option<usize>,
    ) -> RadianceResult {
        let TraceResult { hit, lights } =
            scan(ray, shapes, exclude, self.params.halo_max_distance);
        let halo: Spectrum<f32> = lights.iter().map(|l| l.radiance()).sum();

        let mut ray_count = 1;
        let mut li = if let Some((i, hit)) = hit {
            let color = shapes[i].material().color;

            let mut li = color * self.params.ambient_intensity + halo;
            if depth < self.params.max_depth {
                // Surface color doubles as reflectance
                let reflected = self.li(hit.reflection, shapes, depth + 1, Some(i));
                li += color * reflected.li;
                ray_count += reflected.ray_scene_intersections;
            }
            li
        } else {
            (self.params.background + halo).clamped()
        };

        if depth == 0 && li.has_nans() {
            hikari_error!("NaN radiance for {:?}", ray);
            li = self.params.background;
        }

        RadianceResult {
            li,
            ray_scene_intersections: ray_count,
        }
    }
}

/// Traces the color seen along `ray` in a scene made of `shapes`.
pub fn trace(ray: Ray<f32>, shapes: &[Shape], params: &Params) -> Spectrum<f32> {
    Glow::new(*params).li(ray, shapes, 0, None).li
}
