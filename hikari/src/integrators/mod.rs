mod glow;
mod normals;

pub use glow::{trace, Glow};
use normals::Normals;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    lights::{halo, LightContribution},
    math::{Ray, Spectrum},
    shapes::{Hit, Shape},
};

pub type GlowParams = glow::Params;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumVariantNames, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntegratorType {
    Glow(glow::Params),
    Normals,
}

impl IntegratorType {
    pub fn instantiate(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::Glow(params) => Box::new(Glow::new(params)),
            IntegratorType::Normals => Box::new(Normals {}),
        }
    }
}

#[allow(clippy::derivable_impls)] // Can't derive Default for non unit variants, which Glow is
impl Default for IntegratorType {
    fn default() -> Self {
        IntegratorType::Glow(glow::Params::default())
    }
}

pub struct RadianceResult {
    pub li: Spectrum<f32>,
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
        }
    }
}

// Public interface for scene integrators.
pub trait Integrator: Send + Sync {
    /// Evaluates the incoming radiance along `ray`, skipping the shape at index
    /// `exclude`. Also returns the number of times `shapes` was scanned.
    fn li(
        &self,
        ray: Ray<f32>,
        shapes: &[Shape],
        depth: u32,
        exclude: Option<usize>,
    ) -> RadianceResult;
}

/// What a single scan of the scene found along a ray
#[derive(Clone, Debug, Default)]
pub struct TraceResult {
    /// Nearest hit and the index of its shape
    pub hit: Option<(usize, Hit)>,
    /// Halos of the lights the ray passed, in scene order
    pub lights: Vec<LightContribution>,
}

/// Scans all of `shapes` except `exclude` for the nearest hit along `ray` and
/// the halos of the lights it passes.
///
/// Ties in hit distance keep the shape that comes first.
pub fn scan(
    ray: Ray<f32>,
    shapes: &[Shape],
    exclude: Option<usize>,
    halo_max_distance: f32,
) -> TraceResult {
    let mut nearest: Option<(usize, Hit, f32)> = None;
    let mut lights = Vec::new();

    for (i, shape) in shapes.iter().enumerate() {
        if exclude == Some(i) {
            continue;
        }

        let hit = shape.intersect(ray);

        let material = shape.material();
        if material.is_emissive() {
            let dist = if hit.is_some() {
                0.0
            } else {
                shape.shortest_distance(ray)
            };
            if let Some(light) = halo(material, dist, halo_max_distance) {
                lights.push(light);
            }
        }

        if let Some(hit) = hit {
            let dist_sqr = hit.p().dist_sqr(ray.o);
            if nearest.map_or(true, |(_, _, nearest_sqr)| dist_sqr < nearest_sqr) {
                nearest = Some((i, hit, dist_sqr));
            }
        }
    }

    TraceResult {
        hit: nearest.map(|(i, hit, _)| (i, hit)),
        lights,
    }
}
