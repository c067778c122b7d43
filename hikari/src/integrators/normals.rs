use super::{scan, Integrator, RadianceResult, TraceResult};
use crate::{
    math::{Ray, Spectrum},
    shapes::{Hit, Shape},
};

/// Maps the normal of the nearest hit into [0,1], black on a miss.
pub struct Normals {}

impl Integrator for Normals {
    fn li(
        &self,
        ray: Ray<f32>,
        shapes: &[Shape],
        _depth: u32,
        exclude: Option<usize>,
    ) -> RadianceResult {
        // No halos in this view
        let TraceResult { hit, .. } = scan(ray, shapes, exclude, 0.0);

        let color = match hit {
            Some((_, Hit { n, .. })) => {
                Spectrum::new(n.x, n.y, n.z) / 2.0 + Spectrum::from(0.5)
            }
            None => Spectrum::zeros(),
        };

        RadianceResult {
            li: color,
            ray_scene_intersections: 1,
        }
    }
}
