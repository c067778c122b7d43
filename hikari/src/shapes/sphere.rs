use super::{point_ray_distance, Hit};
use crate::{
    materials::Material,
    math::{reflect, Ray, Vec3},
};

/// A sphere object.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3<f32>,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Vec3<f32>, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "Sphere radius has to be positive");

        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3<f32> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersects [Ray] with this object.
    ///
    /// Reports the entry point closest to the ray origin, or the exit point if
    /// the origin is inside. Hits behind the origin are never reported.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        let d = ray.d.normalized();
        let to_center = self.center - ray.o;

        // Distance along the ray to the point closest to the center
        let proj = to_center.dot(d);
        // Fully behind the origin
        if proj + self.radius < 0.0 {
            return None;
        }

        let closest = d * proj - to_center;
        let dist_sqr = closest.len_sqr();
        let radius_sqr = self.radius * self.radius;
        if dist_sqr > radius_sqr {
            return None;
        }

        let half_chord = (radius_sqr - dist_sqr).sqrt();
        let t = if proj >= half_chord {
            proj - half_chord
        } else {
            proj + half_chord
        };
        if t < 0.0 {
            return None;
        }

        let p = ray.o + d * t;
        let n = (p - self.center).normalized();

        Some(Hit {
            reflection: Ray::new(p, reflect(d, n)),
            n,
            beta: 0.0,
            gamma: 0.0,
        })
    }

    /// Returns the distance from the center to `ray`.
    pub fn shortest_distance(&self, ray: Ray<f32>) -> f32 {
        point_ray_distance(self.center, ray)
    }
}
