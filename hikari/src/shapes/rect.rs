use super::{patch::Patch, point_ray_distance, Hit};
use crate::{
    materials::Material,
    math::{Ray, Vec3},
};

/// A single-sided parallelogram spanned by `p1 - p0` and `p2 - p0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    patch: Patch,
    material: Material,
}

impl Rect {
    /// Creates a new `Rect` with corner `p0` and its neighbouring corners `p1`, `p2`.
    ///
    /// The front face is the one `(p1 - p0) x (p2 - p0)` points to.
    pub fn new(p0: Vec3<f32>, p1: Vec3<f32>, p2: Vec3<f32>, material: Material) -> Self {
        Self {
            patch: Patch::new(p0, p1, p2),
            material,
        }
    }

    /// Returns the unit normal of the front face.
    pub fn normal(&self) -> Vec3<f32> {
        self.patch.n
    }

    /// Returns the middle point of this `Rect`.
    pub fn center(&self) -> Vec3<f32> {
        let Patch { p0, e1, e2, .. } = self.patch;
        p0 + (e1 + e2) * 0.5
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersects [Ray] with this object.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        self.patch.intersect(ray, |beta, gamma| {
            (0.0..=1.0).contains(&beta) && (0.0..=1.0).contains(&gamma)
        })
    }

    /// Returns the distance from the center to `ray`.
    pub fn shortest_distance(&self, ray: Ray<f32>) -> f32 {
        point_ray_distance(self.center(), ray)
    }
}
