use super::{patch::Patch, point_ray_distance, Hit};
use crate::{
    materials::Material,
    math::{Ray, Vec3},
};

/// A single-sided triangle object.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    patch: Patch,
    material: Material,
}

impl Triangle {
    /// Creates a new `Triangle`.
    ///
    /// The front face is the one the vertices wind counter clockwise on.
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

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersects [Ray] with this object.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        self.patch.intersect(ray, |beta, gamma| {
            beta >= 0.0 && gamma >= 0.0 && beta + gamma <= 1.0
        })
    }

    /// Returns the distance from the centroid to `ray`.
    pub fn shortest_distance(&self, ray: Ray<f32>) -> f32 {
        let Patch { p0, e1, e2, .. } = self.patch;
        point_ray_distance(p0 + (e1 + e2) / 3.0, ray)
    }
}
