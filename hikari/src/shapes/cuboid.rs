use super::{point_ray_distance, Hit, Rect};
use crate::{
    materials::Material,
    math::{Ray, Vec3},
};

/// A parallelepiped box made of six outward facing [Rect]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    faces: [Rect; 6],
    center: Vec3<f32>,
    material: Material,
}

impl Cuboid {
    /// Creates a new `Cuboid` from `corner` and the three edges leaving it.
    ///
    /// Edge order doesn't matter, faces are oriented outward regardless of the
    /// handedness of the edges.
    pub fn new(
        corner: Vec3<f32>,
        a: Vec3<f32>,
        b: Vec3<f32>,
        h: Vec3<f32>,
        material: Material,
    ) -> Self {
        let (a, b) = if a.cross(b).dot(h) < 0.0 {
            (b, a)
        } else {
            (a, b)
        };
        let c = corner;

        let faces = [
            Rect::new(c, c + b, c + a, material),
            Rect::new(c + h, c + h + a, c + h + b, material),
            Rect::new(c, c + h, c + b, material),
            Rect::new(c + a, c + a + b, c + a + h, material),
            Rect::new(c, c + a, c + h, material),
            Rect::new(c + b, c + b + h, c + b + a, material),
        ];

        Self {
            faces,
            center: c + (a + b + h) * 0.5,
            material,
        }
    }

    /// Creates a new axis aligned `Cuboid` spanning from `p_min` to `p_max`.
    pub fn axis_aligned(p_min: Vec3<f32>, p_max: Vec3<f32>, material: Material) -> Self {
        let diagonal = p_max - p_min;
        Self::new(
            p_min,
            Vec3::new(diagonal.x, 0.0, 0.0),
            Vec3::new(0.0, diagonal.y, 0.0),
            Vec3::new(0.0, 0.0, diagonal.z),
            material,
        )
    }

    pub fn faces(&self) -> &[Rect; 6] {
        &self.faces
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersects [Ray] with this object.
    ///
    /// Returns the hit on the face closest to the ray origin.
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        self.faces
            .iter()
            .filter_map(|f| f.intersect(ray))
            .min_by(|a, b| a.p().dist_sqr(ray.o).total_cmp(&b.p().dist_sqr(ray.o)))
    }

    /// Returns the distance from the center to `ray`.
    pub fn shortest_distance(&self, ray: Ray<f32>) -> f32 {
        point_ray_distance(self.center, ray)
    }
}
