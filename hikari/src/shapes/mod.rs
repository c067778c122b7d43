mod cuboid;
mod patch;
mod rect;
mod sphere;
mod triangle;

pub use cuboid::Cuboid;
pub use rect::Rect;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{
    materials::Material,
    math::{Ray, Vec3},
};

/// Info of a surface hit
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Mirror reflection of the incident ray, starting at the hit point
    pub reflection: Ray<f32>,
    /// Unit surface normal
    pub n: Vec3<f32>,
    /// Barycentric coordinates on the second and third vertex, zero for spheres
    pub beta: f32,
    pub gamma: f32,
}

impl Hit {
    /// World position of the hit
    pub fn p(&self) -> Vec3<f32> {
        self.reflection.o
    }
}

/// The closed set of primitives a scene is built from.
///
/// Geometry is fixed on construction. Planar shapes only report hits on their
/// front face, the side their normal points to. Spheres and cuboids report
/// outward normals.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
    Rect(Rect),
    Cuboid(Cuboid),
}

impl Shape {
    /// Intersects [Ray] with this object.
    #[inline]
    pub fn intersect(&self, ray: Ray<f32>) -> Option<Hit> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
            Shape::Rect(r) => r.intersect(ray),
            Shape::Cuboid(c) => c.intersect(ray),
        }
    }

    /// Returns the distance from the center of this object to `ray`.
    #[inline]
    pub fn shortest_distance(&self, ray: Ray<f32>) -> f32 {
        match self {
            Shape::Sphere(s) => s.shortest_distance(ray),
            Shape::Triangle(t) => t.shortest_distance(ray),
            Shape::Rect(r) => r.shortest_distance(ray),
            Shape::Cuboid(c) => c.shortest_distance(ray),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(s) => s.material(),
            Shape::Triangle(t) => t.material(),
            Shape::Rect(r) => r.material(),
            Shape::Cuboid(c) => c.material(),
        }
    }
}

macro_rules! impl_from_shape {
    ( $( $shape:ident ),+ ) => {
        $(
            impl From<$shape> for Shape {
                fn from(s: $shape) -> Self {
                    Shape::$shape(s)
                }
            }
        )*
    };
}
impl_from_shape!(Sphere, Triangle, Rect, Cuboid);

/// Distance from `p` to the closest point on `ray`.
///
/// Points behind the origin are measured to the origin.
fn point_ray_distance(p: Vec3<f32>, ray: Ray<f32>) -> f32 {
    let d = ray.d.normalized();
    let to_p = p - ray.o;
    let proj = to_p.dot(d);
    if proj < 0.0 {
        to_p.len()
    } else {
        (d * proj - to_p).len()
    }
}
