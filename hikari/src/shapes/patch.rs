use super::Hit;
use crate::math::{reflect, Ray, Vec3};

/// Plane patch spanned by two edges from a corner vertex.
///
/// Shared by [super::Triangle] and [super::Rect] which only differ in which
/// barycentric coordinates they consider inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Patch {
    pub p0: Vec3<f32>,
    pub e1: Vec3<f32>,
    pub e2: Vec3<f32>,
    /// Unit normal `e1 x e2`, also the front side
    pub n: Vec3<f32>,
}

/// Determinant of the 3x3 matrix with columns `a`, `b`, `c`
#[inline]
fn det(a: Vec3<f32>, b: Vec3<f32>, c: Vec3<f32>) -> f32 {
    a.dot(b.cross(c))
}

impl Patch {
    /// Creates a new `Patch` with corner `p0` and edges toward `p1` and `p2`.
    ///
    /// The vertices can't be collinear.
    pub fn new(p0: Vec3<f32>, p1: Vec3<f32>, p2: Vec3<f32>) -> Self {
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        let n = e1.cross(e2);
        debug_assert!(n.len_sqr() > 0.0, "Degenerate patch {:?} {:?} {:?}", p0, p1, p2);

        Self {
            p0,
            e1,
            e2,
            n: n.normalized(),
        }
    }

    /// Intersects [Ray] with the plane and returns a hit if `inside` accepts its
    /// barycentric coordinates.
    pub fn intersect<F>(&self, ray: Ray<f32>, inside: F) -> Option<Hit>
    where
        F: Fn(f32, f32) -> bool,
    {
        let d = ray.d;

        // Back faces are never hit
        if -d.dot(self.n) < 0.0 {
            return None;
        }

        // Solve o + t * d = p0 + beta * e1 + gamma * e2 with Cramer's rule
        let s = ray.o - self.p0;
        let neg_d = -d;
        let det_a = det(self.e1, self.e2, neg_d);
        // Parallel to the plane
        if det_a == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det_a;

        let beta = det(s, self.e2, neg_d) * inv_det;
        let gamma = det(self.e1, s, neg_d) * inv_det;
        let t = det(self.e1, self.e2, s) * inv_det;
        if t < 0.0 || !inside(beta, gamma) {
            return None;
        }

        let p = ray.point(t);

        Some(Hit {
            reflection: Ray::new(p, reflect(d, self.n)),
            n: self.n,
            beta,
            gamma,
        })
    }
}
