use approx::{AbsDiffEq, RelativeEq};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A half-line starting at `o` toward `d`.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Vec3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    ///
    /// `d` has to be non-zero. It doesn't have to be normalized but the shapes
    /// report physically meaningful distances only for unit directions.
    pub fn new(o: Vec3<T>, d: Vec3<T>) -> Self {
        let ret = Self { o, d };
        debug_assert!(!ret.has_nans());
        debug_assert!(d.len_sqr() > T::zero(), "Ray with a zero direction");
        ret
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Finds the point on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Vec3<T> {
        self.o + self.d * t
    }
}

impl<T> AbsDiffEq for Ray<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.o.abs_diff_eq(&other.o, epsilon) && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl<T> RelativeEq for Ray<T>
where
    T: FloatValueType + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.o.relative_eq(&other.o, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
