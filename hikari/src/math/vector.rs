use approx::{AbsDiffEq, RelativeEq};
use num::traits::Signed;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
///
/// Also used for points since the tracer never needs to tell the two apart.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl_container!(
    Vec2 [x: 0 y: 1],
    Vec3 [x: 0 y: 1 z: 2]
);
impl_vec_dot!(
    Vec2 [x y],
    Vec3 [x y z]
);

impl<T> Vec2<T>
where
    T: ValueType,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let v = Self { x, y };
        debug_assert!(!v.has_nans());
        v
    }
}

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Constructs a new vector.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        debug_assert!(!v.has_nans());
        v
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared distance between two points.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }
}

/// Shorthand constructor
#[inline]
pub fn vec2<T>(x: T, y: T) -> Vec2<T>
where
    T: ValueType,
{
    // Use new() to catch NaNs
    Vec2::new(x, y)
}

/// Shorthand constructor
#[inline]
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: ValueType,
{
    Vec3::new(x, y, z)
}

/// Mirrors incident direction `d` about the unit normal `n`.
///
/// `d` doesn't need to point away from the surface.
#[inline]
pub fn reflect<T>(d: Vec3<T>, n: Vec3<T>) -> Vec3<T>
where
    T: FloatValueType,
{
    d - n * ((T::one() + T::one()) * d.dot(n))
}
