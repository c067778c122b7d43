use approx::{AbsDiffEq, RelativeEq};
use num::traits::Signed;
use serde::{Deserialize, Serialize};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::common::{FloatValueType, ValueType};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
///
/// Values are not limited to [0,1] so sums of bright contributions survive
/// until the final conversion to a pixel.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl_container!(Spectrum [r: 0 g: 1 b: 2]);

impl<T> Spectrum<T>
where
    T: ValueType,
{
    /// Constructs a new `Spectrum`.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(r: T, g: T, b: T) -> Self {
        let s = Self { r, g, b };
        debug_assert!(!s.has_nans());
        s
    }

    /// Returns `true` if all channels are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Returns the `Spectrum` with each channel clamped to [0,1].
    #[inline]
    pub fn clamped(&self) -> Self {
        let clamp = |v: T| v.max(T::zero()).min(T::one());
        Self {
            r: clamp(self.r),
            g: clamp(self.g),
            b: clamp(self.b),
        }
    }

    /// Packs the clamped channels into `0xRRGGBB00`.
    pub fn to_packed(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8)
    }

    /// Converts the clamped channels to 8-bit values.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.clamped();
        let scale = T::from_f32(255.0).unwrap_or_else(T::one);
        let to_u8 = |v: T| (v * scale).to_u8().unwrap_or(0);
        [to_u8(c.r), to_u8(c.g), to_u8(c.b)]
    }
}

// Component-wise product used for tinting
impl<T> Mul for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> MulAssign for Spectrum<T>
where
    T: ValueType,
{
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl<T> std::iter::Sum for Spectrum<T>
where
    T: ValueType,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zeros(), |acc, s| acc + s)
    }
}

// Palette carried over from the tutorial scenes
pub const RED: Spectrum<f32> = Spectrum { r: 0.7, g: 0.1, b: 0.1 };
pub const ORANGE: Spectrum<f32> = Spectrum { r: 0.9, g: 0.6, b: 0.0 };
pub const YELLOW: Spectrum<f32> = Spectrum { r: 1.0, g: 0.9, b: 0.0 };
pub const GREEN: Spectrum<f32> = Spectrum { r: 0.1, g: 0.7, b: 0.1 };
pub const BLUE: Spectrum<f32> = Spectrum { r: 0.0, g: 0.1, b: 0.9 };
pub const PURPLE: Spectrum<f32> = Spectrum { r: 0.7, g: 0.1, b: 0.7 };
pub const WHITE: Spectrum<f32> = Spectrum { r: 1.0, g: 1.0, b: 1.0 };
pub const GREY: Spectrum<f32> = Spectrum { r: 0.2, g: 0.2, b: 0.2 };
pub const LIGHT_GREY: Spectrum<f32> = Spectrum { r: 0.7, g: 0.7, b: 0.7 };
pub const REALLY_LIGHT_GREY: Spectrum<f32> = Spectrum { r: 0.8, g: 0.8, b: 0.8 };
pub const BLACK: Spectrum<f32> = Spectrum { r: 0.0, g: 0.0, b: 0.0 };
pub const BROWN: Spectrum<f32> = Spectrum { r: 0.7, g: 0.5, b: 0.3 };
pub const TURQUOISE: Spectrum<f32> = Spectrum { r: 0.1, g: 0.8, b: 0.8 };
