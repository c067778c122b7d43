use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, Num};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the math containers
pub trait ValueType:
    Num + PartialOrd + ToPrimitive + FromPrimitive + Copy + AddAssign + DivAssign + MulAssign + SubAssign
{
}

/// [ValueType]s that also support the floating point operations needed for lengths
pub trait FloatValueType: ValueType + Float {}

// Impls for all matching types
impl<T> ValueType for T where
    T: Num
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + Copy
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
{
}
impl<T> FloatValueType for T where T: ValueType + Float {}
