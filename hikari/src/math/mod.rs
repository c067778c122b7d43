#[macro_use]
mod macros;

mod common;
mod ray;
pub mod spectrum;
mod vector;

pub use common::{FloatValueType, ValueType};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::{reflect, vec2, vec3, Vec2, Vec3};
