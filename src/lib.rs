//! Generic 4-component vector math
//!
//! This crate provides the [`Vector4`] value type used for colors,
//! homogeneous coordinates and bounding extents, parameterized over the
//! element type.
//!
//! ## Core Types
//!
//! - [`Vector4`] - generic vector with x, y, z, w components
//! - [`Scalar`] - the element types it accepts (`i32`, `u32`, `f32`, `f64`)
//! - [`Matrix4`] - row-indexable 4x4 matrix, for the vector-times-matrix
//!   operator
//!
//! ## Aliases
//!
//! - [`Vec4`] / [`DVec4`] - single / double precision
//! - [`IVec4`] / [`UVec4`] - signed / unsigned 32-bit integer

mod mat4;
mod scalar;
mod vec4;

pub use mat4::Matrix4;
pub use scalar::{approx_equal, Scalar};
pub use vec4::{DVec4, IVec4, UVec4, Vec4, Vector4};
