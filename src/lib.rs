/*!
hullcast
========

**hullcast** is a 2-dimensional ray query engine written with the rust
programming language. It answers "which static convex polygons does this ray
segment hit first?" for single rays and for large batches of rays, with five
interchangeable strategies that must all agree:

* brute force, exact test against every shape,
* bounding-disc rejection before the exact test,
* bounding-box rejection before the exact test,
* a binary bounding-volume tree narrowing the candidates,
* a uniform quadtree narrowing the candidates.

The [`batch`] module times these strategies against each other and reports any
disagreement as an error.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod batch;
pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod scene;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The rotation type.
    pub type Rotation<N> = UnitComplex<N>;
}
