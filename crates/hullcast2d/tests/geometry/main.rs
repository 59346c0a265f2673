extern crate nalgebra as na;

mod convex_construction;
mod convex_transform;
