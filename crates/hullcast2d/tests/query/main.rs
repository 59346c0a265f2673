extern crate nalgebra as na;

mod mode_agreement;
mod scene_counts;
mod three_triangles;
