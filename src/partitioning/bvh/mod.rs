pub use bvh_tree::Bvh;

mod bvh_queries;
mod bvh_tree;
mod bvh_validation;
