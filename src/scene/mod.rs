//! Scenes of random convex shapes, kept in sync with their spatial trees.

pub use self::config::{ConfigError, SceneConfig, MAX_QUADTREE_DEPTH};
pub use self::generator::{
    generate_shapes, generate_shapes_with, random_convex_shape, random_point_in,
    random_shape_at,
};
pub use self::scene::{Scene, SceneError};

mod config;
mod generator;
mod scene;
