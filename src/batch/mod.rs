//! Timed batches of random rays, run under every query strategy and cross-checked.

pub use self::config::BatchConfig;
pub use self::harness::{run_batch, BatchError, BatchQueryHarness, BatchReport};
pub use self::ray_batch::RayBatch;
pub use self::stats::BatchStats;

mod config;
mod harness;
mod ray_batch;
mod stats;
