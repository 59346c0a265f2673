use crate::query::QueryMode;
use core::time::Duration;

/// Timing and results of one batch of rays run under one strategy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatchStats {
    /// The strategy used.
    pub mode: QueryMode,
    /// Time spent in the query loop only.
    pub elapsed: Duration,
    /// Number of rays that hit a shape.
    pub hit_count: usize,
    /// Sum of the distances from each ray origin to its nearest hit.
    pub distance_sum: f64,
}

impl BatchStats {
    /// The elapsed time, in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// The mean distance to the nearest hit, or `None` if nothing was hit.
    pub fn average_distance(&self) -> Option<f64> {
        if self.hit_count == 0 {
            None
        } else {
            Some(self.distance_sum / self.hit_count as f64)
        }
    }

    /// Do both batches report the same hits?
    pub fn same_hits(&self, other: &BatchStats) -> bool {
        self.hit_count == other.hit_count && self.distance_sum == other.distance_sum
    }
}
