/// Parameters of the random ray batches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchConfig {
    /// Number of rays of a batch.
    pub ray_count: usize,
    /// Largest number of rays of a batch.
    pub max_ray_count: usize,
}

impl BatchConfig {
    /// The default number of rays of a batch.
    pub const DEFAULT_RAY_COUNT: usize = 1024;
    /// The default largest number of rays of a batch.
    pub const DEFAULT_MAX_RAY_COUNT: usize = 1 << 27;

    /// Sets the number of rays, clamped to `[1, max_ray_count]`.
    pub fn with_ray_count(mut self, count: usize) -> Self {
        self.ray_count = self.clamped(count);
        self
    }

    /// Sets the largest number of rays, clamping the current count to it.
    pub fn with_max_ray_count(mut self, max: usize) -> Self {
        self.max_ray_count = max.max(1);
        self.ray_count = self.clamped(self.ray_count);
        self
    }

    /// Doubles the number of rays, up to `max_ray_count`. Returns the new count.
    pub fn double_ray_count(&mut self) -> usize {
        self.ray_count = self.clamped(self.ray_count.saturating_mul(2));
        self.ray_count
    }

    /// Halves the number of rays, down to 1. Returns the new count.
    pub fn halve_ray_count(&mut self) -> usize {
        self.ray_count = self.clamped(self.ray_count / 2);
        self.ray_count
    }

    fn clamped(&self, count: usize) -> usize {
        let clamped = count.clamp(1, self.max_ray_count.max(1));

        if clamped != count {
            log::warn!("Clamping the ray count {} to {}.", count, clamped);
        }

        clamped
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            ray_count: Self::DEFAULT_RAY_COUNT,
            max_ray_count: Self::DEFAULT_MAX_RAY_COUNT,
        }
    }
}

#[cfg(test)]
mod test {
    use super::BatchConfig;

    #[test]
    fn ray_count_stays_in_range() {
        let mut config = BatchConfig::default().with_max_ray_count(4096);
        assert_eq!(config.ray_count, 1024);
        assert_eq!(config.double_ray_count(), 2048);
        assert_eq!(config.double_ray_count(), 4096);
        assert_eq!(config.double_ray_count(), 4096);

        let mut config = BatchConfig::default().with_ray_count(3);
        assert_eq!(config.halve_ray_count(), 1);
        assert_eq!(config.halve_ray_count(), 1);
        assert_eq!(BatchConfig::default().with_ray_count(0).ray_count, 1);
        assert_eq!(BatchConfig::default().with_max_ray_count(10).ray_count, 10);
    }
}
