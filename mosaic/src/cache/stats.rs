//! Cache statistics tracking.

/// Counters kept by every glyph cache backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub write_failures: u64,
    pub clears: u64,
    pub size_bytes: usize,
    pub entry_count: usize,
}

impl CacheStats {
    /// Create a zeroed statistics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_write_failure(&mut self) {
        self.write_failures += 1;
    }

    pub fn record_clear(&mut self) {
        self.clears += 1;
        self.size_bytes = 0;
        self.entry_count = 0;
    }

    /// Update the current size snapshot.
    pub fn update_size(&mut self, size_bytes: usize, entry_count: usize) {
        self.size_bytes = size_bytes;
        self.entry_count = entry_count;
    }

    /// Hit rate between 0.0 and 1.0.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(CacheStats::new().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_resets_size_but_not_counters() {
        let mut stats = CacheStats::new();
        stats.record_write();
        stats.update_size(100, 2);
        stats.record_clear();

        assert_eq!(stats.size_bytes, 0);
        assert_eq!(stats.entry_count, 0);
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.clears, 1);
    }
}
