//! API options for the determinant engine.
//!
//! This module provides the `DetOptions` struct, which bounds the size of
//! expansion plans the cache is allowed to build and selects when the
//! evaluator fans the top-level terms out over Rayon.

/// Determinant engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetOptions {
    /// Largest matrix order a plan may be built for (plans grow as N!)
    pub max_order: usize,

    /// Smallest order evaluated in parallel (only with the `rayon` feature)
    pub parallel_threshold: usize,
}

impl DetOptions {
    /// Default options: plans up to order 8, parallel evaluation from order 6.
    pub fn new() -> Self {
        Self {
            max_order: 8,
            parallel_threshold: 6,
        }
    }

    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}

impl Default for DetOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let opts = DetOptions::default()
            .with_max_order(10)
            .with_parallel_threshold(3);
        assert_eq!(opts.max_order, 10);
        assert_eq!(opts.parallel_threshold, 3);
        assert_eq!(DetOptions::new(), DetOptions::default());
    }
}
