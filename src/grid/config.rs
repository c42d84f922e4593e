use super::*;

/// Configuration for grid mutation and aggregation.
///
/// # Example
/// ```
/// use lightgrid::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.enable_parallel, false);
/// assert_eq!(config.parallel_threshold, 65_536);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Run range mutations and sums on the rayon pool (default: false)
    pub enable_parallel: bool,
    /// Minimum number of touched cells before going parallel (default: 65536)
    pub parallel_threshold: usize,
}

impl GridConfig {
    /// Creates a new `GridConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use lightgrid::GridConfig;
    ///
    /// let config = GridConfig::new(true, 0);
    /// assert_eq!(config.enable_parallel, true);
    /// assert_eq!(config.parallel_threshold, 1);
    /// ```
    pub fn new(enable_parallel: bool, parallel_threshold: usize) -> Self {
        Self {
            enable_parallel,
            parallel_threshold: parallel_threshold.max(1),
        }
    }

    /// Whether an operation touching `cells` cells should use rayon.
    pub(crate) fn runs_parallel(&self, cells: usize) -> bool {
        self.enable_parallel && cells >= self.parallel_threshold
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::new(false, DEFAULT_PARALLEL_THRESHOLD)
    }
}
