/// The direction used by `Sequence::sort`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Tuning knobs for the hybrid quick/insertion sort.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortConfig {
    insertion_threshold: usize,
}

impl SortConfig {
    pub const DEFAULT_INSERTION_THRESHOLD: usize = 10;

    pub const fn new() -> Self {
        return Self {
            insertion_threshold: Self::DEFAULT_INSERTION_THRESHOLD,
        };
    }

    /// Ranges holding fewer elements than `threshold` are insertion sorted
    /// instead of partitioned.
    pub const fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        return self;
    }

    #[inline]
    pub const fn insertion_threshold(&self) -> usize {
        return self.insertion_threshold;
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        return Self::new();
    }
}
