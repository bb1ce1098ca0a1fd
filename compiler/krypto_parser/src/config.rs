/// Default ceiling on primitive cursor operations per parse.
pub const DEFAULT_MAX_OPERATIONS: usize = 1000;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Number of `peek`/`advance` calls after which the scan is aborted
    pub max_operations: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_operations: DEFAULT_MAX_OPERATIONS,
        }
    }
}

impl ParserConfig {
    pub fn with_max_operations(max_operations: usize) -> Self {
        Self { max_operations }
    }
}
