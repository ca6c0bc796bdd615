//! Configuration options for HTML rendering

/// Default bound on tree depth
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Deepest tree the renderer descends into before failing with
    /// [`RenderError::DepthLimitExceeded`](crate::RenderError::DepthLimitExceeded).
    /// `None` disables the bound, leaving the call stack as the only limit.
    pub max_depth: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl Options {
    /// Options with no depth bound
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
