//! Parser configuration.
//!
//! ```rust
//! use tyd::ParseOptions;
//!
//! let options = ParseOptions::new().with_max_depth(8);
//! assert_eq!(options.max_depth, 8);
//! ```

/// Default limit on table nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of tables open at once, the root not counted.
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
