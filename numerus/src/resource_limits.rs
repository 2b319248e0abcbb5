/// Resource limits that keep a single evaluation small and predictable
///
/// Real expressions are a handful of numerals; the defaults are generous
/// enough for anything a person would type.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum expression length in bytes
    /// Real usage: ~20 bytes, Limit: 4KB
    pub max_expression_bytes: usize,

    /// Maximum number of simultaneously open parentheses
    /// Real usage: ~2 levels, Limit: 64
    pub max_nesting_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expression_bytes: 4 * 1024, // 4 KB
            max_nesting_depth: 64,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
