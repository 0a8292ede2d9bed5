//! Error types for argument bundles
//!
//! Arity and slot-type mismatches between bundles are compile-time errors.
//! The only runtime failure is building a fixed-arity bundle out of a
//! dynamically sized list of wrapped arguments.

use thiserror::Error;

/// Error raised when assembling argument bundles at runtime
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// The number of supplied arguments does not match the bundle's arity
    #[error("ArityMismatch: {bundle} takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Name of the target bundle type
        bundle: &'static str,
        /// Arity of the target bundle
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },
}

impl ArgsError {
    /// Create an arity mismatch error
    pub fn arity_mismatch(bundle: &'static str, expected: usize, actual: usize) -> Self {
        ArgsError::ArityMismatch {
            bundle,
            expected,
            actual,
        }
    }
}

/// Result type alias for bundle construction
pub type ArgsResult<T> = Result<T, ArgsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArgsError::arity_mismatch("Args2", 2, 3);
        assert_eq!(
            format!("{}", err),
            "ArityMismatch: Args2 takes 2 argument(s), got 3"
        );
    }
}
