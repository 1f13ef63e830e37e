use thiserror::Error;

/// A constrained wrapper was configured with parameters it can never satisfy.
///
/// These are reported when the wrapper is built. Writes never fail: an out-of-contract value is
/// normalized instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("lower bound is greater than upper bound, or the bounds can not be compared")]
    InvertedRange,

    #[error("max length must be a non-negative integer that fits in usize, got {0}")]
    InvalidMaxLength(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_offending_input() {
        let msg = ConstraintError::InvalidMaxLength("-1".to_string()).to_string();
        assert!(msg.contains("-1"));

        let msg = ConstraintError::InvalidPattern("unclosed group".to_string()).to_string();
        assert!(msg.starts_with("invalid pattern"));
    }
}
