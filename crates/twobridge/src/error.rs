//! Error type shared by the continued-fraction, path and surface modules.
//!
//! Two classes matter to callers:
//! - `InvalidSpecification`: the query itself is malformed; nothing was computed.
//! - arithmetic failures (`DivisionByZero`, `DepthExceeded`, `Overflow`): the
//!   pipeline hit a state it cannot represent. Fatal for that query only.
//!
//! "No surface exists" is not an error; it is an empty surface list.

use std::fmt;

/// Errors raised by the genus pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenusError {
    InvalidSpecification { reason: String },
    /// A continued fraction needs at least its constant term.
    EmptyTerms,
    /// Zero partial quotient (or zero denominator) at a position that is evaluated.
    DivisionByZero { position: usize },
    /// The even builder used up its step budget.
    DepthExceeded { limit: usize },
    /// An integer invariant left the `i64` range (huge `mu`).
    Overflow { quantity: &'static str },
}

impl GenusError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidSpecification {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(quantity: &'static str) -> Self {
        Self::Overflow { quantity }
    }

    /// True for the arithmetic-failure class.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::DepthExceeded { .. } | Self::Overflow { .. }
        )
    }
}

impl fmt::Display for GenusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpecification { reason } => write!(f, "invalid specification: {reason}"),
            Self::EmptyTerms => write!(f, "continued fraction has no terms"),
            Self::DivisionByZero { position } => {
                write!(f, "division by zero at continued-fraction position {position}")
            }
            Self::DepthExceeded { limit } => {
                write!(f, "even continued fraction did not terminate within {limit} steps")
            }
            Self::Overflow { quantity } => write!(f, "{quantity} overflows i64"),
        }
    }
}

impl std::error::Error for GenusError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_class() {
        assert!(GenusError::DivisionByZero { position: 2 }.is_arithmetic());
        assert!(GenusError::DepthExceeded { limit: 8 }.is_arithmetic());
        assert!(GenusError::overflow("euler number").is_arithmetic());
        assert!(!GenusError::invalid("beta odd").is_arithmetic());
        assert!(!GenusError::EmptyTerms.is_arithmetic());
    }

    #[test]
    fn display_mentions_reason() {
        let e = GenusError::invalid("beta must be even");
        assert_eq!(e.to_string(), "invalid specification: beta must be even");
        assert_eq!(
            GenusError::overflow("slope").to_string(),
            "slope overflows i64"
        );
    }
}
