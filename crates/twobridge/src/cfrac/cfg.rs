//! Budget and tolerance defaults for continued-fraction construction.
//!
//! Policy
//! - Approximation defaults are fixed constants; the even builder's budget scales
//!   with the denominator unless a cap is given.

/// Term cap for the decimal approximation mode.
pub(crate) const APPROX_MAX_TERMS: usize = 15;
/// Remainders at or below this stop the decimal approximation.
pub(crate) const APPROX_CUTOFF: f64 = 1e-10;

/// Configuration for `even_expansion_with`.
///
/// `max_depth: None` derives the budget from the denominator (see `budget`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvenCfCfg {
    pub max_depth: Option<usize>,
}

impl EvenCfCfg {
    /// Step budget for expanding `a/b`: `max_depth` when set, else `2|b| + 4`.
    ///
    /// For coprime input `|b|` strictly decreases at least every second step,
    /// and expansions like `(1 - beta)/beta` take about `beta` steps.
    pub(crate) fn budget(&self, b: i64) -> usize {
        self.max_depth.unwrap_or_else(|| {
            usize::try_from(b.unsigned_abs())
                .unwrap_or(usize::MAX)
                .saturating_mul(2)
                .saturating_add(4)
        })
    }
}

/// Configuration for `ContinuedFraction::from_real`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxCfg {
    pub max_terms: usize,
    pub cutoff: f64,
}

impl Default for ApproxCfg {
    fn default() -> Self {
        Self {
            max_terms: APPROX_MAX_TERMS,
            cutoff: APPROX_CUTOFF,
        }
    }
}
