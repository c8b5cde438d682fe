//! Decimal approximation mode: continued fraction of a real number by repeated
//! reciprocation. Not part of the genus pipeline.

use super::cfg::ApproxCfg;
use super::types::ContinuedFraction;
use crate::error::GenusError;

impl ContinuedFraction {
    /// Terms of `x` by truncating reciprocation, at most `cfg.max_terms` of them.
    ///
    /// Stops once the fractional remainder is not above `cfg.cutoff`, so negative
    /// inputs yield only their truncated integer part.
    pub fn from_real(x: f64, cfg: ApproxCfg) -> Result<Self, GenusError> {
        if !x.is_finite() {
            return Err(GenusError::invalid(format!("cannot expand non-finite {x}")));
        }
        let mut value = x;
        let mut whole = value.trunc();
        let mut terms = vec![whole as i64];
        while terms.len() < cfg.max_terms {
            value -= whole;
            if value <= cfg.cutoff {
                break;
            }
            value = value.recip();
            whole = value.trunc();
            terms.push(whole as i64);
        }
        ContinuedFraction::new(terms)
    }
}
