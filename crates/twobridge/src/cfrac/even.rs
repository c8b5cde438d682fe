//! Even continued-fraction expansion of a rational `a/b`.
//!
//! Classical sign-aware division: after normalizing `b > 0`,
//! - `b == 1` ends with the term `a`;
//! - `-b < a < b` emits `0` and swaps to `b/a`;
//! - otherwise `a = q b + r` with `0 <= r < b`; an even `q` continues on `b/r`,
//!   an odd `q` emits `q + 1` and continues on `-b/(b - r)`.
//!
//! The recursion is unrolled into a loop with a step budget so malformed input
//! (non-coprime pairs reach a zero denominator) fails instead of spinning.

use num_integer::Integer;

use super::cfg::EvenCfCfg;
use super::types::ContinuedFraction;
use crate::error::GenusError;

/// Even expansion of `a/b` with the budget derived from `b`.
pub fn even_expansion(a: i64, b: i64) -> Result<ContinuedFraction, GenusError> {
    even_expansion_with(a, b, EvenCfCfg::default())
}

/// Even expansion of `a/b`.
///
/// Pre: `b != 0`. For `0 < a < b`, `b` even and `gcd(a, b) = 1` every emitted term
/// after the first is even; other inputs may produce odd terms, which
/// `EvenContinuedFraction::new` rejects.
pub fn even_expansion_with(
    a: i64,
    b: i64,
    cfg: EvenCfCfg,
) -> Result<ContinuedFraction, GenusError> {
    let limit = cfg.budget(b);
    let (mut a, mut b) = (a, b);
    let mut terms = Vec::new();
    for _ in 0..limit {
        if b < 0 {
            a = -a;
            b = -b;
        }
        if b == 0 {
            return Err(GenusError::DivisionByZero {
                position: terms.len(),
            });
        }
        if b == 1 {
            terms.push(a);
            return ContinuedFraction::new(terms);
        }
        if b > a && a > -b {
            terms.push(0);
            (a, b) = (b, a);
            continue;
        }
        let (q, r) = a.div_mod_floor(&b);
        if q.is_even() {
            terms.push(q);
            (a, b) = (b, r);
        } else {
            terms.push(q + 1);
            (a, b) = (-b, b - r);
        }
    }
    Err(GenusError::DepthExceeded { limit })
}
