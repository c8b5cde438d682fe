//! Continued-fraction value types.
//!
//! - `ContinuedFraction`: non-empty term list `[a0, a1, ..., an]` with exact evaluation.
//! - `EvenContinuedFraction`: same, with every term at position >= 1 even.

use num_rational::Rational64;
use std::fmt;

use super::even::even_expansion;
use crate::error::GenusError;

/// Formal continued fraction `a0 + 1/(a1 + 1/(a2 + ...))`.
///
/// Immutable once built; a0 may be any integer, a1..an are the partial quotients.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContinuedFraction {
    terms: Vec<i64>,
}

impl ContinuedFraction {
    pub fn new(terms: Vec<i64>) -> Result<Self, GenusError> {
        if terms.is_empty() {
            return Err(GenusError::EmptyTerms);
        }
        Ok(Self { terms })
    }

    /// Crate-internal constructor for term lists derived from a non-empty fraction.
    pub(crate) fn from_nonempty(terms: Vec<i64>) -> Self {
        debug_assert!(!terms.is_empty(), "continued fraction needs a constant term");
        Self { terms }
    }

    #[inline]
    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// False for every constructed fraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn constant(&self) -> i64 {
        self.terms[0]
    }

    #[inline]
    pub fn partial_quotients(&self) -> &[i64] {
        &self.terms[1..]
    }

    /// Exact value of the whole fraction.
    pub fn value(&self) -> Result<Rational64, GenusError> {
        self.value_upto(None)
    }

    /// Exact value of the prefix `terms[0..=upto]` (clamped to the last index).
    ///
    /// Trailing zeros are skipped two positions at a time: expanded paths interleave
    /// `0` separators, and a zero there is a placeholder, not a partial quotient.
    /// If the skip runs past position 1 it stops at the constant term.
    pub fn value_upto(&self, upto: Option<usize>) -> Result<Rational64, GenusError> {
        let last = self.terms.len() - 1;
        let mut k = match upto {
            Some(t) if t < last => t,
            _ => last,
        };
        while k > 0 && self.terms[k] == 0 {
            k = k.saturating_sub(2);
        }
        if k == 0 {
            return Ok(Rational64::from_integer(self.terms[0]));
        }

        let mut frac = Rational64::new(1, self.terms[k]);
        for (offset, &t) in self.terms[1..k].iter().enumerate().rev() {
            let denom = frac + t;
            if *denom.numer() == 0 {
                return Err(GenusError::DivisionByZero {
                    position: offset + 1,
                });
            }
            frac = denom.recip();
        }
        Ok(frac + self.terms[0])
    }
}

impl fmt::Display for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{t}")?;
        }
        write!(f, "]")
    }
}

/// Continued fraction whose partial quotients are all even.
///
/// The even form is what makes the edge-path alternate between D-blocks and single
/// A-steps; construction is the only place the invariant is checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvenContinuedFraction(ContinuedFraction);

impl EvenContinuedFraction {
    pub fn new(cf: ContinuedFraction) -> Result<Self, GenusError> {
        if let Some(pos) = cf.partial_quotients().iter().position(|t| t % 2 != 0) {
            return Err(GenusError::invalid(format!(
                "term {} at position {} of {cf} is odd",
                cf.terms()[pos + 1],
                pos + 1
            )));
        }
        Ok(Self(cf))
    }

    /// Even expansion of `a/b`; fails if `a/b` has none (e.g. odd denominator).
    pub fn from_ratio(a: i64, b: i64) -> Result<Self, GenusError> {
        Self::new(even_expansion(a, b)?)
    }

    #[inline]
    pub fn cf(&self) -> &ContinuedFraction {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with the constant term replaced. Evenness only concerns positions >= 1.
    pub fn with_constant(&self, a0: i64) -> Self {
        let mut terms = self.0.terms.clone();
        terms[0] = a0;
        Self(ContinuedFraction { terms })
    }

    /// Terms at positions 1, 3, 5, ... (the D-slots of the edge-path).
    pub fn block_terms(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.terms.iter().skip(1).step_by(2).copied()
    }
}

impl fmt::Display for EvenContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
