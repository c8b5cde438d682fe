//! 2-bridge link specifications and the invariants read off their even expansion.

use num_integer::Integer;
use std::fmt;

use crate::cfrac::EvenContinuedFraction;
use crate::error::GenusError;

/// Query triple: link `alpha/beta` and the meridional parameter `mu`.
///
/// Invariant (checked by `new`): `0 < alpha < beta`, `beta` even,
/// `gcd(alpha, beta) = 1`, `mu >= 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RationalLinkSpec {
    alpha: i64,
    beta: i64,
    mu: i64,
}

impl RationalLinkSpec {
    pub fn new(alpha: i64, beta: i64, mu: i64) -> Result<Self, GenusError> {
        validate_link(alpha, beta)?;
        if mu < 0 {
            return Err(GenusError::invalid(format!("mu must be >= 0, got {mu}")));
        }
        Ok(Self { alpha, beta, mu })
    }

    #[inline]
    pub fn alpha(&self) -> i64 {
        self.alpha
    }

    #[inline]
    pub fn beta(&self) -> i64 {
        self.beta
    }

    #[inline]
    pub fn mu(&self) -> i64 {
        self.mu
    }
}

impl fmt::Display for RationalLinkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (mu = {})", self.alpha, self.beta, self.mu)
    }
}

/// Check the (alpha, beta) half of the preconditions.
pub fn validate_link(alpha: i64, beta: i64) -> Result<(), GenusError> {
    if !(0 < alpha && alpha < beta) {
        return Err(GenusError::invalid(format!(
            "need 0 < alpha < beta, got alpha = {alpha}, beta = {beta}"
        )));
    }
    if beta.is_odd() {
        return Err(GenusError::invalid(format!("beta must be even, got {beta}")));
    }
    if alpha.gcd(&beta) != 1 {
        return Err(GenusError::invalid(format!(
            "alpha and beta must be coprime, gcd({alpha}, {beta}) = {}",
            alpha.gcd(&beta)
        )));
    }
    Ok(())
}

/// Linking and wrapping numbers of the two components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinkInvariants {
    /// Half the sum of the block terms.
    pub linking: i64,
    /// Half the sum of their absolute values.
    pub wrapping: i64,
}

impl LinkInvariants {
    pub fn from_even(cf: &EvenContinuedFraction) -> Self {
        let (sum, abs_sum) = cf
            .block_terms()
            .fold((0, 0), |(s, a), t| (s + t, a + t.abs()));
        Self {
            linking: sum / 2,
            wrapping: abs_sum / 2,
        }
    }

    /// Boundary parameter `n = gcd(mu, linking)`, never negative.
    #[inline]
    pub fn boundary_parameter(&self, mu: i64) -> i64 {
        mu.gcd(&self.linking)
    }
}
