//! Streams of valid link specifications for sweeps, benchmarks and tests.
//!
//! - `enumerate_links`: every valid `(alpha, beta)` with `beta <= max_beta`, ordered by
//!   beta then alpha.
//! - `random_link`: seeded draw; beta uniform over the even values in range, alpha
//!   uniform over the units mod beta below it.

use num_integer::Integer;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::GenusError;
use crate::link::RationalLinkSpec;

/// All `(alpha, beta)` with `0 < alpha < beta <= max_beta`, beta even, coprime.
pub fn enumerate_links(max_beta: i64) -> impl Iterator<Item = (i64, i64)> {
    (2..=max_beta)
        .step_by(2)
        .flat_map(|beta| (1..beta).filter(move |a| a.gcd(&beta) == 1).map(move |a| (a, beta)))
}

/// Random valid spec with `beta <= max_beta` and `mu` in `0..=max_mu`.
pub fn random_link<R: Rng + ?Sized>(
    rng: &mut R,
    max_beta: i64,
    max_mu: i64,
) -> Result<RationalLinkSpec, GenusError> {
    if max_beta < 2 {
        return Err(GenusError::invalid(format!(
            "max_beta must be >= 2, got {max_beta}"
        )));
    }
    if max_mu < 0 {
        return Err(GenusError::invalid(format!("max_mu must be >= 0, got {max_mu}")));
    }
    let beta = 2 * rng.gen_range(1..=max_beta / 2);
    let alpha = (1..beta)
        .filter(|a| a.gcd(&beta) == 1)
        .choose(rng)
        .unwrap_or(1);
    let mu = rng.gen_range(0..=max_mu);
    RationalLinkSpec::new(alpha, beta, mu)
}
