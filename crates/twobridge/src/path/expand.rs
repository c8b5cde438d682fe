//! Walks over a continued fraction: block expansion, prefix coordinates, edge word,
//! and the Euler number read off the word.
//!
//! Slots: position 0 is the constant term; from position 1 on, slots alternate
//! between block slots (1, 3, 5, ...) and single-step slots (2, 4, ...).

use num_rational::Rational64;

use super::types::{Edge, EdgePathWord, ExpandedPath, PathCoordinates};
use crate::cfrac::ContinuedFraction;
use crate::error::GenusError;

#[inline]
fn is_block_slot(offset: usize) -> bool {
    offset % 2 == 0
}

/// Replace each block term `2k` by `[2s, 0, 2s, ..., 0, 2s]` (`|k|` copies of `2s`,
/// `s = sgn(k)`); single-step terms are copied.
///
/// `|k|` is `term / 2` truncated toward zero, so a zero block term stays `[0]`.
pub fn expand(cf: &ContinuedFraction) -> ExpandedPath {
    let terms = cf.terms();
    let mut out = Vec::with_capacity(terms.len());
    out.push(terms[0]);
    for (offset, &term) in terms[1..].iter().enumerate() {
        if is_block_slot(offset) {
            let step = 2 * term.signum();
            out.push(step);
            for _ in 1..(term / 2).abs() {
                out.push(0);
                out.push(step);
            }
        } else {
            out.push(term);
        }
    }
    ExpandedPath(ContinuedFraction::from_nonempty(out))
}

/// Coordinates of the expanded path sampled at the end of every block step:
/// one value per prefix ending at an odd position of `expand(cf)`.
pub fn path_prefixes(cf: &ContinuedFraction) -> Result<PathCoordinates, GenusError> {
    let expanded = expand(cf);
    let ecf = expanded.cf();
    (1..ecf.len())
        .step_by(2)
        .map(|i| ecf.value_upto(Some(i)))
        .collect::<Result<Vec<_>, _>>()
        .map(PathCoordinates)
}

/// Coordinates of every prefix of `cf`, one per term.
pub fn all_prefixes(cf: &ContinuedFraction) -> Result<PathCoordinates, GenusError> {
    (0..cf.len())
        .map(|i| cf.value_upto(Some(i)))
        .collect::<Result<Vec<Rational64>, _>>()
        .map(PathCoordinates)
}

/// Edge word of `cf`: a leading A, `|term|/2` D's per non-zero block term, `AA` per
/// single-step slot, and a trailing A.
pub fn word(cf: &ContinuedFraction) -> EdgePathWord {
    let mut edges = vec![Edge::A];
    for (offset, &term) in cf.partial_quotients().iter().enumerate() {
        if is_block_slot(offset) {
            if term != 0 {
                let run = (term.abs() / 2) as usize;
                edges.extend(std::iter::repeat(Edge::D).take(run));
            }
        } else {
            edges.extend([Edge::A, Edge::A]);
        }
    }
    edges.push(Edge::A);
    EdgePathWord::new(edges)
}

/// Euler number of the surface carried by `word` (rho = 1): start at `mu + 1`,
/// subtract `mu - 1` per D and `1` per other letter.
///
/// Fails with `Overflow` when an intermediate value leaves `i64`.
pub fn euler_number(word: &EdgePathWord, mu: i64) -> Result<i64, GenusError> {
    let overflow = || GenusError::overflow("euler number");
    let per_d = mu.checked_sub(1).ok_or_else(overflow)?;
    let start = mu.checked_add(1).ok_or_else(overflow)?;
    word.edges().iter().try_fold(start, |euler, e| {
        let next = match e {
            Edge::D => euler.checked_sub(per_d),
            _ => euler.checked_sub(1),
        };
        next.ok_or_else(overflow)
    })
}
