//! Farey-diagram helpers.
//!
//! Vertices are reduced fractions p/q (with `1/0` at infinity); two vertices span an
//! edge iff `|p1 q2 - p2 q1| = 1`. Convergents come from the matrix product
//! `∏ [[a_i, 1], [1, 0]]`, whose first column is `(p_n, q_n)`.

use nalgebra::Matrix2;
use num_rational::Rational64;

use super::types::PathCoordinates;

/// `∏ [[a_i, 1], [1, 0]]` over `terms`; the identity (vertex `1/0`) for no terms.
pub fn convergent_matrix(terms: &[i64]) -> Matrix2<i64> {
    terms
        .iter()
        .fold(Matrix2::identity(), |acc, &a| acc * Matrix2::new(a, 1, 1, 0))
}

/// Convergent `p_n / q_n` of `terms`, or `None` at the vertex `1/0`.
pub fn convergent(terms: &[i64]) -> Option<Rational64> {
    let m = convergent_matrix(terms);
    let (p, q) = (m[(0, 0)], m[(1, 0)]);
    (q != 0).then(|| Rational64::new(p, q))
}

/// `p1 q2 - p2 q1` for `x = p1/q1`, `y = p2/q2` in lowest terms.
#[inline]
pub fn farey_determinant(x: Rational64, y: Rational64) -> i64 {
    x.numer() * y.denom() - y.numer() * x.denom()
}

#[inline]
pub fn are_farey_neighbours(x: Rational64, y: Rational64) -> bool {
    farey_determinant(x, y).abs() == 1
}

/// True if `1/0` followed by `coords` walks along edges of the Farey diagram.
///
/// Only full-resolution paths (`all_prefixes`) qualify; the sampled `path_prefixes`
/// skip vertices.
pub fn is_edge_path(coords: &PathCoordinates) -> bool {
    let pts = coords.points();
    let Some(first) = pts.first() else {
        return true;
    };
    // det(1/0, p/q) = q
    if *first.denom() != 1 {
        return false;
    }
    pts.windows(2).all(|w| are_farey_neighbours(w[0], w[1]))
}
