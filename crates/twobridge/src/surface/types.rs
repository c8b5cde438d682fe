//! Result records of the surface classification.

use num_rational::Rational64;
use std::fmt;

use crate::cfrac::EvenContinuedFraction;
use crate::link::{LinkInvariants, RationalLinkSpec};
use crate::path::{EdgePathWord, PathCoordinates};

/// The three mu-regimes of the classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// mu = 0: at most one D-type surface.
    Zero,
    /// mu = 1: two A-type surfaces.
    One,
    /// mu > 1: AB-type candidates plus two AD-type surfaces.
    Many,
}

impl Regime {
    pub fn of(mu: i64) -> Self {
        match mu {
            0 => Regime::Zero,
            1 => Regime::One,
            _ => Regime::Many,
        }
    }
}

/// Edge-path type that produced a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    D,
    A,
    AB,
    AD,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurfaceKind::D => "D",
            SurfaceKind::A => "A",
            SurfaceKind::AB => "AB",
            SurfaceKind::AD => "AD",
        };
        write!(f, "{s}-type")
    }
}

/// Edge-path behind a surface: diagram level `t`, word, and visited vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathInfo {
    pub t: Rational64,
    pub word: EdgePathWord,
    pub path: PathCoordinates,
}

/// One surface in the link exterior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceRecord {
    pub name: &'static str,
    pub kind: SurfaceKind,
    pub genus: Rational64,
    pub slope1: Rational64,
    /// `None` when the surface meets only one component.
    pub slope2: Option<Rational64>,
    pub boundary_components: i64,
    pub path: PathInfo,
}

/// Everything computed for one query; `surfaces` is the answer proper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceReport {
    pub spec: RationalLinkSpec,
    pub regime: Regime,
    pub even: EvenContinuedFraction,
    /// Even expansion of `(alpha - beta)/beta` with constant term 1.
    pub one_even: EvenContinuedFraction,
    pub invariants: LinkInvariants,
    /// `gcd(mu, linking)`.
    pub boundary_parameter: i64,
    pub word_even: EdgePathWord,
    pub word_one_even: EdgePathWord,
    pub euler_even: i64,
    pub euler_one_even: i64,
    pub surfaces: Vec<SurfaceRecord>,
}
