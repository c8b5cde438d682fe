//! Path data: expanded term lists, vertex coordinates, and edge words.

use num_rational::Rational64;
use std::fmt;
use std::str::FromStr;

use crate::cfrac::ContinuedFraction;
use crate::error::GenusError;

/// Continued fraction with every block term `2k` unrolled into `|k|` unit steps
/// separated by `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandedPath(pub(crate) ContinuedFraction);

impl ExpandedPath {
    #[inline]
    pub fn cf(&self) -> &ContinuedFraction {
        &self.0
    }

    #[inline]
    pub fn terms(&self) -> &[i64] {
        self.0.terms()
    }
}

/// Vertices visited by an edge-path in the Farey diagram (the `1/0` anchor is implicit).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PathCoordinates(pub(crate) Vec<Rational64>);

impl PathCoordinates {
    #[inline]
    pub fn points(&self) -> &[Rational64] {
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

    pub fn iter(&self) -> impl Iterator<Item = &Rational64> {
        self.0.iter()
    }
}

/// Edge labels. `word` only emits A (diagonal) and D (directed); B appears in the
/// AB-type words attached to surface records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    A,
    B,
    D,
}

impl Edge {
    pub fn as_char(self) -> char {
        match self {
            Edge::A => 'A',
            Edge::B => 'B',
            Edge::D => 'D',
        }
    }
}

/// Word over the edge alphabet describing an edge-path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct EdgePathWord(Vec<Edge>);

impl EdgePathWord {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self(edges)
    }

    /// `pattern` concatenated `times` times.
    pub fn repeated(pattern: &[Edge], times: usize) -> Self {
        Self(pattern.repeat(times))
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
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

    pub fn count(&self, edge: Edge) -> usize {
        self.0.iter().filter(|&&e| e == edge).count()
    }
}

impl fmt::Display for EdgePathWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.0 {
            write!(f, "{}", e.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for EdgePathWord {
    type Err = GenusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                'A' => Ok(Edge::A),
                'B' => Ok(Edge::B),
                'D' => Ok(Edge::D),
                other => Err(GenusError::invalid(format!("unknown edge letter {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
