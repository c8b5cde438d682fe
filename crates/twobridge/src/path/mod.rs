//! Edge-paths in the Farey diagram read off an even continued fraction.
//!
//! - `expand`: block form, one unit step per `±2`.
//! - `path_prefixes` / `all_prefixes`: exact vertex coordinates along the path.
//! - `word` / `euler_number`: the A/D word and the Euler number it determines.
//! - `farey`: neighbour checks and matrix convergents for cross-checking coordinates.

mod expand;
pub mod farey;
mod types;

pub use expand::{all_prefixes, euler_number, expand, path_prefixes, word};
pub use types::{Edge, EdgePathWord, ExpandedPath, PathCoordinates};
