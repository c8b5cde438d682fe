//! Surface classification for 2-bridge links.
//!
//! Purpose
//! - Turn a `RationalLinkSpec` into the minimal-genus surfaces with one longitudinal
//!   boundary component on the first link component, via the edge-path types
//!   (D, A, AB, AD) the even expansions admit.
//!
//! Pipeline: even expansions -> link invariants -> words and Euler numbers ->
//! per-regime records. Every step is pure; repeated calls give identical results.

mod classify;
mod types;

pub use classify::{admits_ab, compute_surfaces};
pub use types::{PathInfo, Regime, SurfaceKind, SurfaceRecord, SurfaceReport};

#[cfg(test)]
mod tests;
