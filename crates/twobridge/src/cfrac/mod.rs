//! Continued fractions: exact evaluation and the even expansion.
//!
//! Purpose
//! - `ContinuedFraction` is an explicit immutable value with a named evaluator
//!   (`value`, `value_upto`) instead of a list with conversion bolted on.
//! - `EvenContinuedFraction` carries the "positions >= 1 are even" invariant that
//!   the edge-path construction in `path` relies on.
//! - `even_expansion` is the sign-aware division algorithm producing that form.
//!
//! Arithmetic is exact (`Rational64`); no floating point enters the genus pipeline.
//! `ContinuedFraction::from_real` is a separate, approximate entry point.

mod approx;
pub mod cfg;
mod even;
mod types;

pub use cfg::{ApproxCfg, EvenCfCfg};
pub use even::{even_expansion, even_expansion_with};
pub use types::{ContinuedFraction, EvenContinuedFraction};
