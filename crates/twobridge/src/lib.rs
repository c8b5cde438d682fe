//! Minimal-genus surfaces in 2-bridge link exteriors.
//!
//! For a link `alpha/beta` (beta even, coprime) and a parameter `mu`, compute the
//! surfaces with one longitudinal boundary component on the first component:
//! even continued fraction -> edge-path in the Farey diagram -> edge-path type
//! (D, A, AB, AD) -> genus, boundary count and boundary slopes.
//!
//! Layout
//! - `cfrac`: exact continued fractions and the even expansion.
//! - `path`: block expansion, path coordinates, edge words, Euler numbers.
//! - `link`: validated query triple and linking/wrapping numbers.
//! - `surface`: case analysis over mu and the result records.
//! - `sample`: enumeration and random draws of valid links.

pub mod cfrac;
pub mod error;
pub mod link;
pub mod path;
pub mod sample;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GenusError;
pub use surface::compute_surfaces;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfrac::{ContinuedFraction, EvenContinuedFraction};
    pub use crate::error::GenusError;
    pub use crate::link::{LinkInvariants, RationalLinkSpec};
    pub use crate::path::{EdgePathWord, PathCoordinates};
    pub use crate::surface::{
        compute_surfaces, PathInfo, Regime, SurfaceKind, SurfaceRecord, SurfaceReport,
    };
    pub use num_rational::Rational64;
}
