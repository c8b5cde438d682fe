//! Case analysis over mu and the genus / slope formulas.
//!
//! Each regime is a pure function of the two even expansions, mu, the link
//! invariants and the boundary parameter `n = gcd(mu, linking)`:
//! - mu = 0: one D-type surface iff linking = 0, genus wrapping/2, one boundary.
//! - mu = 1: two A-type surfaces, genus (len - 2)/2, slopes (0, 0), two boundaries.
//! - mu > 1: AB-type surfaces for expansions passing `admits_ab`, genus
//!   (len - 4)(n + 1)/4 + 1; two AD-type surfaces with genus (2 - n - euler)/2.

use num_rational::Rational64;

use super::types::{PathInfo, Regime, SurfaceKind, SurfaceRecord, SurfaceReport};
use crate::cfrac::EvenContinuedFraction;
use crate::error::GenusError;
use crate::link::{LinkInvariants, RationalLinkSpec};
use crate::path::{all_prefixes, euler_number, path_prefixes, word, Edge, EdgePathWord};

const ABBA: [Edge; 4] = [Edge::A, Edge::B, Edge::B, Edge::A];

/// Surfaces for the link `alpha/beta` with parameter `mu`.
///
/// Invalid triples fail with `InvalidSpecification` before anything is computed;
/// an empty list means no surface exists in this regime.
pub fn compute_surfaces(alpha: i64, beta: i64, mu: i64) -> Result<Vec<SurfaceRecord>, GenusError> {
    let spec = RationalLinkSpec::new(alpha, beta, mu)?;
    Ok(SurfaceReport::compute(spec)?.surfaces)
}

/// Inputs shared by all regimes.
struct Context<'a> {
    even: &'a EvenContinuedFraction,
    one_even: &'a EvenContinuedFraction,
    mu: i64,
    invariants: LinkInvariants,
    n: i64,
}

impl SurfaceReport {
    pub fn compute(spec: RationalLinkSpec) -> Result<Self, GenusError> {
        let (alpha, beta, mu) = (spec.alpha(), spec.beta(), spec.mu());
        let even = EvenContinuedFraction::from_ratio(alpha, beta)?;
        let one_even = EvenContinuedFraction::from_ratio(alpha - beta, beta)?.with_constant(1);
        tracing::debug!(%spec, %even, %one_even, "even expansions");

        let invariants = LinkInvariants::from_even(&even);
        let n = invariants.boundary_parameter(mu);
        let word_even = word(even.cf());
        let word_one_even = word(one_even.cf());
        let euler_even = euler_number(&word_even, mu)?;
        let euler_one_even = euler_number(&word_one_even, mu)?;
        tracing::debug!(
            linking = invariants.linking,
            wrapping = invariants.wrapping,
            n,
            euler_even,
            euler_one_even,
            "invariants"
        );

        let regime = Regime::of(mu);
        let ctx = Context {
            even: &even,
            one_even: &one_even,
            mu,
            invariants,
            n,
        };
        let surfaces = match regime {
            Regime::Zero => classify_zero(&ctx)?,
            Regime::One => classify_one(&ctx)?,
            Regime::Many => classify_many(&ctx, euler_even, euler_one_even)?,
        };
        tracing::debug!(?regime, count = surfaces.len(), "classified");

        Ok(Self {
            spec,
            regime,
            even,
            one_even,
            invariants,
            boundary_parameter: n,
            word_even,
            word_one_even,
            euler_even,
            euler_one_even,
            surfaces,
        })
    }
}

/// AB-type admissibility: more than three terms and every partial quotient of
/// magnitude above 2. A `±2` term means the path is disconnected or not minimal.
pub fn admits_ab(cf: &EvenContinuedFraction) -> bool {
    cf.len() > 3 && cf.cf().partial_quotients().iter().all(|t| t.abs() > 2)
}

fn classify_zero(ctx: &Context<'_>) -> Result<Vec<SurfaceRecord>, GenusError> {
    if ctx.invariants.linking != 0 {
        return Ok(Vec::new());
    }
    let path = path_prefixes(ctx.even.cf())?;
    Ok(vec![SurfaceRecord {
        name: "F",
        kind: SurfaceKind::D,
        genus: Rational64::new(ctx.invariants.wrapping, 2),
        slope1: Rational64::from_integer(0),
        slope2: None,
        boundary_components: 1,
        path: PathInfo {
            t: Rational64::from_integer(0),
            word: EdgePathWord::repeated(&[Edge::D], path.len()),
            path,
        },
    }])
}

fn classify_one(ctx: &Context<'_>) -> Result<Vec<SurfaceRecord>, GenusError> {
    [("F_1", ctx.even), ("F_2", ctx.one_even)]
        .into_iter()
        .map(|(name, cf)| -> Result<SurfaceRecord, GenusError> {
            Ok(SurfaceRecord {
                name,
                kind: SurfaceKind::A,
                genus: Rational64::new(cf.len() as i64 - 2, 2),
                slope1: Rational64::from_integer(0),
                slope2: Some(Rational64::from_integer(0)),
                boundary_components: 2,
                path: PathInfo {
                    t: Rational64::from_integer(1),
                    word: EdgePathWord::repeated(&[Edge::A], cf.len()),
                    path: all_prefixes(cf.cf())?,
                },
            })
        })
        .collect()
}

fn classify_many(
    ctx: &Context<'_>,
    euler_even: i64,
    euler_one_even: i64,
) -> Result<Vec<SurfaceRecord>, GenusError> {
    let (mu, n, linking) = (ctx.mu, ctx.n, ctx.invariants.linking);
    let t = Rational64::new(1, mu);
    let boundary_components = n.checked_add(1).ok_or(GenusError::overflow("boundary count"))?;
    let slope2 = linking
        .checked_mul(mu)
        .map(Rational64::from_integer)
        .ok_or(GenusError::overflow("slope"))?;
    let mut out = Vec::with_capacity(4);

    for (name, cf) in [("F_1", ctx.even), ("F_2", ctx.one_even)] {
        if !admits_ab(cf) {
            continue;
        }
        // (len - 4)(n + 1)/4 + 1 as a single fraction over 4.
        let genus_numer = (cf.len() as i64 - 4)
            .checked_mul(boundary_components)
            .and_then(|x| x.checked_add(4))
            .ok_or(GenusError::overflow("AB genus"))?;
        out.push(SurfaceRecord {
            name,
            kind: SurfaceKind::AB,
            genus: Rational64::new(genus_numer, 4),
            slope1: Rational64::from_integer(0),
            slope2: Some(Rational64::from_integer(0)),
            boundary_components,
            path: PathInfo {
                t,
                word: EdgePathWord::repeated(&ABBA, (cf.len() - 2) / 2),
                path: all_prefixes(cf.cf())?,
            },
        });
    }

    // The even-form surface carries the negated linking slope.
    let ad = [
        ("F_1", ctx.even, euler_even, Rational64::new(-linking, mu)),
        ("F_2", ctx.one_even, euler_one_even, Rational64::new(linking, mu)),
    ];
    for (name, cf, euler, slope1) in ad {
        let genus_numer = 2i64
            .checked_sub(n)
            .and_then(|x| x.checked_sub(euler))
            .ok_or(GenusError::overflow("AD genus"))?;
        out.push(SurfaceRecord {
            name,
            kind: SurfaceKind::AD,
            genus: Rational64::new(genus_numer, 2),
            slope1,
            slope2: Some(slope2),
            boundary_components,
            path: PathInfo {
                t,
                word: word(cf.cf()),
                path: all_prefixes(cf.cf())?,
            },
        });
    }
    Ok(out)
}
