use super::*;
use crate::cfrac::EvenContinuedFraction;
use crate::error::GenusError;
use crate::link::RationalLinkSpec;
use crate::path::farey::is_edge_path;
use num_integer::Integer;
use num_rational::Rational64;
use proptest::prelude::*;

fn r(p: i64, q: i64) -> Rational64 {
    Rational64::new(p, q)
}

fn report(alpha: i64, beta: i64, mu: i64) -> SurfaceReport {
    SurfaceReport::compute(RationalLinkSpec::new(alpha, beta, mu).unwrap()).unwrap()
}

#[test]
fn mu_one_half_link() {
    let rep = report(1, 2, 1);
    assert_eq!(rep.regime, Regime::One);
    assert_eq!(rep.even.cf().terms(), &[0, 2]);
    assert_eq!(rep.one_even.cf().terms(), &[1, -2]);
    assert_eq!(rep.word_even.to_string(), "ADA");
    let s = &rep.surfaces;
    assert_eq!(s.len(), 2);
    for (rec, name) in s.iter().zip(["F_1", "F_2"]) {
        assert_eq!(rec.name, name);
        assert_eq!(rec.kind, SurfaceKind::A);
        assert_eq!(rec.genus, r(0, 1));
        assert_eq!((rec.slope1, rec.slope2), (r(0, 1), Some(r(0, 1))));
        assert_eq!(rec.boundary_components, 2);
        assert_eq!(rec.path.t, r(1, 1));
        assert_eq!(rec.path.word.to_string(), "AA");
    }
    assert_eq!(s[0].path.path.points(), &[r(0, 1), r(1, 2)]);
    assert_eq!(s[1].path.path.points(), &[r(1, 1), r(1, 2)]);
}

#[test]
fn mu_one_genus_follows_length() {
    let rep = report(3, 8, 1);
    let genera: Vec<_> = rep.surfaces.iter().map(|s| s.genus).collect();
    assert_eq!(genera, vec![r(1, 1), r(1, 1)]);
    let rep = report(1, 4, 1);
    let genera: Vec<_> = rep.surfaces.iter().map(|s| s.genus).collect();
    assert_eq!(genera, vec![r(0, 1), r(1, 1)]);
}

#[test]
fn mu_zero_with_zero_linking() {
    let rep = report(3, 8, 0);
    assert_eq!(rep.even.cf().terms(), &[0, 2, 2, -2]);
    assert_eq!(rep.invariants.linking, 0);
    assert_eq!(rep.invariants.wrapping, 2);
    assert_eq!(rep.surfaces.len(), 1);
    let f = &rep.surfaces[0];
    assert_eq!(f.name, "F");
    assert_eq!(f.kind, SurfaceKind::D);
    assert_eq!(f.genus, r(1, 1));
    assert_eq!((f.slope1, f.slope2), (r(0, 1), None));
    assert_eq!(f.boundary_components, 1);
    assert_eq!(f.path.t, r(0, 1));
    assert_eq!(f.path.word.to_string(), "DD");
    assert_eq!(f.path.path.points(), &[r(1, 2), r(3, 8)]);
}

#[test]
fn mu_zero_with_nonzero_linking_has_no_surface() {
    let rep = report(1, 4, 0);
    assert_eq!(rep.invariants.linking, 2);
    assert!(rep.surfaces.is_empty());
    assert!(compute_surfaces(5, 16, 0).unwrap().is_empty());
}

#[test]
fn mu_three_quarter_link_ad_only() {
    let rep = report(1, 4, 3);
    assert_eq!(rep.boundary_parameter, 1);
    assert!(!admits_ab(&rep.even));
    assert!(!admits_ab(&rep.one_even));
    let s = &rep.surfaces;
    assert_eq!(s.len(), 2);
    assert!(s.iter().all(|x| x.kind == SurfaceKind::AD));
    assert_eq!(s[0].genus, r(3, 2));
    assert_eq!((s[0].slope1, s[0].slope2), (r(-2, 3), Some(r(6, 1))));
    assert_eq!(s[1].genus, r(5, 2));
    assert_eq!((s[1].slope1, s[1].slope2), (r(2, 3), Some(r(6, 1))));
    assert!(s.iter().all(|x| x.boundary_components == 2));
    assert_eq!(s[0].path.t, r(1, 3));
    assert_eq!(s[0].path.word.to_string(), "ADDA");
    assert_eq!(s[1].path.word.to_string(), "ADAADA");
}

#[test]
fn ab_surface_admitted_for_large_quotients() {
    let rep = report(15, 56, 3);
    assert_eq!(rep.even.cf().terms(), &[0, 4, -4, 4]);
    assert!(admits_ab(&rep.even));
    assert!(!admits_ab(&rep.one_even));
    let kinds: Vec<_> = rep.surfaces.iter().map(|s| (s.kind, s.name)).collect();
    assert_eq!(
        kinds,
        vec![
            (SurfaceKind::AB, "F_1"),
            (SurfaceKind::AD, "F_1"),
            (SurfaceKind::AD, "F_2")
        ]
    );
    let ab = &rep.surfaces[0];
    assert_eq!(ab.genus, r(1, 1));
    assert_eq!(ab.boundary_components, 2);
    assert_eq!(ab.path.word.to_string(), "ABBA");
    assert_eq!(rep.surfaces[1].genus, r(9, 2));
    assert_eq!(rep.surfaces[2].genus, r(13, 2));
    assert_eq!(rep.surfaces[1].slope1, r(-4, 3));
    assert_eq!(rep.surfaces[1].slope2, Some(r(12, 1)));
}

#[test]
fn ab_surface_from_one_even_form() {
    let rep = report(41, 56, 3);
    assert_eq!(rep.even.cf().terms(), &[0, 2, -2, 2, 2, 2, -2, 2]);
    assert_eq!(rep.one_even.cf().terms(), &[1, -4, 4, -4]);
    assert!(!admits_ab(&rep.even));
    assert!(admits_ab(&rep.one_even));
    assert_eq!(rep.invariants.linking, 4);
    let kinds: Vec<_> = rep.surfaces.iter().map(|s| (s.kind, s.name)).collect();
    assert_eq!(
        kinds,
        vec![
            (SurfaceKind::AB, "F_2"),
            (SurfaceKind::AD, "F_1"),
            (SurfaceKind::AD, "F_2")
        ]
    );
    let ab = &rep.surfaces[0];
    assert_eq!(ab.genus, r(1, 1));
    assert_eq!(ab.boundary_components, 2);
    assert_eq!(ab.path.word.to_string(), "ABBA");
    assert_eq!(ab.path.path.points()[0], r(1, 1));
}

#[test]
fn ab_genus_scales_with_boundary() {
    let rep = report(17, 72, 2);
    assert_eq!(rep.boundary_parameter, 2);
    let ab = &rep.surfaces[0];
    assert_eq!(ab.kind, SurfaceKind::AB);
    assert_eq!(ab.genus, r(1, 1));
    assert_eq!(ab.boundary_components, 3);
    assert_eq!(rep.surfaces[1].genus, r(5, 2));
    assert_eq!(rep.surfaces[2].genus, r(9, 2));
}

#[test]
fn negative_linking_flips_slopes() {
    let rep = report(5, 14, 3);
    assert_eq!(rep.invariants.linking, -1);
    assert_eq!(rep.boundary_parameter, 1);
    let s = &rep.surfaces;
    assert_eq!((s[0].slope1, s[0].slope2), (r(1, 3), Some(r(-3, 1))));
    assert_eq!((s[1].slope1, s[1].slope2), (r(-1, 3), Some(r(-3, 1))));
    assert_eq!((s[0].genus, s[1].genus), (r(9, 2), r(7, 2)));
}

#[test]
fn zero_linking_uses_mu_as_boundary_parameter() {
    let rep = report(7, 16, 3);
    assert_eq!(rep.boundary_parameter, 3);
    assert!(rep.surfaces.iter().all(|s| s.boundary_components == 4));
    assert!(rep.surfaces.iter().all(|s| s.genus == r(3, 2)));
}

#[test]
fn long_one_even_expansion_is_not_cut_short() {
    // The one+even form of 1/beta has about beta terms.
    let rep = report(1, 8200, 0);
    assert!(rep.one_even.len() > 8000);
    assert_eq!(rep.one_even.cf().value().unwrap(), r(1, 8200));
    assert!(rep.surfaces.is_empty());
    assert_eq!(compute_surfaces(1, 10_000, 0), Ok(Vec::new()));
}

#[test]
fn huge_mu_overflows_into_an_error() {
    let err = compute_surfaces(1, 4, i64::MAX).unwrap_err();
    assert!(matches!(err, GenusError::Overflow { .. }));
    assert!(err.is_arithmetic());
}

#[test]
fn large_mu_within_range() {
    let mu = 1i64 << 40;
    let rep = report(1, 4, mu);
    assert_eq!(rep.boundary_parameter, 2);
    let f1 = &rep.surfaces[0];
    assert_eq!((f1.kind, f1.name), (SurfaceKind::AD, "F_1"));
    assert_eq!(f1.genus, r(mu - 1, 2));
    assert_eq!(f1.slope1, r(-2, mu));
    assert_eq!(f1.slope2, Some(r(2 * mu, 1)));
    assert_eq!(f1.boundary_components, 3);
}

#[test]
fn invalid_input_is_rejected_before_computing() {
    for (a, b, m) in [(2, 4, 1), (1, 3, 1), (4, 4, 2), (1, 4, -3)] {
        assert!(matches!(
            compute_surfaces(a, b, m),
            Err(GenusError::InvalidSpecification { .. })
        ));
    }
}

#[test]
fn repeated_calls_are_identical() {
    assert_eq!(compute_surfaces(11, 30, 4), compute_surfaces(11, 30, 4));
    assert_eq!(report(15, 56, 5), report(15, 56, 5));
}

#[test]
fn admits_ab_needs_length_and_magnitude() {
    let cf = |a, b| EvenContinuedFraction::from_ratio(a, b).unwrap();
    assert!(admits_ab(&cf(17, 64)));
    assert!(!admits_ab(&cf(3, 10)));
    assert!(!admits_ab(&cf(1, 6)));
}

proptest! {
    #[test]
    fn many_regime_invariants(beta_half in 1i64..200, alpha_seed in 0i64..10_000, mu in 2i64..12) {
        let beta = 2 * beta_half;
        let alpha = 1 + alpha_seed % (beta - 1);
        prop_assume!(alpha.gcd(&beta) == 1);
        let rep = report(alpha, beta, mu);
        let n = mu.gcd(&rep.invariants.linking);
        prop_assert_eq!(rep.boundary_parameter, n);
        let ad = rep.surfaces.iter().filter(|s| s.kind == SurfaceKind::AD).count();
        prop_assert_eq!(ad, 2);
        prop_assert!(rep.surfaces.len() <= 4);
        for s in &rep.surfaces {
            prop_assert_eq!(s.boundary_components, n + 1);
            prop_assert_eq!(s.path.t, Rational64::new(1, mu));
            prop_assert!(is_edge_path(&s.path.path));
        }
    }

    #[test]
    fn low_regimes_shapes(beta_half in 1i64..200, alpha_seed in 0i64..10_000, mu in 0i64..2) {
        let beta = 2 * beta_half;
        let alpha = 1 + alpha_seed % (beta - 1);
        prop_assume!(alpha.gcd(&beta) == 1);
        let rep = report(alpha, beta, mu);
        if mu == 1 {
            prop_assert_eq!(rep.surfaces.len(), 2);
        } else {
            prop_assert_eq!(rep.surfaces.len(), usize::from(rep.invariants.linking == 0));
        }
    }
}
