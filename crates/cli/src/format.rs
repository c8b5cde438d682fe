//! Text and JSON rendering of surface reports.

use serde::Serialize;
use twobridge::link::RationalLinkSpec;
use twobridge::path::PathCoordinates;
use twobridge::surface::{Regime, SurfaceKind, SurfaceRecord, SurfaceReport};

/// `Genus(F) = g, slope_1(F) = s, slope_2(F) = s|empty, |boundary(F)| = b`
pub fn surface_line(rec: &SurfaceRecord) -> String {
    let name = rec.name;
    let slope2 = rec
        .slope2
        .map(|s| s.to_string())
        .unwrap_or_else(|| "empty".to_string());
    format!(
        "Genus({name}) = {}, slope_1({name}) = {}, slope_2({name}) = {slope2}, |boundary({name})| = {}",
        rec.genus, rec.slope1, rec.boundary_components
    )
}

/// Vertices prefixed by the `1/0` anchor: `[ 1/0 , p/q , ... ]`.
pub fn path_to_str(path: &PathCoordinates) -> String {
    let mut parts = vec!["1/0".to_string()];
    parts.extend(path.iter().map(|p| format!("{}/{}", p.numer(), p.denom())));
    format!("[ {} ]", parts.join(" , "))
}

/// Header, regime banner(s) and one line per surface.
pub fn render_report(rep: &SurfaceReport) -> String {
    let spec = rep.spec;
    let mut lines = vec![
        String::new(),
        "COMPUTING MINIMAL GENUS SURFACE FOR:".to_string(),
        format!(
            "RATIONAL LINK {}/{} WITH rho = 1 and mu = {}.",
            spec.alpha(),
            spec.beta(),
            spec.mu()
        ),
        String::new(),
    ];
    let indented = |rec: &SurfaceRecord| format!("\t{}", surface_line(rec));
    match rep.regime {
        Regime::Zero if rep.surfaces.is_empty() => {
            lines.push("THERE ARE NO SURFACES WITH mu=0, BECAUSE linking IS NOT ZERO".to_string());
        }
        Regime::Zero => {
            lines.push(
                "THERE IS ONLY ONE SURFACE F AND IS GIVEN BY A D-TYPE EDGE-PATH IN D0".to_string(),
            );
            lines.extend(rep.surfaces.iter().map(indented));
        }
        Regime::One => {
            lines.push("THERE ARE TWO SURFACES F_1 AND F_2 GIVEN BY A-TYPE EDGE-PATHS IN D1".to_string());
            lines.extend(rep.surfaces.iter().map(indented));
        }
        Regime::Many => {
            let of_kind = |kind: SurfaceKind| rep.surfaces.iter().filter(move |s| s.kind == kind);
            if of_kind(SurfaceKind::AB).next().is_some() {
                lines.push("THERE ARE SURFACES GIVEN BY AB-TYPE EDGEPATHS IN Dt:".to_string());
                lines.extend(of_kind(SurfaceKind::AB).map(indented));
            }
            lines.push("THERE ARE TWO SURFACES GIVEN BY AD-TYPE EDGEPATHS IN Dt:".to_string());
            lines.extend(of_kind(SurfaceKind::AD).map(indented));
        }
    }
    lines.join("\n")
}

/// Linking, wrapping and the edge-path behind every surface.
pub fn render_more_info(rep: &SurfaceReport) -> String {
    let mut lines = vec![
        format!("\tLINKING = {}", rep.invariants.linking),
        format!("\tWRAPPING = {}", rep.invariants.wrapping),
    ];
    for (i, s) in rep.surfaces.iter().enumerate() {
        lines.push(format!("\tSURFACE_{i} PATH IN D{}: {}", s.path.t, s.path.word));
        lines.push(format!("\t\tPATH_{i}: {}", path_to_str(&s.path.path)));
    }
    lines.join("\n")
}

/// Flat, serializable view of one surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurfaceRow {
    pub alpha: i64,
    pub beta: i64,
    pub mu: i64,
    pub name: String,
    pub kind: String,
    pub genus: String,
    pub slope1: String,
    pub slope2: Option<String>,
    pub boundary_components: i64,
    pub t: String,
    pub word: String,
    pub path: Vec<String>,
}

impl SurfaceRow {
    pub fn new(spec: RationalLinkSpec, rec: &SurfaceRecord) -> Self {
        Self {
            alpha: spec.alpha(),
            beta: spec.beta(),
            mu: spec.mu(),
            name: rec.name.to_string(),
            kind: rec.kind.to_string(),
            genus: rec.genus.to_string(),
            slope1: rec.slope1.to_string(),
            slope2: rec.slope2.map(|s| s.to_string()),
            boundary_components: rec.boundary_components,
            t: rec.path.t.to_string(),
            word: rec.path.word.to_string(),
            path: rec
                .path
                .path
                .iter()
                .map(|p| format!("{}/{}", p.numer(), p.denom()))
                .collect(),
        }
    }
}

pub fn rows(rep: &SurfaceReport) -> Vec<SurfaceRow> {
    rep.surfaces
        .iter()
        .map(|s| SurfaceRow::new(rep.spec, s))
        .collect()
}
