//! Sweeps over many links, collected into a polars `DataFrame`.

use anyhow::{Context, Result};
use polars::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::fs::File;
use std::path::Path;
use twobridge::link::RationalLinkSpec;
use twobridge::sample::{enumerate_links, random_link};
use twobridge::surface::SurfaceReport;

use crate::format::{rows, SurfaceRow};

/// Which links a table covers.
#[derive(Clone, Copy, Debug)]
pub enum Sweep {
    /// Every valid link with `beta <= max_beta`, all at the same `mu`.
    All { max_beta: i64, mu: i64 },
    /// `count` seeded draws with `beta <= max_beta` and `mu <= max_mu`.
    Random {
        count: usize,
        max_beta: i64,
        max_mu: i64,
        seed: u64,
    },
}

impl Sweep {
    pub fn specs(self) -> Result<Vec<RationalLinkSpec>> {
        let specs = match self {
            Sweep::All { max_beta, mu } => enumerate_links(max_beta)
                .map(|(alpha, beta)| RationalLinkSpec::new(alpha, beta, mu))
                .collect::<Result<Vec<_>, _>>()?,
            Sweep::Random {
                count,
                max_beta,
                max_mu,
                seed,
            } => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..count)
                    .map(|_| random_link(&mut rng, max_beta, max_mu))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(specs)
    }
}

/// One row per surface of every spec.
pub fn surface_rows(specs: &[RationalLinkSpec]) -> Result<Vec<SurfaceRow>> {
    let mut out = Vec::new();
    for &spec in specs {
        let report = SurfaceReport::compute(spec)
            .with_context(|| format!("computing surfaces for {spec}"))?;
        out.extend(rows(&report));
    }
    Ok(out)
}

pub fn build_frame(rows: &[SurfaceRow]) -> Result<DataFrame> {
    let ints = |f: fn(&SurfaceRow) -> i64| rows.iter().map(f).collect::<Vec<i64>>();
    let strs = |f: fn(&SurfaceRow) -> &str| {
        rows.iter().map(|r| f(r).to_string()).collect::<Vec<String>>()
    };
    let df = df!(
        "alpha" => ints(|r| r.alpha),
        "beta" => ints(|r| r.beta),
        "mu" => ints(|r| r.mu),
        "name" => strs(|r| r.name.as_str()),
        "kind" => strs(|r| r.kind.as_str()),
        "genus" => strs(|r| r.genus.as_str()),
        "slope1" => strs(|r| r.slope1.as_str()),
        "slope2" => rows.iter().map(|r| r.slope2.clone()).collect::<Vec<Option<String>>>(),
        "boundary" => ints(|r| r.boundary_components),
        "word" => strs(|r| r.word.as_str())
    )?;
    Ok(df)
}

pub fn write_csv(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).finish(df)?;
    Ok(())
}
