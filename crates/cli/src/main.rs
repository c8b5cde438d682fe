use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use twobridge::link::RationalLinkSpec;
use twobridge::surface::SurfaceReport;

mod format;
mod provenance;
mod repl;
mod table;

#[derive(Parser)]
#[command(name = "genus")]
#[command(about = "Minimal genus surfaces in 2-bridge link exteriors")]
struct Cmd {
    /// Log pipeline details at DEBUG level (stderr)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the surfaces of one link alpha/beta
    Compute {
        #[arg(long)]
        alpha: i64,
        #[arg(long)]
        beta: i64,
        #[arg(long)]
        mu: i64,
        /// Also print linking, wrapping and the edge-paths
        #[arg(long)]
        more: bool,
        /// Print surfaces as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Prompt for alpha, beta and mu until told to stop
    Interactive,
    /// Tabulate surfaces over many links; CSV plus provenance when --out is given
    Table {
        #[arg(long, default_value_t = 32)]
        max_beta: i64,
        /// mu for every link; upper bound for mu with --random
        #[arg(long, default_value_t = 2)]
        mu: i64,
        /// Draw this many random links instead of enumerating all of them
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Compute {
            alpha,
            beta,
            mu,
            more,
            json,
        } => compute(alpha, beta, mu, more, json),
        Action::Interactive => {
            tracing::info!("interactive");
            repl::run(io::stdin().lock(), io::stdout().lock())
        }
        Action::Table {
            max_beta,
            mu,
            random,
            seed,
            out,
        } => run_table(max_beta, mu, random, seed, out),
        Action::Report => report(),
    }
}

fn compute(alpha: i64, beta: i64, mu: i64, more: bool, json: bool) -> Result<()> {
    tracing::info!(alpha, beta, mu, more, json, "compute");
    let spec = RationalLinkSpec::new(alpha, beta, mu)?;
    let report = SurfaceReport::compute(spec)
        .with_context(|| format!("computing surfaces for {spec}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&format::rows(&report))?);
        return Ok(());
    }
    println!("{}", format::render_report(&report));
    if more && !report.surfaces.is_empty() {
        println!("{}", format::render_more_info(&report));
    }
    Ok(())
}

fn run_table(
    max_beta: i64,
    mu: i64,
    random: Option<usize>,
    seed: u64,
    out: Option<String>,
) -> Result<()> {
    tracing::info!(max_beta, mu, random = ?random, seed, out = ?out, "table");
    let sweep = match random {
        Some(count) => table::Sweep::Random {
            count,
            max_beta,
            max_mu: mu,
            seed,
        },
        None => table::Sweep::All { max_beta, mu },
    };
    let specs = sweep.specs()?;
    let rows = table::surface_rows(&specs)?;
    let mut df = table::build_frame(&rows)?;
    tracing::info!(links = specs.len(), rows = df.height(), "table_built");

    let Some(out) = out else {
        println!("{df}");
        return Ok(());
    };
    let out_path = Path::new(&out);
    table::write_csv(&mut df, out_path)?;
    let payload = provenance::Payload::new(
        "table",
        serde_json::json!({
            "max_beta": max_beta,
            "mu": mu,
            "random": random,
            "seed": seed,
            "links": specs.len(),
            "rows": rows.len()
        }),
    );
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(out, provenance = %prov.display(), "table_written");
    Ok(())
}

fn report() -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::report_block())?
    );
    Ok(())
}
