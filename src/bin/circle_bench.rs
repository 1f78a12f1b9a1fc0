//! circle-bench: compare DF2, coupled-form and midpoint circle generators.
//!
//! Prints pixel art, timing tables, DF2 stability and critical radii.
//!
//! Run: `cargo run --release --features cli --bin circle-bench -- --visual`

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trueno_circle::bench::{self, run_comparison};
use trueno_circle::config::BenchConfig;
use trueno_circle::generators::Algorithm;
use trueno_circle::output::{write_report, Report};

/// circle-bench: incremental circle rasterization benchmark
#[derive(Parser, Debug)]
#[command(name = "circle-bench")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Benchmark DF2, coupled-form and midpoint circle generators", long_about = None)]
struct Cli {
    /// Radius to benchmark (repeatable; replaces the configured list)
    #[arg(short, long = "radius")]
    radii: Vec<i32>,

    /// Timed iterations per generator and radius
    #[arg(short = 'n', long)]
    iterations: Option<u32>,

    /// Revolutions per stability run
    #[arg(long)]
    revolutions: Option<f64>,

    /// YAML config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print pixel art of the float DF2 and midpoint circles
    #[arg(long)]
    visual: bool,

    /// Skip the timing benchmark
    #[arg(long)]
    skip_bench: bool,

    /// Also time the full-circle (no symmetry) variants
    #[arg(long)]
    full_circle: bool,
}

impl Cli {
    /// Layer CLI flags over the file config (or defaults).
    fn resolve_config(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BenchConfig::default(),
        };
        if !self.radii.is_empty() {
            config.radii.clone_from(&self.radii);
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(revolutions) = self.revolutions {
            config.revolutions = revolutions;
        }
        if self.full_circle {
            config.full_circle = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    log::debug!("resolved config: {config:?}");

    let mut report = Report {
        stability: bench::stability_table(&config),
        formats: config.formats.clone(),
        ..Report::default()
    };

    if cli.visual {
        for algorithm in [Algorithm::Df2Float, Algorithm::Midpoint] {
            let canvas = bench::render(algorithm, config.visual_radius, config.visual_size)?;
            report.visuals.push((algorithm, canvas));
        }
    }

    if !cli.skip_bench {
        report.comparisons = run_comparison(&config)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "================================================================")?;
    writeln!(out, "  Circle Rasterization Benchmark")?;
    writeln!(out, "================================================================\n")?;
    write_report(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
