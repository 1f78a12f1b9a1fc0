//! Plain-text benchmark reports.

use std::fmt::Write as FmtWrite;
use std::io;

use crate::bench::RadiusComparison;
use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::generators::Algorithm;
use crate::output::TerminalEncoder;
use crate::stability::{NumericFormat, StabilityReport};

const RULE: &str = "----------------------------------------------------------------";
const DOUBLE_RULE: &str = "================================================================";

/// Performance table for one radius, ending with the winner line.
#[must_use]
pub fn performance_table(cmp: &RadiusComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Radius = {}:", cmp.radius);
    let _ = writeln!(out, "{:<26} {:>10} {:>8} {:>10}", "Algorithm", "Time(us)", "Pixels", "ns/pixel");
    let _ = writeln!(out, "{RULE}");

    for result in &cmp.results {
        let name = result.algorithm.name();
        match result.ns_per_pixel() {
            Some(ns) if !result.unstable => {
                let _ = writeln!(
                    out,
                    "{name:<26} {:>10.2} {:>8} {ns:>10.2}",
                    result.time_us, result.pixels
                );
            }
            _ => {
                let _ = writeln!(out, "{name:<26} {:>10} {:>8} {:>10}", "UNSTABLE", "---", "---");
            }
        }
    }

    match cmp.winner() {
        Some(best) => {
            let _ = writeln!(out, ">>> WINNER: {}", best.algorithm);
        }
        None => {
            let _ = writeln!(out, ">>> WINNER: none");
        }
    }
    out
}

/// Stability table: coefficient, state-norm drift, and invariant drift above 1.
#[must_use]
pub fn stability_table(reports: &[StabilityReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8} {:>20} {:>14} {:>16}", "Radius", "2*cos(omega)", "Drift", "Invariant - 1");
    let _ = writeln!(out, "{RULE}");
    for r in reports {
        let _ = writeln!(
            out,
            "{:>8.0} {:>20.15} {:>14.6} {:>16.3e}",
            r.radius,
            r.coefficient,
            r.drift,
            r.invariant_drift - 1.0
        );
    }
    out
}

/// Critical radius per numeric format.
#[must_use]
pub fn critical_radius_table(formats: &[NumericFormat]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:>9} {:>12}", "Format", "Frac Bits", "r_crit");
    let _ = writeln!(out, "{RULE}");
    for format in formats {
        let _ = writeln!(
            out,
            "{:<20} {:>9} {:>12.0}",
            format.name,
            format.frac_bits,
            format.critical_radius()
        );
    }
    out
}

/// Everything a benchmark run produced, ready to print.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Pixel art per generator.
    pub visuals: Vec<(Algorithm, Bitmap)>,
    /// Performance results per radius.
    pub comparisons: Vec<RadiusComparison>,
    /// Stability results.
    pub stability: Vec<StabilityReport>,
    /// Critical-radius formats.
    pub formats: Vec<NumericFormat>,
}

/// Write a report, skipping empty sections.
pub fn write_report<W: io::Write>(w: &mut W, report: &Report) -> Result<()> {
    let encoder = TerminalEncoder::new();

    if !report.visuals.is_empty() {
        writeln!(w, "VISUAL COMPARISON:")?;
        writeln!(w, "{RULE}")?;
        for (algorithm, bitmap) in &report.visuals {
            writeln!(w, "\n{} ({} muls/iter):", algorithm, algorithm.multiplies_per_step())?;
            write!(w, "{}", encoder.render(bitmap))?;
        }
        writeln!(w)?;
    }

    if !report.comparisons.is_empty() {
        writeln!(w, "PERFORMANCE BENCHMARKS:")?;
        writeln!(w, "{DOUBLE_RULE}")?;
        for cmp in &report.comparisons {
            writeln!(w)?;
            write!(w, "{}", performance_table(cmp))?;
        }
        writeln!(w)?;
    }

    if !report.stability.is_empty() {
        writeln!(w, "STABILITY ANALYSIS (float64):")?;
        writeln!(w, "{DOUBLE_RULE}")?;
        write!(w, "{}", stability_table(&report.stability))?;
        writeln!(w)?;
    }

    if !report.formats.is_empty() {
        writeln!(w, "CRITICAL RADIUS BY PRECISION:")?;
        writeln!(w, "{DOUBLE_RULE}")?;
        write!(w, "{}", critical_radius_table(&report.formats))?;
    }

    Ok(())
}
