//! Timed comparison of the circle generators.
//!
//! Each (generator, radius) pair is run `iterations` times on a fresh
//! canvas of side `canvas_scale * r`, clearing before every run and timing
//! only the rasterization itself. The midpoint generator is the pixel-count
//! baseline for spotting fixed-point generators that have fallen apart.

use std::time::{Duration, Instant};

use crate::bitmap::{Bitmap, PixelSink};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::generators::Algorithm;
use crate::stability::{analyze_stability, StabilityReport};

/// Below this many pixels a generator at `r > SMALL_OUTPUT_RADIUS` has collapsed.
const MIN_PLAUSIBLE_PIXELS: usize = 10;
const SMALL_OUTPUT_RADIUS: i32 = 50;

/// Timing and output of one generator at one radius.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Generator measured.
    pub algorithm: Algorithm,
    /// Radius drawn.
    pub radius: i32,
    /// Mean rasterization time in microseconds.
    pub time_us: f64,
    /// Distinct cells set by one run.
    pub pixels: usize,
    /// Whether the generator hit its step bound.
    pub truncated: bool,
    /// Whether the output is too degraded to compare.
    pub unstable: bool,
}

impl BenchResult {
    /// Mean time per set cell, in nanoseconds. `None` if nothing was drawn.
    #[must_use]
    pub fn ns_per_pixel(&self) -> Option<f64> {
        (self.pixels > 0).then(|| self.time_us * 1000.0 / self.pixels as f64)
    }
}

/// All results for one radius.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusComparison {
    /// Radius drawn.
    pub radius: i32,
    /// Pixel count of the midpoint generator at this radius.
    pub baseline_pixels: usize,
    /// One entry per generator, in the order they were run.
    pub results: Vec<BenchResult>,
}

impl RadiusComparison {
    /// The fastest generator whose output was not flagged unstable.
    #[must_use]
    pub fn winner(&self) -> Option<&BenchResult> {
        self.results
            .iter()
            .filter(|r| !r.unstable)
            .min_by(|a, b| a.time_us.total_cmp(&b.time_us))
    }
}

/// Whether a generator's output is too degraded to compare against the
/// midpoint baseline.
#[must_use]
pub fn is_unstable(radius: i32, pixels: usize, baseline_pixels: usize, truncated: bool) -> bool {
    truncated
        || (pixels < MIN_PLAUSIBLE_PIXELS && radius > SMALL_OUTPUT_RADIUS)
        || pixels * 2 < baseline_pixels
}

/// Time `algorithm` at `radius` over `iterations` runs.
///
/// `baseline_pixels` is the midpoint pixel count used for the instability
/// check; pass 0 to rely on the step bound and minimum-output checks only.
pub fn time_algorithm(
    algorithm: Algorithm,
    radius: i32,
    iterations: u32,
    canvas_scale: u32,
    baseline_pixels: usize,
) -> Result<BenchResult> {
    let mut canvas = Bitmap::for_radius(radius, canvas_scale)?;
    let mut total = Duration::ZERO;
    let mut truncated = false;

    for _ in 0..iterations.max(1) {
        canvas.clear();
        let start = Instant::now();
        let trace = algorithm.rasterize(&mut canvas, radius);
        total += start.elapsed();
        truncated = trace.truncated;
    }

    // Every iteration draws the same cells; count the last one.
    let pixels = canvas.count_set();

    let time_us = total.as_secs_f64() * 1e6 / f64::from(iterations.max(1));
    let unstable = is_unstable(radius, pixels, baseline_pixels, truncated);
    if unstable {
        log::warn!("{algorithm} unstable at r={radius}: {pixels} pixels");
    }
    log::debug!("{algorithm} r={radius}: {time_us:.2}us, {pixels} pixels");

    Ok(BenchResult { algorithm, radius, time_us, pixels, truncated, unstable })
}

/// Generators a configuration asks to compare.
#[must_use]
pub fn algorithms_for(config: &BenchConfig) -> Vec<Algorithm> {
    if config.full_circle {
        Algorithm::ALL.to_vec()
    } else {
        Algorithm::SYMMETRIC.to_vec()
    }
}

/// Time every configured generator at one radius.
pub fn compare_at(config: &BenchConfig, radius: i32) -> Result<RadiusComparison> {
    let mut baseline = Bitmap::for_radius(radius, config.canvas_scale)?;
    let baseline_pixels = Algorithm::Midpoint.generate(&mut baseline, radius);

    let results = algorithms_for(config)
        .into_iter()
        .map(|alg| {
            time_algorithm(alg, radius, config.iterations, config.canvas_scale, baseline_pixels)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RadiusComparison { radius, baseline_pixels, results })
}

/// Run the full performance comparison.
pub fn run_comparison(config: &BenchConfig) -> Result<Vec<RadiusComparison>> {
    config.validate()?;
    config.radii.iter().map(|&radius| compare_at(config, radius)).collect()
}

/// Stability reports for every configured stability radius.
#[must_use]
pub fn stability_table(config: &BenchConfig) -> Vec<StabilityReport> {
    config
        .stability_radii
        .iter()
        .map(|&r| analyze_stability(f64::from(r), config.revolutions))
        .collect()
}

/// Draw one generator's circle onto a fresh canvas, for visual comparison.
pub fn render(algorithm: Algorithm, radius: i32, size: u32) -> Result<Bitmap> {
    let mut canvas = Bitmap::new(size, size)?;
    algorithm.generate(&mut canvas, radius);
    Ok(canvas)
}
