//! Numerical stability of the DF2 recurrence.
//!
//! The continuous system traced by the DF2 recurrence has constant
//! amplitude. The analysis runs the unmodified `f64` recurrence for a number
//! of revolutions and reports how far the amplitude it sees spreads;
//! quantization error of the Q16.16 variant is estimated separately by
//! [`critical_radius`].
//!
//! Two amplitude measures are tracked:
//!
//! - **drift**: max/min of the state norm `sqrt(w(n−1)² + w(n)²)`. Two
//!   consecutive samples of a cosine are not in quadrature, so the norm
//!   swings with phase and the ratio sits near `cot(ω/2) ≈ 3r`. It grows
//!   with radius as `2cos(ω)` approaches 2.
//! - **invariant drift**: max/min of the recurrence's conserved quadratic
//!   `w(n)² − 2cos(ω)·w(n)·w(n−1) + w(n−1)²`, which equals `r²·sin²(ω)` for
//!   every `n` in exact arithmetic. Its square root over `sin ω` is a
//!   phase-independent amplitude, so only accumulated rounding moves the
//!   ratio away from 1.

use std::f64::consts::PI;

use crate::fixed::FRAC_BITS;
use crate::generators::angular_step;

/// Empirical constant in the critical-radius estimate `0.47 · 2^(F/2)`.
const CRITICAL_RADIUS_FACTOR: f64 = 0.47;

/// Result of a stability run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// Radius analyzed.
    pub radius: f64,
    /// Angular step `ω`.
    pub omega: f64,
    /// Recurrence coefficient `2cos(ω)`.
    pub coefficient: f64,
    /// Number of recurrence steps executed.
    pub steps: usize,
    /// Max/min ratio of the state norm `sqrt(w0² + w1²)` (≥ 1).
    pub drift: f64,
    /// Max/min ratio of the phase-independent amplitude (≥ 1).
    pub invariant_drift: f64,
    /// Smallest state norm observed.
    pub min_norm: f64,
    /// Largest state norm observed.
    pub max_norm: f64,
}

impl StabilityReport {
    /// Report for a run that executed no steps.
    fn flat(radius: f64) -> Self {
        let omega = if radius > 0.0 { angular_step(radius) } else { 0.0 };
        Self {
            radius,
            omega,
            coefficient: 2.0 * omega.cos(),
            steps: 0,
            drift: 1.0,
            invariant_drift: 1.0,
            min_norm: radius.max(0.0),
            max_norm: radius.max(0.0),
        }
    }
}

/// Running min/max of a positive quantity.
#[derive(Debug, Clone, Copy)]
struct Extremes {
    min: f64,
    max: f64,
}

impl Extremes {
    const fn new(initial: f64) -> Self {
        Self { min: initial, max: initial }
    }

    #[inline]
    fn observe(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    fn ratio(&self) -> f64 {
        if self.min > 0.0 {
            self.max / self.min
        } else {
            1.0
        }
    }
}

/// Run the DF2 recurrence for `revolutions` full turns at `radius` and
/// report the amplitude drift.
///
/// A non-positive or non-finite radius, or a run of zero steps, reports a
/// drift of exactly 1.
///
/// ```
/// use trueno_circle::stability::analyze_stability;
///
/// let report = analyze_stability(10.0, 100.0);
/// assert_eq!(report.steps, 9424);
/// assert!((report.drift - 29.99).abs() < 0.01);
/// assert!(report.invariant_drift - 1.0 < 1e-9);
/// ```
#[must_use]
pub fn analyze_stability(radius: f64, revolutions: f64) -> StabilityReport {
    if !radius.is_finite() || radius <= 0.0 || revolutions.is_nan() || revolutions <= 0.0 {
        return StabilityReport::flat(radius);
    }

    let omega = angular_step(radius);
    let coeff = 2.0 * omega.cos();
    let sin_omega = omega.sin();

    let mut w0 = radius * omega.cos();
    let mut w1 = radius;

    let state_norm = |w0: f64, w1: f64| (w0 * w0 + w1 * w1).sqrt();
    let invariant_amplitude =
        |w0: f64, w1: f64| (w1 * w1 - coeff * w1 * w0 + w0 * w0).max(0.0).sqrt() / sin_omega;

    let mut norm = Extremes::new(state_norm(w0, w1));
    let mut amplitude = Extremes::new(invariant_amplitude(w0, w1));

    let steps = (revolutions * 2.0 * PI / omega) as usize;
    for _ in 0..steps {
        norm.observe(state_norm(w0, w1));
        amplitude.observe(invariant_amplitude(w0, w1));

        let w2 = coeff * w1 - w0;
        w0 = w1;
        w1 = w2;
    }

    let report = StabilityReport {
        radius,
        omega,
        coefficient: coeff,
        steps,
        drift: norm.ratio(),
        invariant_drift: amplitude.ratio(),
        min_norm: norm.min,
        max_norm: norm.max,
    };
    log::debug!(
        "stability r={radius} revolutions={revolutions}: {steps} steps, drift={:.6}, invariant={:.3e}",
        report.drift,
        report.invariant_drift - 1.0
    );
    report
}

/// Max/min state-norm ratio of the DF2 recurrence at `radius` over
/// `revolutions`.
///
/// Shorthand for [`analyze_stability`]`(radius, revolutions).drift`.
#[must_use]
pub fn analyze(radius: f64, revolutions: f64) -> f64 {
    analyze_stability(radius, revolutions).drift
}

/// Phase-independent amplitude drift at `radius` over `revolutions`; only
/// accumulated rounding moves it away from 1.
#[must_use]
pub fn invariant_drift(radius: f64, revolutions: f64) -> f64 {
    analyze_stability(radius, revolutions).invariant_drift
}

/// Largest radius a format with `frac_bits` fractional bits can rasterize
/// before its precision visibly distorts the circle: `0.47 · 2^(F/2)`.
///
/// ```
/// use trueno_circle::stability::critical_radius;
///
/// assert!((critical_radius(16) - 120.32).abs() < 1e-9);
/// ```
#[must_use]
pub fn critical_radius(frac_bits: u32) -> f64 {
    CRITICAL_RADIUS_FACTOR * 2f64.powf(f64::from(frac_bits) / 2.0)
}

/// Whether the Q16.16 generators are expected to be accurate at `radius`.
#[must_use]
pub fn fixed_point_safe(radius: i32) -> bool {
    radius > 0 && f64::from(radius) <= critical_radius(FRAC_BITS)
}

/// A numeric format and its fractional precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericFormat {
    /// Display name, e.g. `Q16.16`.
    pub name: String,
    /// Fractional bits (mantissa bits for floating-point formats).
    pub frac_bits: u32,
}

impl NumericFormat {
    /// Create a format entry.
    #[must_use]
    pub fn new(name: impl Into<String>, frac_bits: u32) -> Self {
        Self { name: name.into(), frac_bits }
    }

    /// Critical radius of this format.
    #[must_use]
    pub fn critical_radius(&self) -> f64 {
        critical_radius(self.frac_bits)
    }

    /// The usual fixed and floating formats.
    #[must_use]
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("Q8.8", 8),
            Self::new("Q1.15", 15),
            Self::new("Q16.16", 16),
            Self::new("Q1.31", 31),
            Self::new("Float32 (mantissa)", 23),
            Self::new("Float64 (mantissa)", 52),
        ]
    }
}
