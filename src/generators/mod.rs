//! Incremental circle generators.
//!
//! Every generator is an iterator of lattice [`Point`]s for one radius. The
//! five symmetric generators stop at the end of the first octant (the
//! moment the emitted point would cross `y = x`); their points are expanded
//! eight ways by [`plot_symmetric`]. The two full-circle variants walk the
//! whole circle and plot each point as-is.
//!
//! | Algorithm | Arithmetic | Multiplies / step |
//! |-----------|-----------|-------------------|
//! | DF2 | `f64` or Q16.16 | 2 |
//! | Coupled form | `f64` or Q16.16 | 4 |
//! | Midpoint | `i32` | 0 |
//!
//! All recurrence-based generators advance by the angular step
//! `ω = 1 / (1.5 r)`, i.e. two thirds of a pixel of arc per step.
//!
//! # References
//!
//! - Goertzel, G. (1958). "An Algorithm for the Evaluation of Finite
//!   Trigonometric Series." American Mathematical Monthly 65(1).
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." Communications of the ACM 20(2).

mod coupled;
mod df2;
mod midpoint;

use std::f64::consts::PI;
use std::fmt;

use crate::bitmap::PixelSink;
use crate::geometry::Point;
use crate::render::plot_symmetric;

pub use coupled::{CoupledFixed, CoupledFloat};
pub use df2::{Df2Fixed, Df2FixedFull, Df2Float};
pub use midpoint::{Midpoint, MidpointFull};

/// Extra steps allowed beyond one full revolution.
const STEP_MARGIN: usize = 10;

/// Angular step `ω = 1 / (1.5 r)` used by every recurrence generator.
///
/// Only meaningful for positive radii.
#[must_use]
pub fn angular_step(radius: f64) -> f64 {
    1.0 / (1.5 * radius)
}

/// Steps in one full revolution at angular step `omega`, plus a small margin.
///
/// This is the exact step count of [`Df2FixedFull`] and the upper bound on
/// every octant loop.
#[must_use]
pub fn revolution_steps(omega: f64) -> usize {
    (2.0 * PI / omega) as usize + STEP_MARGIN
}

/// A circle generator: an iterator of points that knows whether it stopped
/// at its natural end or ran out of step budget.
pub trait CircleGenerator: Iterator<Item = Point> {
    /// `true` once the generator has stopped because it exhausted its step
    /// bound without reaching its termination test. Only fixed-point
    /// generators beyond their critical radius ever do this.
    fn hit_step_bound(&self) -> bool;
}

/// Step budget shared by the octant generators.
#[derive(Debug, Clone, Copy)]
struct StepBudget {
    remaining: usize,
    crossed: bool,
}

impl StepBudget {
    fn for_step(omega: f64) -> Self {
        Self { remaining: revolution_steps(omega), crossed: false }
    }

    /// Budget of a generator that produces nothing.
    const fn empty() -> Self {
        Self { remaining: 0, crossed: true }
    }

    const fn is_spent(&self) -> bool {
        self.remaining == 0
    }

    /// Record the octant crossing; no further points are produced.
    fn cross(&mut self) {
        self.crossed = true;
        self.remaining = 0;
    }

    fn take(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    const fn truncated(&self) -> bool {
        self.remaining == 0 && !self.crossed
    }
}

/// Points emitted by one rasterization pass, before counting the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trace {
    /// Points the generator emitted before expansion.
    pub points: usize,
    /// Whether the generator stopped on its step bound.
    pub truncated: bool,
}

/// Outcome of one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation {
    /// Distinct cells set in the sink after the run.
    pub pixels: usize,
    /// Points the generator emitted before expansion.
    pub points: usize,
    /// Whether the generator stopped on its step bound.
    pub truncated: bool,
}

/// The closed set of circle generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// DF2 recurrence in `f64`, one octant.
    Df2Float,
    /// DF2 recurrence in Q16.16, one octant.
    Df2Fixed,
    /// Rotation-matrix recurrence in `f64`, one octant.
    CoupledFloat,
    /// Rotation-matrix recurrence in Q16.16, one octant.
    CoupledFixed,
    /// Integer midpoint circle, one octant.
    Midpoint,
    /// DF2 recurrence in Q16.16, full revolution without symmetry.
    Df2FixedFull,
    /// Integer midpoint circle, eight separate octant passes.
    MidpointFull,
}

impl Algorithm {
    /// The five octant generators with 8-way symmetry.
    pub const SYMMETRIC: [Self; 5] =
        [Self::Df2Float, Self::Df2Fixed, Self::CoupledFloat, Self::CoupledFixed, Self::Midpoint];

    /// Every generator.
    pub const ALL: [Self; 7] = [
        Self::Df2Float,
        Self::Df2Fixed,
        Self::CoupledFloat,
        Self::CoupledFixed,
        Self::Midpoint,
        Self::Df2FixedFull,
        Self::MidpointFull,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Df2Float => "DF2 Float",
            Self::Df2Fixed => "DF2 Fixed (Q16.16)",
            Self::CoupledFloat => "Coupled Float",
            Self::CoupledFixed => "Coupled Fixed (Q16.16)",
            Self::Midpoint => "Midpoint",
            Self::Df2FixedFull => "DF2 Fixed (full circle)",
            Self::MidpointFull => "Midpoint (full circle)",
        }
    }

    /// Multiplications performed per recurrence step.
    #[must_use]
    pub const fn multiplies_per_step(self) -> u32 {
        match self {
            Self::Df2Float | Self::Df2Fixed | Self::Df2FixedFull => 2,
            Self::CoupledFloat | Self::CoupledFixed => 4,
            Self::Midpoint | Self::MidpointFull => 0,
        }
    }

    /// Whether the generator emits first-octant points for 8-way expansion.
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        !matches!(self, Self::Df2FixedFull | Self::MidpointFull)
    }

    /// Whether the generator uses the Q16.16 kernel.
    #[must_use]
    pub const fn is_fixed_point(self) -> bool {
        matches!(self, Self::Df2Fixed | Self::CoupledFixed | Self::Df2FixedFull)
    }

    /// Rasterize a circle of `radius` into `sink` and return the number of
    /// cells set afterwards. A non-positive radius returns 0 and leaves the
    /// sink untouched.
    ///
    /// ```
    /// use trueno_circle::bitmap::Bitmap;
    /// use trueno_circle::generators::Algorithm;
    ///
    /// let mut bm = Bitmap::for_radius(5, 3).unwrap();
    /// assert_eq!(Algorithm::Midpoint.generate(&mut bm, 5), 28);
    /// assert_eq!(Algorithm::Midpoint.generate(&mut bm, 0), 0);
    /// ```
    pub fn generate<S: PixelSink + ?Sized>(self, sink: &mut S, radius: i32) -> usize {
        self.run(sink, radius).pixels
    }

    /// Like [`Algorithm::generate`], reporting emitted points and whether the
    /// step bound was hit.
    pub fn run<S: PixelSink + ?Sized>(self, sink: &mut S, radius: i32) -> Generation {
        if radius <= 0 {
            return Generation::default();
        }
        let trace = self.rasterize(sink, radius);
        Generation { pixels: sink.count_set(), points: trace.points, truncated: trace.truncated }
    }

    /// Plot the circle without counting the sink afterwards. This is the
    /// part of [`Algorithm::run`] the benchmark times.
    pub fn rasterize<S: PixelSink + ?Sized>(self, sink: &mut S, radius: i32) -> Trace {
        if radius <= 0 {
            return Trace::default();
        }
        let trace = match self {
            Self::Df2Float => drive(Df2Float::new(radius), sink, true),
            Self::Df2Fixed => drive(Df2Fixed::new(radius), sink, true),
            Self::CoupledFloat => drive(CoupledFloat::new(radius), sink, true),
            Self::CoupledFixed => drive(CoupledFixed::new(radius), sink, true),
            Self::Midpoint => drive(Midpoint::new(radius), sink, true),
            Self::Df2FixedFull => drive(Df2FixedFull::new(radius), sink, false),
            Self::MidpointFull => drive(MidpointFull::new(radius), sink, false),
        };
        if trace.truncated {
            log::trace!("{self} stopped on its step bound at r={radius}");
        }
        trace
    }

    /// The points the generator emits for `radius`, before any expansion.
    #[must_use]
    pub fn points(self, radius: i32) -> Vec<Point> {
        match self {
            Self::Df2Float => Df2Float::new(radius).collect(),
            Self::Df2Fixed => Df2Fixed::new(radius).collect(),
            Self::CoupledFloat => CoupledFloat::new(radius).collect(),
            Self::CoupledFixed => CoupledFixed::new(radius).collect(),
            Self::Midpoint => Midpoint::new(radius).collect(),
            Self::Df2FixedFull => Df2FixedFull::new(radius).collect(),
            Self::MidpointFull => MidpointFull::new(radius).collect(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feed a generator into a sink, expanding each point eight ways if asked.
fn drive<G, S>(mut generator: G, sink: &mut S, symmetric: bool) -> Trace
where
    G: CircleGenerator,
    S: PixelSink + ?Sized,
{
    let mut points = 0;
    for point in generator.by_ref() {
        points += 1;
        if symmetric {
            plot_symmetric(sink, point);
        } else {
            sink.plot(point.x, point.y);
        }
    }
    Trace { points, truncated: generator.hit_step_bound() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::render::PointRecorder;

    #[test]
    fn test_angular_step() {
        assert!((angular_step(10.0) - 1.0 / 15.0).abs() < 1e-15);
        assert!((angular_step(2.0) - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_revolution_steps() {
        // 2π / (1/15) = 94.24...
        assert_eq!(revolution_steps(angular_step(10.0)), 104);
    }

    #[test]
    fn test_non_positive_radius_empty() {
        for alg in Algorithm::ALL {
            for radius in [0, -1, -50] {
                let mut bm = Bitmap::new(20, 20).unwrap();
                assert_eq!(alg.generate(&mut bm, radius), 0, "{alg} r={radius}");
                assert_eq!(bm.count_set(), 0);
                assert!(alg.points(radius).is_empty(), "{alg} r={radius}");
            }
        }
    }

    #[test]
    fn test_symmetric_generators_write_eight_per_point() {
        for alg in Algorithm::SYMMETRIC {
            let mut rec = PointRecorder::new();
            let generation = alg.run(&mut rec, 12);
            assert_eq!(rec.calls().len(), generation.points * 8, "{alg}");
        }
    }

    #[test]
    fn test_full_generators_write_one_per_point() {
        for alg in [Algorithm::Df2FixedFull, Algorithm::MidpointFull] {
            let mut rec = PointRecorder::new();
            let generation = alg.run(&mut rec, 12);
            assert_eq!(rec.calls().len(), generation.points, "{alg}");
        }
    }

    #[test]
    fn test_pixel_count_reads_sink() {
        let mut bm = Bitmap::for_radius(10, 3).unwrap();
        let first = Algorithm::Midpoint.generate(&mut bm, 10);
        assert_eq!(first, bm.count_set());
        // Redrawing the same circle sets nothing new
        assert_eq!(Algorithm::Midpoint.generate(&mut bm, 10), first);
    }

    #[test]
    fn test_midpoint_pixel_counts() {
        for (radius, expected) in [(5, 28), (10, 56), (20, 112), (50, 284), (100, 564)] {
            let mut bm = Bitmap::for_radius(radius, 3).unwrap();
            assert_eq!(Algorithm::Midpoint.generate(&mut bm, radius), expected, "r={radius}");
        }
    }

    #[test]
    fn test_float_generators_never_truncate() {
        for alg in [Algorithm::Df2Float, Algorithm::CoupledFloat, Algorithm::Midpoint] {
            for radius in [1, 7, 100, 1000] {
                let mut rec = PointRecorder::new();
                assert!(!alg.run(&mut rec, radius).truncated, "{alg} r={radius}");
            }
        }
    }

    #[test]
    fn test_df2_fixed_truncates_past_critical_radius() {
        let mut bm = Bitmap::for_radius(300, 3).unwrap();
        let generation = Algorithm::Df2Fixed.run(&mut bm, 300);
        assert!(generation.truncated);
        assert_eq!(generation.points, revolution_steps(angular_step(300.0)));
        assert!(generation.pixels < 50);
    }

    #[test]
    fn test_rasterize_matches_run() {
        let mut a = Bitmap::for_radius(30, 3).unwrap();
        let mut b = Bitmap::for_radius(30, 3).unwrap();
        let trace = Algorithm::CoupledFixed.rasterize(&mut a, 30);
        let generation = Algorithm::CoupledFixed.run(&mut b, 30);
        assert_eq!(a, b);
        assert_eq!(trace.points, generation.points);
        assert_eq!(a.count_set(), generation.pixels);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(Algorithm::Midpoint.multiplies_per_step(), 0);
        assert_eq!(Algorithm::CoupledFixed.multiplies_per_step(), 4);
        assert!(Algorithm::Df2Fixed.is_fixed_point());
        assert!(!Algorithm::Df2Float.is_fixed_point());
        assert!(!Algorithm::MidpointFull.is_symmetric());
        assert_eq!(Algorithm::CoupledFloat.to_string(), "Coupled Float");
    }
}
