//! Direct Form 2 (DF2) digital-filter circle generators.
//!
//! The samples `w(n) = r·cos(nω)` obey the second-order recurrence
//!
//! ```text
//! w(n+1) = 2cos(ω)·w(n) − w(n−1)
//! ```
//!
//! so once `2cos(ω)` is known each new sample costs a single multiply. The
//! running pair `(w(n−1), w(n))` gives the x coordinate directly and the y
//! coordinate from the backward difference:
//!
//! ```text
//! w(n) − w(n−1) ≈ −ω·r·sin((n − ½)ω)   ⇒   y = (w(n) − w(n−1)) · (−1/ω)
//! ```
//!
//! which is a half step behind x. The recurrence is seeded with
//! `w(−1) = r·cos(ω)` and `w(0) = r`, so the first point is `(r, 0)`.
//!
//! As `r` grows, `2cos(ω)` approaches 2 and the Q16.16 coefficient loses the
//! bits that distinguish it from 2; past
//! [`critical_radius`](crate::stability::critical_radius) the fixed-point
//! variant no longer closes the octant.

use super::{angular_step, revolution_steps, CircleGenerator, StepBudget};
use crate::fixed::Fixed;
use crate::geometry::Point;

/// DF2 recurrence coefficients for one radius.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Df2Coefficients {
    /// `2cos(ω)`.
    coeff: f64,
    /// `−1/ω`, converts the backward difference into y.
    scale: f64,
    /// `w(−1) = r·cos(ω)`.
    w0: f64,
    /// `w(0) = r`.
    w1: f64,
    omega: f64,
}

impl Df2Coefficients {
    fn new(radius: i32) -> Self {
        let r = f64::from(radius);
        let omega = angular_step(r);
        Self { coeff: 2.0 * omega.cos(), scale: -1.0 / omega, w0: r * omega.cos(), w1: r, omega }
    }
}

/// DF2 octant generator in `f64`.
///
/// ```
/// use trueno_circle::generators::Df2Float;
/// use trueno_circle::geometry::Point;
///
/// let points: Vec<Point> = Df2Float::new(10).collect();
/// assert_eq!(points[0], Point::new(10, 0));
/// assert!(points.iter().all(|p| p.is_first_octant()));
/// ```
#[derive(Debug, Clone)]
pub struct Df2Float {
    coeff: f64,
    scale: f64,
    w0: f64,
    w1: f64,
    budget: StepBudget,
}

impl Df2Float {
    /// Start the recurrence for `radius`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            return Self { coeff: 0.0, scale: 0.0, w0: 0.0, w1: 0.0, budget: StepBudget::empty() };
        }
        let c = Df2Coefficients::new(radius);
        Self {
            coeff: c.coeff,
            scale: c.scale,
            w0: c.w0,
            w1: c.w1,
            budget: StepBudget::for_step(c.omega),
        }
    }
}

impl Iterator for Df2Float {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.budget.is_spent() {
            return None;
        }
        let x = self.w1.round() as i32;
        let y = ((self.w1 - self.w0) * self.scale).round() as i32;
        if y > x {
            self.budget.cross();
            return None;
        }
        self.budget.take();

        let w2 = self.coeff * self.w1 - self.w0;
        self.w0 = self.w1;
        self.w1 = w2;
        Some(Point::new(x, y))
    }
}

impl CircleGenerator for Df2Float {
    fn hit_step_bound(&self) -> bool {
        self.budget.truncated()
    }
}

/// Q16.16 state shared by the fixed-point DF2 generators.
#[derive(Debug, Clone, Copy)]
struct Df2FixedState {
    coeff: Fixed,
    scale: Fixed,
    w0: Fixed,
    w1: Fixed,
}

impl Df2FixedState {
    fn new(c: &Df2Coefficients) -> Self {
        Self {
            coeff: Fixed::from_f64(c.coeff),
            scale: Fixed::from_f64(c.scale),
            w0: Fixed::from_f64(c.w0),
            w1: Fixed::from_f64(c.w1),
        }
    }

    const fn zero() -> Self {
        Self { coeff: Fixed::ZERO, scale: Fixed::ZERO, w0: Fixed::ZERO, w1: Fixed::ZERO }
    }

    #[inline]
    fn point(&self) -> Point {
        Point::new(self.w1.to_int(), ((self.w1 - self.w0) * self.scale).to_int())
    }

    #[inline]
    fn advance(&mut self) {
        let w2 = self.coeff * self.w1 - self.w0;
        self.w0 = self.w1;
        self.w1 = w2;
    }
}

/// DF2 octant generator in Q16.16 fixed point.
#[derive(Debug, Clone)]
pub struct Df2Fixed {
    state: Df2FixedState,
    budget: StepBudget,
}

impl Df2Fixed {
    /// Start the recurrence for `radius`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            return Self { state: Df2FixedState::zero(), budget: StepBudget::empty() };
        }
        let c = Df2Coefficients::new(radius);
        Self { state: Df2FixedState::new(&c), budget: StepBudget::for_step(c.omega) }
    }
}

impl Iterator for Df2Fixed {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.budget.is_spent() {
            return None;
        }
        let point = self.state.point();
        if point.y > point.x {
            self.budget.cross();
            return None;
        }
        self.budget.take();
        self.state.advance();
        Some(point)
    }
}

impl CircleGenerator for Df2Fixed {
    fn hit_step_bound(&self) -> bool {
        self.budget.truncated()
    }
}

/// DF2 full-circle generator in Q16.16, without symmetry.
///
/// Runs exactly [`revolution_steps`] steps and emits every sample, so the
/// output covers the whole circle (with some overlap at the seam).
#[derive(Debug, Clone)]
pub struct Df2FixedFull {
    state: Df2FixedState,
    remaining: usize,
}

impl Df2FixedFull {
    /// Start the recurrence for `radius`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            return Self { state: Df2FixedState::zero(), remaining: 0 };
        }
        let c = Df2Coefficients::new(radius);
        Self { state: Df2FixedState::new(&c), remaining: revolution_steps(c.omega) }
    }
}

impl Iterator for Df2FixedFull {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let point = self.state.point();
        self.state.advance();
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Df2FixedFull {}

impl CircleGenerator for Df2FixedFull {
    fn hit_step_bound(&self) -> bool {
        false
    }
}
