//! Coupled-form (rotation matrix) circle generators.
//!
//! The point is a 2-vector rotated by `ω` every step:
//!
//! ```text
//! x' = x·cos ω − y·sin ω
//! y' = x·sin ω + y·cos ω
//! ```
//!
//! Four multiplies per step instead of DF2's two, but the rotation is exactly
//! orthonormal in real arithmetic, so amplitude error only comes from
//! rounding the matrix entries and products.

use super::{angular_step, CircleGenerator, StepBudget};
use crate::fixed::Fixed;
use crate::geometry::Point;

/// Coupled-form octant generator in `f64`.
#[derive(Debug, Clone)]
pub struct CoupledFloat {
    c: f64,
    s: f64,
    x: f64,
    y: f64,
    budget: StepBudget,
}

impl CoupledFloat {
    /// Start at `(radius, 0)`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            return Self { c: 0.0, s: 0.0, x: 0.0, y: 0.0, budget: StepBudget::empty() };
        }
        let omega = angular_step(f64::from(radius));
        Self {
            c: omega.cos(),
            s: omega.sin(),
            x: f64::from(radius),
            y: 0.0,
            budget: StepBudget::for_step(omega),
        }
    }
}

impl Iterator for CoupledFloat {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.budget.is_spent() {
            return None;
        }
        let ix = self.x.round() as i32;
        let iy = self.y.round() as i32;
        if iy > ix {
            self.budget.cross();
            return None;
        }
        self.budget.take();

        let xn = self.x * self.c - self.y * self.s;
        let yn = self.x * self.s + self.y * self.c;
        self.x = xn;
        self.y = yn;
        Some(Point::new(ix, iy))
    }
}

impl CircleGenerator for CoupledFloat {
    fn hit_step_bound(&self) -> bool {
        self.budget.truncated()
    }
}

/// Coupled-form octant generator in Q16.16 fixed point.
#[derive(Debug, Clone)]
pub struct CoupledFixed {
    c: Fixed,
    s: Fixed,
    x: Fixed,
    y: Fixed,
    budget: StepBudget,
}

impl CoupledFixed {
    /// Start at `(radius, 0)`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            return Self {
                c: Fixed::ZERO,
                s: Fixed::ZERO,
                x: Fixed::ZERO,
                y: Fixed::ZERO,
                budget: StepBudget::empty(),
            };
        }
        let omega = angular_step(f64::from(radius));
        Self {
            c: Fixed::from_f64(omega.cos()),
            s: Fixed::from_f64(omega.sin()),
            x: Fixed::from_f64(f64::from(radius)),
            y: Fixed::ZERO,
            budget: StepBudget::for_step(omega),
        }
    }
}

impl Iterator for CoupledFixed {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.budget.is_spent() {
            return None;
        }
        let ix = self.x.to_int();
        let iy = self.y.to_int();
        if iy > ix {
            self.budget.cross();
            return None;
        }
        self.budget.take();

        let xn = self.x * self.c - self.y * self.s;
        let yn = self.x * self.s + self.y * self.c;
        self.x = xn;
        self.y = yn;
        Some(Point::new(ix, iy))
    }
}

impl CircleGenerator for CoupledFixed {
    fn hit_step_bound(&self) -> bool {
        self.budget.truncated()
    }
}
