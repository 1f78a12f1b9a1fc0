//! Integer midpoint circle generator, the zero-multiply baseline.
//!
//! Walks the octant from `(0, r)` towards the diagonal, always stepping x
//! and stepping y down only when the decision variable says the midpoint
//! lies outside the circle. Points are emitted as `(x, y)` with `x <= y`,
//! the mirror image of the DF2 octant; 8-way expansion covers the same cells.

use super::CircleGenerator;
use crate::geometry::Point;

/// Midpoint octant generator.
///
/// ```
/// use trueno_circle::generators::Midpoint;
/// use trueno_circle::geometry::Point;
///
/// let points: Vec<Point> = Midpoint::new(5).collect();
/// assert_eq!(
///     points,
///     vec![Point::new(0, 5), Point::new(1, 5), Point::new(2, 5), Point::new(3, 4)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Midpoint {
    x: i32,
    y: i32,
    d: i64,
}

impl Midpoint {
    /// Start at `(0, radius)`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        if radius <= 0 {
            // x > y ends the walk immediately
            return Self { x: 1, y: 0, d: 0 };
        }
        Self { x: 0, y: radius, d: 3 - 2 * i64::from(radius) }
    }
}

impl Iterator for Midpoint {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x > self.y {
            return None;
        }
        let point = Point::new(self.x, self.y);
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        if self.d < 0 {
            self.d += 4 * x + 6;
        } else {
            self.d += 4 * (x - y) + 10;
            self.y -= 1;
        }
        self.x += 1;
        Some(point)
    }
}

impl CircleGenerator for Midpoint {
    fn hit_step_bound(&self) -> bool {
        false
    }
}

/// Maps a second-octant midpoint point onto each of the eight octants,
/// in drawing order.
const OCTANT_TRANSFORMS: [fn(Point) -> Point; 8] = [
    |p| Point::new(p.x, p.y),
    |p| Point::new(p.y, p.x),
    |p| Point::new(p.y, -p.x),
    |p| Point::new(p.x, -p.y),
    |p| Point::new(-p.x, -p.y),
    |p| Point::new(-p.y, -p.x),
    |p| Point::new(-p.y, p.x),
    |p| Point::new(-p.x, p.y),
];

/// Midpoint full-circle generator: eight independent octant passes, each
/// restarting the decision variable, with no symmetric expansion.
#[derive(Debug, Clone)]
pub struct MidpointFull {
    radius: i32,
    pass: usize,
    octant: Midpoint,
}

impl MidpointFull {
    /// Prepare all eight passes for `radius`. Non-positive radii yield nothing.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        let pass = if radius <= 0 { OCTANT_TRANSFORMS.len() } else { 0 };
        Self { radius, pass, octant: Midpoint::new(radius) }
    }
}

impl Iterator for MidpointFull {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.pass < OCTANT_TRANSFORMS.len() {
            if let Some(point) = self.octant.next() {
                return Some(OCTANT_TRANSFORMS[self.pass](point));
            }
            self.pass += 1;
            self.octant = Midpoint::new(self.radius);
        }
        None
    }
}

impl CircleGenerator for MidpointFull {
    fn hit_step_bound(&self) -> bool {
        false
    }
}
