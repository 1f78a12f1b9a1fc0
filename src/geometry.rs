//! Integer lattice points.
//!
//! Generators emit [`Point`]s relative to the circle center. Symmetric
//! generators only produce first-octant points (`0 <= y <= x`, or the
//! mirrored `0 <= x <= y` for the midpoint baseline) and rely on
//! [`Point::symmetric_images`] to cover the rest of the circle.

/// A lattice point with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point mirrored across the `y = x` diagonal.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Whether the point lies in the first octant (`0 <= y <= x`).
    #[must_use]
    pub const fn is_first_octant(self) -> bool {
        0 <= self.y && self.y <= self.x
    }

    /// Fold the point into the first octant by taking absolute values and
    /// ordering them so that `y <= x`.
    #[must_use]
    pub fn to_first_octant(self) -> Self {
        let (a, b) = (self.x.abs(), self.y.abs());
        Self::new(a.max(b), a.min(b))
    }

    /// All eight images under the symmetries of the square:
    /// `(±x, ±y)` and `(±y, ±x)`.
    ///
    /// Images coincide when `x == y` or either coordinate is zero.
    #[must_use]
    pub const fn symmetric_images(self) -> [Self; 8] {
        let Self { x, y } = self;
        [
            Self::new(x, y),
            Self::new(-x, y),
            Self::new(x, -y),
            Self::new(-x, -y),
            Self::new(y, x),
            Self::new(-y, x),
            Self::new(y, -x),
            Self::new(-y, -x),
        ]
    }

    /// Horizontal distance from the ideal circle of `radius`, measured in the
    /// first octant as `|round(sqrt(r² - y²)) - x|`.
    ///
    /// Points whose folded `y` exceeds the radius are infinitely far away.
    #[must_use]
    pub fn octant_deviation(self, radius: i32) -> u32 {
        let p = self.to_first_octant();
        let r = i64::from(radius);
        let y = i64::from(p.y);
        let under = r * r - y * y;
        if under < 0 {
            return u32::MAX;
        }
        let ideal_x = (under as f64).sqrt().round() as i64;
        (ideal_x - i64::from(p.x)).unsigned_abs() as u32
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_octant() {
        assert!(Point::new(5, 0).is_first_octant());
        assert!(Point::new(3, 3).is_first_octant());
        assert!(!Point::new(3, 4).is_first_octant());
        assert!(!Point::new(3, -1).is_first_octant());
    }

    #[test]
    fn test_to_first_octant() {
        assert_eq!(Point::new(-3, 7).to_first_octant(), Point::new(7, 3));
        assert_eq!(Point::new(4, -2).to_first_octant(), Point::new(4, 2));
    }

    #[test]
    fn test_symmetric_images_distinct() {
        let images: HashSet<_> = Point::new(5, 2).symmetric_images().into_iter().collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_symmetric_images_diagonal() {
        let images: HashSet<_> = Point::new(3, 3).symmetric_images().into_iter().collect();
        assert_eq!(images.len(), 4);
    }

    #[test]
    fn test_symmetric_images_axis() {
        let images: HashSet<_> = Point::new(5, 0).symmetric_images().into_iter().collect();
        assert_eq!(images.len(), 4);
        let origin: HashSet<_> = Point::ORIGIN.symmetric_images().into_iter().collect();
        assert_eq!(origin.len(), 1);
    }

    #[test]
    fn test_octant_deviation() {
        assert_eq!(Point::new(5, 0).octant_deviation(5), 0);
        assert_eq!(Point::new(4, 3).octant_deviation(5), 0);
        assert_eq!(Point::new(3, 4).octant_deviation(5), 0);
        assert_eq!(Point::new(3, 3).octant_deviation(5), 1);
        assert_eq!(Point::new(9, 9).octant_deviation(5), u32::MAX);
    }

    #[test]
    fn test_tuple_conversion() {
        let p: Point = (2, -7).into();
        assert_eq!(p, Point::new(2, -7));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (2, -7));
    }
}
