//! Eight-way symmetric plotting.

use std::collections::HashSet;

use crate::bitmap::PixelSink;
use crate::geometry::Point;

/// Plot all eight symmetric images of an octant point.
///
/// Always issues exactly eight [`PixelSink::plot`] calls; the sink decides
/// which land inside its bounds and which collapse onto an already-set
/// cell. Returns how many cells were newly set.
///
/// ```
/// use trueno_circle::bitmap::{Bitmap, PixelSink};
/// use trueno_circle::geometry::Point;
/// use trueno_circle::render::plot_symmetric;
///
/// let mut bm = Bitmap::new(21, 21).unwrap();
/// assert_eq!(plot_symmetric(&mut bm, Point::new(5, 2)), 8);
/// assert_eq!(plot_symmetric(&mut bm, Point::new(5, 2)), 0);
/// assert_eq!(bm.count_set(), 8);
/// ```
#[inline]
pub fn plot_symmetric<S: PixelSink + ?Sized>(sink: &mut S, point: Point) -> usize {
    point
        .symmetric_images()
        .into_iter()
        .filter(|image| sink.plot(image.x, image.y))
        .count()
}

/// Unbounded sink that records every plot call in order.
///
/// Duplicates are kept in [`PointRecorder::calls`]; [`PixelSink::count_set`]
/// counts distinct points.
#[derive(Debug, Clone, Default)]
pub struct PointRecorder {
    calls: Vec<Point>,
    seen: HashSet<Point>,
}

impl PointRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every plotted point, in call order, duplicates included.
    #[must_use]
    pub fn calls(&self) -> &[Point] {
        &self.calls
    }

    /// Distinct plotted points, sorted.
    #[must_use]
    pub fn distinct(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.seen.iter().copied().collect();
        points.sort_unstable();
        points
    }
}

impl PixelSink for PointRecorder {
    fn plot(&mut self, x: i32, y: i32) -> bool {
        let point = Point::new(x, y);
        self.calls.push(point);
        self.seen.insert(point)
    }

    fn count_set(&self) -> usize {
        self.seen.len()
    }
}
