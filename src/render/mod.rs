//! Point expansion and recording sinks.
//!
//! Generators hand their octant points to [`plot_symmetric`], which writes
//! all eight mirror images into a [`PixelSink`](crate::bitmap::PixelSink).
//!
//! # Algorithms
//!
//! - **8-way symmetry**: one octant point yields `(±x, ±y)` and `(±y, ±x)`
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." Communications of the ACM 20(2).

mod symmetric;

pub use symmetric::{plot_symmetric, PointRecorder};
