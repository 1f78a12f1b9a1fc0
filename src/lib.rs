//! # Trueno-Circle
//!
//! Incremental circle rasterization with digital-filter recurrences.
//!
//! Each generator produces the lattice points of a circle for one radius
//! using a different recurrence, so their cost and numerical behavior can
//! be compared side by side:
//!
//! - **DF2** ("Direct Form 2"): the second-order recurrence
//!   `w(n+1) = 2cos(ω)·w(n) − w(n−1)`, one multiply per sample, in `f64` and
//!   Q16.16 fixed point
//! - **Coupled form**: a 2D rotation matrix applied every step, four
//!   multiplies, in `f64` and Q16.16
//! - **Midpoint**: the classic integer algorithm, zero multiplies, used as
//!   the pixel-count baseline
//!
//! The [`stability`] module measures how far the DF2 amplitude drifts over
//! many revolutions and estimates the largest radius a fixed-point format
//! can handle.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_circle::prelude::*;
//!
//! let mut canvas = Bitmap::for_radius(20, 3)?;
//! let pixels = Algorithm::Df2Float.generate(&mut canvas, 20);
//! assert!(pixels > 100);
//!
//! assert!(analyze(20.0, 10.0) > 50.0);
//! assert!(invariant_drift(20.0, 10.0) - 1.0 < 1e-9);
//! # Ok::<(), trueno_circle::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config-file`: YAML benchmark configuration
//! - `cli`: the `circle-bench` command-line driver
//!
//! ## References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." Communications of the ACM 20(2).
//! - Goertzel, G. (1958). "An Algorithm for the Evaluation of Finite
//!   Trigonometric Series." American Mathematical Monthly 65(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in numeric rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Q16.16 fixed-point arithmetic.
pub mod fixed;

/// Pixel sinks.
pub mod bitmap;

/// Integer lattice points.
pub mod geometry;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Symmetric plotting and recording sinks.
pub mod render;

/// Circle generators.
pub mod generators;

/// DF2 stability analysis and critical radius.
pub mod stability;

// ============================================================================
// Benchmark and Reporting Modules
// ============================================================================

/// Benchmark configuration.
pub mod config;

/// Timed generator comparison.
pub mod bench;

/// Text output.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-circle operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_circle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::{Bitmap, PixelSink};
    pub use crate::error::{Error, Result};
    pub use crate::fixed::{Fixed, FRAC_BITS};
    pub use crate::generators::{Algorithm, CircleGenerator, Generation};
    pub use crate::geometry::Point;
    pub use crate::render::{plot_symmetric, PointRecorder};
    pub use crate::stability::{
        analyze, analyze_stability, critical_radius, invariant_drift, StabilityReport,
    };
}
