//! Pixel sink for circle generators.
//!
//! A [`Bitmap`] is a one-byte-per-cell occupancy grid whose origin is the
//! grid center. Generators only ever see it through [`PixelSink`], so the
//! same algorithms can plot into a bitmap, a point recorder, or anything
//! else that accepts center-relative coordinates.

use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// Destination for plotted lattice points.
///
/// Coordinates are signed and relative to the sink's center. Points that
/// fall outside the sink are dropped without error.
pub trait PixelSink {
    /// Mark the cell at `(x, y)` as occupied.
    ///
    /// Returns `true` only if the cell was inside the sink and not already
    /// set. Plotting the same cell twice is idempotent.
    fn plot(&mut self, x: i32, y: i32) -> bool;

    /// Number of distinct cells currently set.
    fn count_set(&self) -> usize;
}

/// Occupancy grid with a centered origin.
///
/// Cells are stored in row-major order, one byte each (`0` clear, `1` set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in cells.
    width: u32,
    /// Height in cells.
    height: u32,
    /// Row-major cell storage.
    cells: Vec<u8>,
}

impl Bitmap {
    /// Create a cleared bitmap with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_circle::bitmap::Bitmap;
    ///
    /// let bm = Bitmap::new(50, 40).unwrap();
    /// assert_eq!(bm.width(), 50);
    /// assert_eq!(bm.height(), 40);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Self { width, height, cells: vec![0; size] })
    }

    /// Create a square bitmap of side `scale * radius`, large enough to hold a
    /// circle of `radius` with margin when `scale >= 3`.
    ///
    /// Non-positive radii are treated as radius 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is zero.
    pub fn for_radius(radius: i32, scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(Error::InvalidDimensions { width: 0, height: 0 });
        }
        let side = (radius.max(1) as u32).saturating_mul(scale);
        Self::new(side, side)
    }

    /// Get the width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Column and row of the origin.
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Raw cell storage.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Get a row of cells (absolute row index).
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Whether the cell at absolute `(col, row)` is set.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, col: u32, row: u32) -> Option<bool> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[self.cell_index(col, row)] != 0)
    }

    /// Whether the cell at center-relative `(x, y)` is set.
    ///
    /// Out-of-bounds coordinates are reported as clear.
    #[must_use]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.to_absolute(x, y)
            .is_some_and(|(col, row)| self.cells[self.cell_index(col, row)] != 0)
    }

    /// Center-relative coordinates of every set cell, in row-major order.
    pub fn set_points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (cx, cy) = self.center();
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |(i, _)| ((i % width) as i32 - cx, (i / width) as i32 - cy))
    }

    /// Get the selected SIMD backend.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }

    /// Map center-relative coordinates to an absolute cell, if in bounds.
    #[inline]
    fn to_absolute(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let (cx, cy) = self.center();
        let col = i64::from(x) + i64::from(cx);
        let row = i64::from(y) + i64::from(cy);
        if col < 0 || row < 0 || col >= i64::from(self.width) || row >= i64::from(self.height) {
            return None;
        }
        Some((col as u32, row as u32))
    }

    /// Calculate the storage index for an absolute cell.
    #[inline]
    fn cell_index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.width as usize) + col as usize
    }
}

impl PixelSink for Bitmap {
    #[inline]
    fn plot(&mut self, x: i32, y: i32) -> bool {
        let Some((col, row)) = self.to_absolute(x, y) else {
            return false;
        };
        let idx = self.cell_index(col, row);
        if self.cells[idx] != 0 {
            return false;
        }
        self.cells[idx] = 1;
        true
    }

    /// Count set cells with a SIMD sum over the grid.
    fn count_set(&self) -> usize {
        let as_f32: Vec<f32> = self.cells.iter().map(|&c| f32::from(c)).collect();
        let sum = Vector::from_vec(as_f32).sum().unwrap_or(0.0);
        sum.round() as usize
    }
}
