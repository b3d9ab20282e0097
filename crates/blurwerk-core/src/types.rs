// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: pixels, pixel grids and the blur mask size.

use serde::{Deserialize, Serialize};

use crate::error::{BlurwerkError, Result};

/// A single 8-bit RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in RGBA order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Side length of the square blur window.
///
/// Always at least 1. Deserializes from a plain integer and rejects zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaskSize(u32);

impl MaskSize {
    /// The mask size used when nothing else is configured.
    pub const DEFAULT: MaskSize = MaskSize(3);

    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(BlurwerkError::InvalidMaskSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl Default for MaskSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for MaskSize {
    type Error = BlurwerkError;

    fn try_from(size: u32) -> Result<Self> {
        Self::new(size)
    }
}

impl From<MaskSize> for u32 {
    fn from(mask: MaskSize) -> Self {
        mask.0
    }
}

impl std::fmt::Display for MaskSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// A dense, rectangular, row-major grid of pixels indexed by (row, column).
///
/// Every constructor rejects empty and jagged input, so a `PixelGrid` always
/// has at least one row and one column and all rows share the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Build a grid from a flat row-major buffer.
    pub fn from_vec(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BlurwerkError::InvalidGrid(format!(
                "grid must be non-empty, got {width}x{height}"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            BlurwerkError::InvalidGrid(format!("grid size {width}x{height} overflows"))
        })?;
        if pixels.len() != expected {
            return Err(BlurwerkError::InvalidGrid(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BlurwerkError::InvalidGrid(format!(
                "row {index} has {} pixels, expected {width}",
                row.len()
            )));
        }
        Self::from_vec(width, height, rows.into_iter().flatten().collect())
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self> {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::from_vec(width, height, pixels)
    }

    /// Build a grid where every cell holds `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        Self::from_vec(width, height, vec![pixel; width.saturating_mul(height)])
    }

    /// A new grid with the same dimensions, every cell set to `Pixel::default()`.
    ///
    /// Used as the distinct output buffer for filters that must not read
    /// back their own writes.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: vec![Pixel::default(); self.pixels.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col)
    }

    /// Borrow one row.
    ///
    /// # Panics
    /// Panics if `row >= self.height()`.
    pub fn row(&self, row: usize) -> &[Pixel] {
        assert!(row < self.height, "row index out of bounds");
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable row-major pixels. The length is fixed, so the grid shape
    /// cannot change through this slice.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }
}
