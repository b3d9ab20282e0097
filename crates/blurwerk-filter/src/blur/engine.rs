// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Box blur engine: replaces each pixel's RGB with the unweighted mean of a
// square neighbourhood, clipped at the image border. Alpha passes through.

use std::ops::Range;

use blurwerk_core::{MaskSize, Pixel, PixelGrid};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Direct (non-separable) box filter with a fixed square window.
///
/// The engine is pure: it reads only from the input grid and writes into a
/// freshly allocated output grid, so no output cell ever depends on another
/// output cell.
///
/// ```ignore
/// let blurred = BoxBlur::new(MaskSize::new(5)?).apply(&grid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxBlur {
    mask: MaskSize,
}

impl BoxBlur {
    pub fn new(mask: MaskSize) -> Self {
        Self { mask }
    }

    pub fn mask_size(&self) -> MaskSize {
        self.mask
    }

    /// Distance from a pixel to the first row/column of its window.
    ///
    /// `(m - 1) / 2` for odd masks and `m / 2` for even masks. With an even
    /// mask the window is not centred: it covers one more cell above/left of
    /// the pixel than below/right, e.g. mask 2 samples rows `i-1..=i`.
    pub fn offset(&self) -> usize {
        let m = self.mask.get() as usize;
        if self.mask.is_even() { m / 2 } else { (m - 1) / 2 }
    }

    /// Blur on the calling thread.
    #[instrument(skip_all, fields(width = src.width(), height = src.height(), mask = %self.mask))]
    pub fn apply(&self, src: &PixelGrid) -> PixelGrid {
        info!("Applying box blur");
        let mut out = src.blank_like();
        let width = src.width();
        for (row, dst) in out.pixels_mut().chunks_exact_mut(width).enumerate() {
            self.blur_row(src, row, dst);
        }
        debug!("Box blur complete");
        out
    }

    /// Blur with one rayon task per output row.
    ///
    /// Every task reads the shared input grid and owns a disjoint output row,
    /// so the result is identical to [`BoxBlur::apply`].
    #[instrument(skip_all, fields(width = src.width(), height = src.height(), mask = %self.mask))]
    pub fn apply_parallel(&self, src: &PixelGrid) -> PixelGrid {
        info!(threads = rayon::current_num_threads(), "Applying box blur in parallel");
        let mut out = src.blank_like();
        let width = src.width();
        out.pixels_mut()
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(row, dst)| self.blur_row(src, row, dst));
        debug!("Parallel box blur complete");
        out
    }

    /// Mean RGB of the clipped window around `(row, col)`, with the source
    /// pixel's alpha.
    ///
    /// # Panics
    /// Panics if `(row, col)` lies outside `src`.
    pub fn blur_pixel(&self, src: &PixelGrid, row: usize, col: usize) -> Pixel {
        let alpha = src.row(row)[col].a;
        let rows = self.window(row, src.height());
        let cols = self.window(col, src.width());

        let mut sum = [0u64; 3];
        for r in rows.clone() {
            for p in &src.row(r)[cols.clone()] {
                sum[0] += u64::from(p.r);
                sum[1] += u64::from(p.g);
                sum[2] += u64::from(p.b);
            }
        }

        // The window always contains the pixel itself, so count >= 1.
        let count = (rows.len() * cols.len()) as u64;
        let mean = |total: u64| (total / count) as u8;
        Pixel::new(mean(sum[0]), mean(sum[1]), mean(sum[2]), alpha)
    }

    fn blur_row(&self, src: &PixelGrid, row: usize, dst: &mut [Pixel]) {
        for (col, cell) in dst.iter_mut().enumerate() {
            *cell = self.blur_pixel(src, row, col);
        }
    }

    /// Indices `center - offset .. center - offset + mask`, clipped to `0..len`.
    fn window(&self, center: usize, len: usize) -> Range<usize> {
        let offset = self.offset();
        let mask = self.mask.get() as usize;
        let start = center.saturating_sub(offset);
        let end = (center + mask - offset).min(len);
        start..end
    }
}
