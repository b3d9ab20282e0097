// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// blurwerk-filter: Box blur engine and image I/O for Blurwerk.
//
// The `blur` module is a pure grid-to-grid filter with no knowledge of files
// or formats. The `image` module converts between encoded images and
// `PixelGrid` using the `image` crate.

pub mod blur;
pub mod image;

// Re-export the primary structs so callers can use `blurwerk_filter::BoxBlur` etc.
pub use crate::blur::engine::BoxBlur;
pub use crate::image::adapter::ImageAdapter;
