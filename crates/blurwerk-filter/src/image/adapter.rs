// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image adapter: converts between encoded image files and `PixelGrid`.
// Decoding accepts anything the `image` crate can read; encoding always
// produces 8-bit RGBA PNG.

use std::io::ErrorKind;
use std::path::Path;

use blurwerk_core::error::{BlurwerkError, Result};
use blurwerk_core::{Pixel, PixelGrid};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use tracing::{debug, info, instrument};

/// Stateless bridge between the `image` crate and the blur engine.
pub struct ImageAdapter;

impl ImageAdapter {
    // -- Decoding -------------------------------------------------------------

    /// Read and decode an image file. The format is guessed from the content,
    /// not the extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<PixelGrid> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => BlurwerkError::InputNotFound(path.display().to_string()),
            _ => BlurwerkError::Io(err),
        })?;
        let img = image::load_from_memory(&data).map_err(|err| {
            BlurwerkError::Decode(format!("failed to decode {}: {}", path.display(), err))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            "Image loaded"
        );
        Self::from_dynamic(&img)
    }

    /// Decode an in-memory encoded image (PNG, JPEG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn decode(data: &[u8]) -> Result<PixelGrid> {
        let img = image::load_from_memory(data)
            .map_err(|err| BlurwerkError::Decode(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Self::from_dynamic(&img)
    }

    /// Convert a decoded image into a grid of 8-bit RGBA pixels.
    ///
    /// Goes through 16-bit RGBA and divides every channel by 257, which is
    /// exact for 8-bit sources and truncates wider ones.
    pub fn from_dynamic(img: &DynamicImage) -> Result<PixelGrid> {
        let rgba = img.to_rgba16();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|Rgba([r, g, b, a])| {
                Pixel::new(narrow(*r), narrow(*g), narrow(*b), narrow(*a))
            })
            .collect();
        PixelGrid::from_vec(width as usize, height as usize, pixels)
    }

    // -- Encoding -------------------------------------------------------------

    /// Copy a grid into an `RgbaImage` (row = y, column = x).
    pub fn to_rgba_image(grid: &PixelGrid) -> Result<RgbaImage> {
        let width = dimension(grid.width())?;
        let height = dimension(grid.height())?;
        let raw = grid.pixels().iter().flat_map(|p| p.to_array()).collect();
        RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
            BlurwerkError::Encode(format!("buffer does not match {width}x{height}"))
        })
    }

    /// Encode a grid as PNG bytes.
    pub fn to_png_bytes(grid: &PixelGrid) -> Result<Vec<u8>> {
        let img = DynamicImage::ImageRgba8(Self::to_rgba_image(grid)?);
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| BlurwerkError::Encode(format!("PNG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Write a grid to `path` as PNG, whatever the extension.
    ///
    /// The image is fully encoded before the file is created, so an encoding
    /// failure never leaves a partial file behind.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
        let bytes = Self::to_png_bytes(grid)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(bytes = bytes.len(), "Image written");
        Ok(())
    }
}

/// 16-bit channel to 8 bits.
fn narrow(channel: u16) -> u8 {
    (channel / 257) as u8
}

fn dimension(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| BlurwerkError::Encode(format!("dimension {len} exceeds PNG limits")))
}
