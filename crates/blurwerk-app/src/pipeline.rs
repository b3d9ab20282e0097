// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One blur run: decode the input, blur it, write the PNG.

use std::path::PathBuf;

use blurwerk_core::error::Result;
use blurwerk_core::{BlurConfig, MaskSize};
use blurwerk_filter::{BoxBlur, ImageAdapter};
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub mask_size: MaskSize,
    pub output: PathBuf,
}

/// Run the full pipeline for `config`. Any failure aborts the run; the output
/// file is only created once the blurred image has been encoded.
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn process_image(config: &BlurConfig) -> Result<RunSummary> {
    info!("Start processing image");
    let grid = ImageAdapter::open(&config.input)?;

    info!(mask = %config.mask_size, parallel = config.parallel, "Applying blur filter");
    let blur = BoxBlur::new(config.mask_size);
    let blurred = if config.parallel {
        blur.apply_parallel(&grid)
    } else {
        blur.apply(&grid)
    };

    info!("Writing new image file");
    ImageAdapter::save(&blurred, &config.output)?;

    info!("Done");
    Ok(RunSummary {
        width: blurred.width(),
        height: blurred.height(),
        mask_size: config.mask_size,
        output: config.output.clone(),
    })
}
