// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Blurwerk.

use thiserror::Error;

/// Top-level error type for all Blurwerk operations.
///
/// The blur engine itself never fails; every variant here belongs to grid
/// construction, image I/O, configuration or the command line.
#[derive(Debug, Error)]
pub enum BlurwerkError {
    // -- Kernel / grid --
    #[error("invalid mask size {0}: must be a positive integer")]
    InvalidMaskSize(u32),

    #[error("invalid pixel grid: {0}")]
    InvalidGrid(String),

    // -- Image I/O --
    #[error("input image not found: {0}")]
    InputNotFound(String),

    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Command line --
    #[error("usage error: {0}")]
    Usage(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BlurwerkError>;
