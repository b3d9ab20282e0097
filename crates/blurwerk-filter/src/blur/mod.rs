// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blur module: fixed-window box blur over a `PixelGrid`.

pub mod engine;

pub use engine::BoxBlur;
