// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: decode files into pixel grids and encode grids as PNG.

pub mod adapter;

pub use adapter::ImageAdapter;
