// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from entropy sources.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The underlying entropy source is unavailable or failed mid-read.
    #[error("system entropy source is unavailable")]
    EntropyNotAvailable,
}

/// Errors from [`UnbiasedSampler`](crate::UnbiasedSampler).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SamplerError {
    /// The sampling range was zero; there is nothing to draw from.
    #[error("sampling range is empty")]
    EmptyRange,
    /// The entropy source failed while drawing.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
