// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use pgen_rand::{EntropyError, SamplerError};
use thiserror::Error;

/// Errors from string generation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The built alphabet has no symbols; detected before any entropy is
    /// consumed.
    #[error("character set is empty; nothing to sample from")]
    EmptyCharset,
    /// The entropy source failed; the in-flight string is discarded.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}

impl From<SamplerError> for GenerateError {
    fn from(err: SamplerError) -> Self {
        match err {
            SamplerError::EmptyRange => Self::EmptyCharset,
            SamplerError::Entropy(inner) => Self::Entropy(inner),
        }
    }
}
