// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SamplerError;
use crate::traits::EntropySource;

/// Rejection sampler producing uniform indices in `0..range`.
///
/// One 32-bit word is drawn per attempt. Draws above [`max_valid`]
/// are discarded and redrawn, which removes the modulo bias a plain
/// `r % range` would introduce whenever `range` does not divide `2^32`.
/// The redraw count is geometrically distributed with expectation below 2,
/// since at least half of the 32-bit space is always accepted.
///
/// [`max_valid`]: UnbiasedSampler::max_valid
///
/// # Example
///
/// ```rust
/// use pgen_rand::{SystemEntropySource, UnbiasedSampler};
///
/// let sampler = UnbiasedSampler::new(10).expect("non-zero range");
/// let index = sampler.sample(&SystemEntropySource {}).expect("entropy available");
/// assert!(index < 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnbiasedSampler {
    range: u32,
    max_valid: u32,
}

impl UnbiasedSampler {
    /// Creates a sampler over `0..range`.
    ///
    /// The acceptance threshold is `u32::MAX - (2^32 % range)`, computed in
    /// 64-bit arithmetic so the range size `2^32` cannot wrap. This leaves
    /// `max_valid + 1` accepted raw values, always an exact multiple of
    /// `range`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyRange`] when `range` is zero.
    pub fn new(range: u32) -> Result<Self, SamplerError> {
        if range == 0 {
            return Err(SamplerError::EmptyRange);
        }

        let span = 1u64 << 32;
        let max_valid = u32::MAX - (span % u64::from(range)) as u32;

        Ok(Self { range, max_valid })
    }

    /// Returns the exclusive upper bound of produced indices.
    #[inline]
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Returns the largest raw draw that is accepted without a redraw.
    #[inline]
    pub fn max_valid(&self) -> u32 {
        self.max_valid
    }

    /// Draws a uniformly distributed index in `0..range`.
    ///
    /// Loops until an accepted raw value arrives; only out-of-range values
    /// are redrawn, never failed reads.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::Entropy`](crate::SamplerError::Entropy) as
    /// soon as any read from `source` fails.
    pub fn sample<S: EntropySource>(&self, source: &S) -> Result<u32, SamplerError> {
        let mut raw = source.next_u32()?;

        while raw > self.max_valid {
            raw = source.next_u32()?;
        }

        Ok(raw % self.range)
    }
}
