// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for raw entropy providers.
///
/// Implementations must return uniformly distributed bytes suitable for
/// security-sensitive sampling. Typically backed by OS-level CSPRNGs.
pub trait EntropySource {
    /// Fills the destination buffer with uniformly distributed random bytes.
    ///
    /// A failed read fills nothing the caller may rely on; partial reads are
    /// never surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source is
    /// unavailable or fails to produce random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Draws one 32-bit random word from the source.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the underlying read
    /// fails.
    fn next_u32(&self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf)?;

        Ok(u32::from_ne_bytes(buf))
    }
}
