// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An owned generated string.
///
/// Treated as a secret from the moment it exists:
/// - the buffer is zeroized on drop
/// - `Debug` output is redacted
/// - no `Clone`, so exactly one owner wipes exactly one buffer
///
/// Access the content through [`expose`](Password::expose); the caller is
/// responsible for not copying it further than needed.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password {
    inner: String,
}

#[cfg(any(test, feature = "test-utils"))]
impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Eq for Password {}

impl Password {
    /// Wraps an already-built string.
    ///
    /// The caller hands over ownership; no copy is made.
    pub(crate) fn new(inner: String) -> Self {
        Self { inner }
    }

    /// Creates an empty password (the legal zero-length generation result).
    pub(crate) fn empty() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Exposes the generated string.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Returns the length in characters.
    ///
    /// Every generated symbol is single-byte ASCII, so byte length and
    /// character count coincide.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` for the zero-length password.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password([REDACTED])")
    }
}
