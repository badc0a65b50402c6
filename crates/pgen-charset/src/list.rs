// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::charset::{PRINTABLE_MAX, PRINTABLE_MIN};

/// A normalized caller-supplied character collection.
///
/// Used for both include and exclude lists. Construction sorts the input,
/// removes duplicates, and drops every byte outside the printable non-space
/// ASCII range `0x21..=0x7E`, so callers may pass arbitrary unsorted strings.
///
/// Membership tests run as binary search over the normalized form.
///
/// # Example
///
/// ```rust
/// use pgen_charset::CharList;
///
/// let list = CharList::new("zzaa0 \t");
/// assert_eq!(list.as_bytes(), b"0az");
/// assert!(list.contains(b'z'));
/// assert!(!list.contains(b' '));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharList {
    chars: Vec<u8>,
}

impl CharList {
    /// Creates a normalized list from an arbitrary input string.
    pub fn new(input: &str) -> Self {
        let mut chars: Vec<u8> = input
            .bytes()
            .filter(|c| (PRINTABLE_MIN..=PRINTABLE_MAX).contains(c))
            .collect();

        chars.sort_unstable();
        chars.dedup();

        Self { chars }
    }

    /// Returns `true` iff `c` is in the list.
    pub fn contains(&self, c: u8) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Returns the number of distinct characters in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the list contains no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the normalized characters in ascending order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }
}

impl From<&str> for CharList {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}
