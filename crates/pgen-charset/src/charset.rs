// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use crate::flags::CategoryFlags;
use crate::list::CharList;

/// Lowest candidate symbol, `'!'`.
pub const PRINTABLE_MIN: u8 = 0x21;

/// Highest candidate symbol, `'~'`.
pub const PRINTABLE_MAX: u8 = 0x7E;

/// A deduplicated alphabet of printable ASCII symbols.
///
/// Built once per generation request via [`Charset::build`] and then treated
/// as immutable. Symbols are stored in ascending byte order; the order is a
/// construction artifact, but it is deterministic for identical inputs.
///
/// An empty charset is a legal value here. Rejecting it is the caller's job,
/// before any sampling takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
}

impl Charset {
    /// Builds the alphabet from category flags and optional include/exclude
    /// lists.
    ///
    /// Every candidate in `0x21..=0x7E` is kept iff it is category-allowed or
    /// included, and not excluded. The exclude list wins over everything.
    ///
    /// Pure function of its inputs; never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pgen_charset::{CategoryFlags, CharList, Charset};
    ///
    /// let include = CharList::new("01");
    /// let charset = Charset::build(CategoryFlags::empty(), None, Some(&include));
    /// assert_eq!(charset.as_bytes(), b"01");
    /// ```
    pub fn build(
        flags: CategoryFlags,
        exclude: Option<&CharList>,
        include: Option<&CharList>,
    ) -> Self {
        let mut symbols = Vec::new();

        for c in PRINTABLE_MIN..=PRINTABLE_MAX {
            let allowed = flags.contains_char(c) || include.is_some_and(|list| list.contains(c));
            let disallowed = exclude.is_some_and(|list| list.contains(c));

            if allowed && !disallowed {
                symbols.push(c);
            }
        }

        Self { symbols }
    }

    /// Returns the number of symbols in the alphabet.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`, or `None` past the end.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<u8> {
        self.symbols.get(index).copied()
    }

    /// Returns `true` iff `c` is part of the alphabet.
    pub fn contains(&self, c: u8) -> bool {
        self.symbols.binary_search(&c).is_ok()
    }

    /// Returns the symbols in ascending byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.symbols {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}
