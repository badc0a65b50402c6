// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bitflags::bitflags;

bitflags! {
    /// Bit-set over the four symbol categories of printable ASCII.
    ///
    /// Flags combine freely; an empty set is legal and yields an empty
    /// alphabet unless an include list supplies symbols.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategoryFlags: u8 {
        /// Lowercase letters `a..=z`.
        const LOWER = 1 << 0;
        /// Uppercase letters `A..=Z`.
        const UPPER = 1 << 1;
        /// Decimal digits `0..=9`.
        const DIGIT = 1 << 2;
        /// Punctuation: every printable ASCII symbol that is not alphanumeric.
        const PUNCT = 1 << 3;
    }
}

impl CategoryFlags {
    /// Returns the flag combination for a quick-select level.
    ///
    /// Levels are cumulative: `1` selects lowercase only, `2` adds uppercase,
    /// `3` adds digits, `4` adds punctuation. Returns `None` for any other
    /// level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pgen_charset::CategoryFlags;
    ///
    /// let flags = CategoryFlags::preset(3).unwrap();
    /// assert_eq!(flags, CategoryFlags::LOWER | CategoryFlags::UPPER | CategoryFlags::DIGIT);
    /// assert!(CategoryFlags::preset(5).is_none());
    /// ```
    pub fn preset(level: u8) -> Option<Self> {
        let mut flags = Self::empty();

        match level {
            1..=4 => {
                if level >= 4 {
                    flags |= Self::PUNCT;
                }
                if level >= 3 {
                    flags |= Self::DIGIT;
                }
                if level >= 2 {
                    flags |= Self::UPPER;
                }
                flags |= Self::LOWER;

                Some(flags)
            }
            _ => None,
        }
    }

    /// Returns `true` iff `c` belongs to one of the active categories.
    ///
    /// Non-printable bytes and the space character belong to no category and
    /// always return `false`.
    pub fn contains_char(self, c: u8) -> bool {
        (self.contains(Self::LOWER) && c.is_ascii_lowercase())
            || (self.contains(Self::UPPER) && c.is_ascii_uppercase())
            || (self.contains(Self::DIGIT) && c.is_ascii_digit())
            || (self.contains(Self::PUNCT) && c.is_ascii_punctuation())
    }
}
