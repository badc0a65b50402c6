// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use pgen_charset::{CategoryFlags, CharList, Charset};

/// String length used when a request does not set one.
pub const DEFAULT_LENGTH: usize = 6;

/// Number of strings produced when a request does not set a count.
pub const DEFAULT_COUNT: usize = 1;

/// A complete description of one generation run.
///
/// Carries exactly the configuration surface the core needs: category flags,
/// optional exclude/include lists, string length, and string count. Immutable
/// once handed to [`generate_all`](crate::generate_all).
///
/// # Example
///
/// ```rust
/// use pgen::{CategoryFlags, CharList, Request};
///
/// let request = Request::new(CategoryFlags::LOWER)
///     .with_exclude(CharList::new("aeiou"))
///     .with_length(8);
///
/// assert_eq!(request.charset().len(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    flags: CategoryFlags,
    exclude: Option<CharList>,
    include: Option<CharList>,
    length: usize,
    count: usize,
}

impl Request {
    /// Creates a request with the given category flags and default
    /// length/count.
    pub fn new(flags: CategoryFlags) -> Self {
        Self {
            flags,
            exclude: None,
            include: None,
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
        }
    }

    /// Sets the characters to exclude from the alphabet.
    #[must_use]
    pub fn with_exclude(mut self, exclude: CharList) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Sets the characters to include beyond the flagged categories.
    #[must_use]
    pub fn with_include(mut self, include: CharList) -> Self {
        self.include = Some(include);
        self
    }

    /// Sets the length of each generated string. Zero is legal and yields
    /// empty strings.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets how many strings to generate. Zero is legal and yields none.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Returns the category flags.
    #[inline]
    pub fn flags(&self) -> CategoryFlags {
        self.flags
    }

    /// Returns the exclude list, if any.
    #[inline]
    pub fn exclude(&self) -> Option<&CharList> {
        self.exclude.as_ref()
    }

    /// Returns the include list, if any.
    #[inline]
    pub fn include(&self) -> Option<&CharList> {
        self.include.as_ref()
    }

    /// Returns the per-string length.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of strings to generate.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Builds the alphabet this request describes.
    pub fn charset(&self) -> Charset {
        Charset::build(self.flags, self.exclude.as_ref(), self.include.as_ref())
    }
}
