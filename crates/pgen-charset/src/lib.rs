// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pgen_charset
//!
//! Symbol alphabet construction for the pgen string generator.
//!
//! Derives a deduplicated alphabet of printable ASCII symbols from character
//! category flags and caller-supplied include/exclude lists.
//!
//! ## Core Types
//!
//! - [`CategoryFlags`]: bit-set over the four symbol categories
//! - [`CharList`]: normalized include/exclude character collection
//! - [`Charset`]: the resulting alphabet, ready for sampling
//!
//! ## Membership Rule
//!
//! A printable symbol `c` (`0x21..=0x7E`) is part of the built [`Charset`] iff
//!
//! ```text
//! (category of c is flagged OR c is in the include list)
//!     AND c is NOT in the exclude list
//! ```
//!
//! Exclusion is absolute: it overrides both category flags and the include
//! list.
//!
//! ## Example
//!
//! ```rust
//! use pgen_charset::{CategoryFlags, CharList, Charset};
//!
//! let exclude = CharList::new("aeiou");
//! let charset = Charset::build(CategoryFlags::LOWER, Some(&exclude), None);
//!
//! assert_eq!(charset.len(), 21);
//! assert!(charset.contains(b'z'));
//! assert!(!charset.contains(b'e'));
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod charset;
mod flags;
mod list;

pub use charset::{Charset, PRINTABLE_MAX, PRINTABLE_MIN};
pub use flags::CategoryFlags;
pub use list::CharList;
