// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pgen
//!
//! Pseudorandom string generation with a configurable symbol alphabet,
//! sourced from OS entropy, free of modulo bias.
//!
//! The pipeline: a [`Request`] describes what to generate, [`Charset`]
//! derives the alphabet from category flags and include/exclude lists, and
//! [`generate`] draws uniform indices through a rejection sampler until the
//! string is complete. Generated strings are [`Password`] values: zeroized on
//! drop, redacted in `Debug` output.
//!
//! # Quick Start
//!
//! ```rust
//! use pgen::{CategoryFlags, Request, SystemEntropySource, generate_all};
//!
//! let request = Request::new(CategoryFlags::LOWER | CategoryFlags::DIGIT)
//!     .with_length(12)
//!     .with_count(3);
//!
//! let passwords = generate_all(&request, &SystemEntropySource {})?;
//!
//! assert_eq!(passwords.len(), 3);
//! assert_eq!(passwords[0].len(), 12);
//! # Ok::<(), pgen::GenerateError>(())
//! ```
//!
//! # Error Handling
//!
//! Every failure surfaces as a [`GenerateError`]: an empty alphabet is
//! rejected before any entropy is consumed, and an entropy read failure
//! aborts the in-flight string with no partial result. Abandoned partial
//! buffers are zeroized on the way out.
//!
//! # Ownership Model
//!
//! There is no allocation registry and no process-wide cleanup hook: every
//! buffer is owned by the value that created it and wiped exactly once when
//! that value drops.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod password;
mod request;

pub use error::GenerateError;
pub use generator::{generate, generate_all};
pub use password::Password;
pub use request::{DEFAULT_COUNT, DEFAULT_LENGTH, Request};

pub use pgen_charset::{CategoryFlags, CharList, Charset, PRINTABLE_MAX, PRINTABLE_MIN};
pub use pgen_rand::{EntropyError, EntropySource, SystemEntropySource, UnbiasedSampler};
