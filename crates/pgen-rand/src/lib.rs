// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pgen_rand
//!
//! Entropy sourcing and bias-free index sampling for the pgen string
//! generator.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`UnbiasedSampler`]: rejection sampler producing uniform indices
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for raw entropy providers
//!
//! ## Modulo Bias
//!
//! Reducing a 32-bit draw with `r % n` over-weights low indices whenever `n`
//! does not evenly divide `2^32`. [`UnbiasedSampler`] restores uniformity by
//! discarding every draw above a precomputed threshold, so each index in
//! `0..n` is selected with exactly equal probability.
//!
//! ## Example
//!
//! ```rust
//! use pgen_rand::{EntropySource, SystemEntropySource, UnbiasedSampler};
//!
//! let source = SystemEntropySource {};
//! let sampler = UnbiasedSampler::new(21).expect("non-zero range");
//!
//! let index = sampler.sample(&source).expect("entropy available");
//! assert!(index < 21);
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod sampler;
mod support;
mod system;
mod traits;

pub use error::{EntropyError, SamplerError};
pub use sampler::UnbiasedSampler;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
