// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use pgen_charset::Charset;
use pgen_rand::{EntropySource, UnbiasedSampler};
use zeroize::Zeroizing;

use crate::error::GenerateError;
use crate::password::Password;
use crate::request::Request;

/// Generates one string of `length` symbols drawn uniformly from `charset`.
///
/// `length == 0` succeeds with an empty [`Password`] and consumes no entropy.
/// An empty `charset` is rejected before the first draw.
///
/// On an entropy failure the partially built buffer is dropped, which
/// zeroizes it; no partial result ever escapes.
///
/// # Errors
///
/// - [`GenerateError::EmptyCharset`] when `charset` has no symbols
/// - [`GenerateError::Entropy`] when a read from `source` fails
///
/// # Example
///
/// ```rust
/// use pgen::{CategoryFlags, Charset, SystemEntropySource, generate};
///
/// let charset = Charset::build(CategoryFlags::LOWER, None, None);
/// let password = generate(8, &charset, &SystemEntropySource {})?;
///
/// assert_eq!(password.len(), 8);
/// # Ok::<(), pgen::GenerateError>(())
/// ```
pub fn generate<S: EntropySource>(
    length: usize,
    charset: &Charset,
    source: &S,
) -> Result<Password, GenerateError> {
    if charset.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    if length == 0 {
        return Ok(Password::empty());
    }

    // Alphabet size is at most 94, so the u32 cast is lossless.
    let sampler = UnbiasedSampler::new(charset.len() as u32)?;

    let mut buf = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let index = sampler.sample(source)? as usize;

        // The sampler's range contract keeps index < charset.len().
        debug_assert!(index < charset.len());
        buf.push(charset.as_bytes()[index] as char);
    }

    // Move the finished buffer out; the Zeroizing shell is left with an
    // empty string to wipe.
    Ok(Password::new(mem::take(&mut *buf)))
}

/// Runs a whole [`Request`]: builds the alphabet once, then generates
/// `count` independent strings.
///
/// The alphabet is validated up front, so an empty charset fails even when
/// `count == 0` — misconfiguration is reported regardless of how much output
/// was asked for.
///
/// # Errors
///
/// - [`GenerateError::EmptyCharset`] when the request's alphabet is empty
/// - [`GenerateError::Entropy`] when any read from `source` fails; strings
///   generated before the failure are dropped and wiped
pub fn generate_all<S: EntropySource>(
    request: &Request,
    source: &S,
) -> Result<Vec<Password>, GenerateError> {
    let charset = request.charset();

    if charset.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    let mut passwords = Vec::with_capacity(request.count());
    for _ in 0..request.count() {
        passwords.push(generate(request.length(), &charset, source)?);
    }

    Ok(passwords)
}
