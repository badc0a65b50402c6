// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::collections::VecDeque;
use core::cell::{Cell, RefCell};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source replaying a fixed byte script.
///
/// Bytes are handed out in order; once the script is exhausted every further
/// read fails with [`EntropyError::EntropyNotAvailable`]. Useful for driving
/// the rejection sampler through known accept/reject sequences.
pub struct ScriptedEntropySource {
    bytes: RefCell<VecDeque<u8>>,
    fill_bytes_count: Cell<usize>,
}

impl ScriptedEntropySource {
    /// Creates a source that replays `bytes` verbatim.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: RefCell::new(bytes.iter().copied().collect()),
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Creates a source that replays `words` as consecutive 32-bit draws.
    ///
    /// Words are laid out with the same byte order
    /// [`next_u32`](crate::EntropySource::next_u32) reads them back with, so
    /// the Nth word in the script is exactly the Nth draw.
    pub fn from_words(words: &[u32]) -> Self {
        let bytes: VecDeque<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();

        Self {
            bytes: RefCell::new(bytes),
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Returns how many `fill_bytes` calls the source has served.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }

    /// Returns how many scripted bytes remain.
    pub fn remaining(&self) -> usize {
        self.bytes.borrow().len()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count.set(self.fill_bytes_count.get() + 1);

        let mut bytes = self.bytes.borrow_mut();
        if bytes.len() < dest.len() {
            return Err(EntropyError::EntropyNotAvailable);
        }

        let len = dest.len();
        for (slot, byte) in dest.iter_mut().zip(bytes.drain(..len)) {
            *slot = byte;
        }

        Ok(())
    }
}
