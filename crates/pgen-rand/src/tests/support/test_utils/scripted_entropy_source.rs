// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::ScriptedEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_bytes_are_replayed_in_order() {
    let source = ScriptedEntropySource::new(&[1, 2, 3, 4, 5, 6]);
    let mut buf = [0u8; 3];

    source.fill_bytes(&mut buf).unwrap();
    assert_eq!(buf, [1, 2, 3]);

    source.fill_bytes(&mut buf).unwrap();
    assert_eq!(buf, [4, 5, 6]);
}

#[test]
fn test_words_come_back_as_consecutive_draws() {
    let source = ScriptedEntropySource::from_words(&[7, 0xDEAD_BEEF]);

    assert_eq!(source.next_u32(), Ok(7));
    assert_eq!(source.next_u32(), Ok(0xDEAD_BEEF));
}

#[test]
fn test_exhausted_script_fails_without_partial_reads() {
    let source = ScriptedEntropySource::new(&[1, 2]);
    let mut buf = [0u8; 4];

    assert_eq!(
        source.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );

    // The short script is left untouched by the failed read.
    assert_eq!(source.remaining(), 2);
    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn test_remaining_tracks_consumption() {
    let source = ScriptedEntropySource::from_words(&[1, 2, 3]);

    assert_eq!(source.remaining(), 12);

    source.next_u32().unwrap();
    assert_eq!(source.remaining(), 8);

    let mut buf = [0u8; 8];
    source.fill_bytes(&mut buf).unwrap();
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_call_count_includes_failed_reads() {
    let source = ScriptedEntropySource::new(&[9]);
    let mut byte = [0u8; 1];
    let mut word = [0u8; 4];

    source.fill_bytes(&mut byte).unwrap();
    let _ = source.fill_bytes(&mut word);

    assert_eq!(source.call_count(), 2);
}

#[test]
fn test_empty_fill_succeeds_even_on_empty_script() {
    let source = ScriptedEntropySource::new(&[]);
    let mut buf = [];

    assert!(source.fill_bytes(&mut buf).is_ok());
    assert_eq!(source.call_count(), 1);
}
