// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_behaviour_none_delegates_to_system_source() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    assert_eq!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert_eq!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );
}

#[test]
fn test_behaviour_fail_at_first_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(1));
    let mut buf = [0u8; 32];

    assert_eq!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );

    // Only the first call fails
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_behaviour_fail_at_third_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    assert_eq!(
        mock.fill_bytes(&mut buf),
        Err(EntropyError::EntropyNotAvailable)
    );

    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_call_count_and_reset() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert_eq!(mock.call_count(), 0);

    mock.fill_bytes(&mut buf).unwrap();
    assert_eq!(mock.call_count(), 1);

    mock.fill_bytes(&mut buf).unwrap();
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_failed_calls_are_counted_too() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let _ = mock.fill_bytes(&mut buf);
    let _ = mock.fill_bytes(&mut buf);

    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_change_behaviour_at_runtime() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert!(mock.fill_bytes(&mut buf).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut buf).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut buf).is_ok());
}
