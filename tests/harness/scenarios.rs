//! Wire-level oracle scenarios.

use crate::common::*;
use kvharness::Error;

#[test]
fn write_read_delete_stream() {
    let output = run_oracle("3\n2 A B\n1 A\n3 A").unwrap();
    assert_eq!(output, "3\n-SUCCESS-\nB\n-SUCCESS-\n");
}

#[test]
fn never_written_key_stream() {
    let output = run_oracle("2\n1 Z\n3 Z").unwrap();
    assert_eq!(output, "2\n-ERROR-\n-ERROR-\n");
}

#[test]
fn empty_stream() {
    assert_eq!(run_oracle("0\n").unwrap(), "0\n");
}

#[test]
fn double_delete_stream() {
    let output = run_oracle("4\n2 k v\n3 k\n3 k\n1 k\n").unwrap();
    assert_eq!(output, "4\n-SUCCESS-\n-SUCCESS-\n-ERROR-\n-ERROR-\n");
}

#[test]
fn overwrite_stream() {
    let output = run_oracle("4\n2 k v1\n1 k\n2 k v2\n1 k\n").unwrap();
    assert_eq!(output, "4\n-SUCCESS-\nv1\n-SUCCESS-\nv2\n");
}

#[test]
fn keys_are_exact_match() {
    let output = run_oracle("3\n2 key value\n1 Key\n1 key\n").unwrap();
    assert_eq!(output, "3\n-SUCCESS-\n-ERROR-\nvalue\n");
}

#[test]
fn malformed_line_rejects_whole_run() {
    let err = run_oracle("3\n2 A B\n9 A\n1 A\n").unwrap_err();
    assert!(matches!(err, Error::MalformedOperationLine { line: 3, .. }));
}

#[test]
fn missing_value_rejects_whole_run() {
    let err = run_oracle("2\n2 A\n1 A\n").unwrap_err();
    assert!(matches!(err, Error::MalformedOperationLine { line: 2, .. }));
}

#[test]
fn truncated_stream_rejects_whole_run() {
    let err = run_oracle("5\n2 A B\n1 A\n").unwrap_err();
    assert!(matches!(err, Error::MalformedOperationLine { line: 4, .. }));
}

#[test]
fn non_numeric_count_rejected() {
    let err = run_oracle("three\n2 A B\n").unwrap_err();
    assert!(matches!(err, Error::MalformedOperationLine { line: 1, .. }));
}
