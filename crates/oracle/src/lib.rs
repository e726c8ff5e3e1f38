//! Reference oracle for key-value store workloads.
//!
//! Replays an operation stream against an exact in-memory mapping and yields
//! the output any correct implementation must produce, then scores an
//! implementation's output against it.
//!
//! ```
//! use kvharness_core::{OpResult, Operation};
//! use kvharness_oracle::replay;
//!
//! let results = replay(&[Operation::write("A", "B"), Operation::read("A")]);
//! assert_eq!(results, vec![OpResult::Success, OpResult::Value("B".into())]);
//! ```

#![warn(clippy::all)]

pub mod oracle;
pub mod verify;

pub use oracle::{replay, Oracle};
pub use verify::{verify, Mismatch, Verdict, MAX_REPORTED_MISMATCHES};
