//! kvharness - workload generator and reference oracle for key-value stores
//!
//! The generator produces a deterministic stream of read/write/delete
//! operations that keeps reusing keys it has already written. The oracle
//! replays a stream against an in-memory mapping and yields the output a
//! correct store must print for every operation.
//!
//! # Quick Start
//!
//! ```
//! use kvharness::{encode_results, generate, replay, WorkloadConfig};
//!
//! let workload = generate(&WorkloadConfig::new(100).with_seed(42)).unwrap();
//! let stream = workload.encode().unwrap();
//! let expected = encode_results(&replay(&workload.operations));
//! assert!(stream.starts_with("100\n"));
//! assert!(expected.starts_with("100\n"));
//! ```
//!
//! Feed `stream` to the implementation under test and compare its output with
//! [`verify`].

pub use kvharness_core::*;
pub use kvharness_oracle::{replay, verify, Mismatch, Oracle, Verdict, MAX_REPORTED_MISMATCHES};
pub use kvharness_workload::{
    generate, seeding_count, Workload, WorkloadConfig, WorkloadGenerator, WorkloadStats,
    CONFIG_FILE_NAME, DEFAULT_KEY_VALUE_LENGTH,
};
