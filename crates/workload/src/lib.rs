//! Deterministic workload generation for key-value store testing.
//!
//! - [`WorkloadConfig`] - count, key/value length and seed, optionally from TOML
//! - [`WorkloadGenerator`] - lazy iterator over the operations of one workload
//! - [`generate`] - collect a whole [`Workload`] at once
//!
//! ```
//! use kvharness_workload::{generate, WorkloadConfig};
//!
//! let workload = generate(&WorkloadConfig::new(100).with_seed(42)).unwrap();
//! assert_eq!(workload.operations.len(), 100);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod generator;

pub use config::{WorkloadConfig, CONFIG_FILE_NAME, DEFAULT_KEY_VALUE_LENGTH};
pub use generator::{generate, seeding_count, Workload, WorkloadGenerator, WorkloadStats};
