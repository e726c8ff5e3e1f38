//! Shared test utilities for integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::collections::HashMap;

pub use kvharness::{
    decode_results, decode_stream, encode_results, generate, replay, verify, OpResult, Operation,
    Result, Workload, WorkloadConfig,
};

/// Run the oracle over stream text, producing output text.
pub fn run_oracle(stream: &str) -> Result<String> {
    let ops = decode_stream(stream)?;
    Ok(encode_results(&replay(&ops)))
}

/// Generate a seeded workload.
pub fn seeded_workload(count: usize, seed: u64) -> Workload {
    generate(&WorkloadConfig::new(count).with_seed(seed)).expect("valid config")
}

/// Build a stream from operations, header included.
pub fn stream_of(ops: &[Operation]) -> String {
    kvharness::encode_stream(ops).expect("encodable operations")
}

/// A store standing in for an implementation under test.
///
/// With `forget_deletes` set it reports `-SUCCESS-` for deletes but never
/// removes anything, a classic bug the oracle must catch.
#[derive(Default)]
pub struct StoreUnderTest {
    entries: HashMap<String, String>,
    pub forget_deletes: bool,
}

impl StoreUnderTest {
    pub fn buggy() -> Self {
        Self {
            forget_deletes: true,
            ..Self::default()
        }
    }

    pub fn run(&mut self, op: &Operation) -> String {
        match op {
            Operation::Read { key } => self
                .entries
                .get(key)
                .cloned()
                .unwrap_or_else(|| "-ERROR-".to_string()),
            Operation::Write { key, value } => {
                self.entries.insert(key.clone(), value.clone());
                "-SUCCESS-".to_string()
            }
            Operation::Delete { key } => {
                let present = if self.forget_deletes {
                    self.entries.contains_key(key)
                } else {
                    self.entries.remove(key).is_some()
                };
                if present { "-SUCCESS-" } else { "-ERROR-" }.to_string()
            }
        }
    }

    /// Print output in the oracle's format.
    pub fn run_stream(&mut self, ops: &[Operation]) -> String {
        let mut out = format!("{}\n", ops.len());
        for op in ops {
            out.push_str(&self.run(op));
            out.push('\n');
        }
        out
    }
}
