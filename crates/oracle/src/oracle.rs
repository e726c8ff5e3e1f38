//! Reference model of a single-client key-value store.
//!
//! | Operation | Key present | Key absent |
//! |-----------|-------------|------------|
//! | Read | current value | `-ERROR-` |
//! | Write | overwrite, `-SUCCESS-` | insert, `-SUCCESS-` |
//! | Delete | remove, `-SUCCESS-` | `-ERROR-`, no change |

use kvharness_core::{OpResult, Operation};
use rustc_hash::FxHashMap;
use tracing::debug;

/// In-memory model replaying one operation stream.
///
/// State lives for one scoring run; start every replay from
/// [`Oracle::new`].
#[derive(Debug, Default, Clone)]
pub struct Oracle {
    entries: FxHashMap<String, String>,
    applied: usize,
}

impl Oracle {
    /// An oracle with an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one operation and return its expected result.
    pub fn apply(&mut self, op: &Operation) -> OpResult {
        self.applied += 1;
        match op {
            Operation::Read { key } => match self.entries.get(key) {
                Some(value) => OpResult::Value(value.clone()),
                None => OpResult::NotFound,
            },
            Operation::Write { key, value } => {
                self.entries.insert(key.clone(), value.clone());
                OpResult::Success
            }
            Operation::Delete { key } => match self.entries.remove(key) {
                Some(_) => OpResult::Success,
                None => OpResult::NotFound,
            },
        }
    }

    /// Lazily apply `ops` in order, yielding one result per operation.
    ///
    /// Suited to a generator feeding the oracle while it is still producing.
    pub fn replay_iter<'a, I>(&'a mut self, ops: I) -> impl Iterator<Item = OpResult> + 'a
    where
        I: IntoIterator<Item = Operation>,
        I::IntoIter: 'a,
    {
        ops.into_iter().map(move |op| self.apply(&op))
    }

    /// Current value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no key is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Operations applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

/// Replay `ops` against a fresh oracle.
///
/// Returns exactly one result per operation, in order.
pub fn replay(ops: &[Operation]) -> Vec<OpResult> {
    debug!(target: "kvharness::oracle", operations = ops.len(), "Replay started");
    let mut oracle = Oracle::new();
    let results: Vec<OpResult> = ops.iter().map(|op| oracle.apply(op)).collect();
    debug!(
        target: "kvharness::oracle",
        operations = results.len(),
        live_keys = oracle.len(),
        "Replay finished"
    );
    results
}
