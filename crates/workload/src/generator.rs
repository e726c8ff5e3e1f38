//! Workload generation.
//!
//! A workload of `N` operations has two phases:
//!
//! 1. **Seeding**: the first `floor(N * 0.20)` operations are writes of fresh
//!    random key/value pairs.
//! 2. **Mixed**: every remaining operation is a read, write or delete chosen
//!    uniformly. Reads and deletes pick a key from the write history. Writes
//!    are fresh half of the time; otherwise they repeat an earlier write
//!    record, value included.
//!
//! The write history keeps every write record, duplicates included, so keys
//! written more often are proportionally more likely to be picked. Deletes
//! never remove a key from the history; later reads and deletes of that key
//! are how the `-ERROR-` path gets exercised.

use kvharness_core::{encode_stream, Operation, Result};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WorkloadConfig;

/// Per-kind operation counts for a generated workload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadStats {
    /// Reads emitted.
    pub reads: usize,
    /// Writes of a newly generated key/value pair.
    pub fresh_writes: usize,
    /// Writes repeating an earlier write record.
    pub reused_writes: usize,
    /// Deletes emitted.
    pub deletes: usize,
}

impl WorkloadStats {
    /// All writes, fresh and reused.
    pub fn writes(&self) -> usize {
        self.fresh_writes + self.reused_writes
    }

    /// All operations.
    pub fn total(&self) -> usize {
        self.reads + self.writes() + self.deletes
    }
}

/// Lazy, seeded workload generator.
///
/// Yields exactly `request_count` operations in generation order, so it can
/// feed an oracle or a live target while generation is still running.
///
/// ```
/// use kvharness_workload::{WorkloadConfig, WorkloadGenerator};
///
/// let config = WorkloadConfig::new(10).with_seed(7);
/// let ops: Vec<_> = WorkloadGenerator::new(&config).unwrap().collect();
/// assert_eq!(ops.len(), 10);
/// ```
#[derive(Debug)]
pub struct WorkloadGenerator {
    rng: StdRng,
    seed: u64,
    key_value_length: usize,
    total: usize,
    seeding: usize,
    emitted: usize,
    /// Every write record emitted so far, with repetition.
    history: Vec<(String, String)>,
    stats: WorkloadStats,
}

impl WorkloadGenerator {
    /// Create a generator for `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config does not validate.
    pub fn new(config: &WorkloadConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let total = config.request_count;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            key_value_length: config.key_value_length,
            total,
            seeding: seeding_count(total),
            emitted: 0,
            history: Vec::with_capacity(total.min(1 << 16)),
            stats: WorkloadStats::default(),
        })
    }

    /// The seed in use; pass it back through the config to reproduce the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Counts for the operations yielded so far.
    pub fn stats(&self) -> &WorkloadStats {
        &self.stats
    }

    fn fresh_write(&mut self) -> Operation {
        let key = random_token(&mut self.rng, self.key_value_length);
        let value = random_token(&mut self.rng, self.key_value_length);
        self.history.push((key.clone(), value.clone()));
        self.stats.fresh_writes += 1;
        Operation::Write { key, value }
    }

    fn reused_write(&mut self) -> Operation {
        let (key, value) = self.pick_record().clone();
        self.history.push((key.clone(), value.clone()));
        self.stats.reused_writes += 1;
        Operation::Write { key, value }
    }

    fn read(&mut self) -> Operation {
        let key = self.pick_record().0.clone();
        self.stats.reads += 1;
        Operation::Read { key }
    }

    fn delete(&mut self) -> Operation {
        let key = self.pick_record().0.clone();
        self.stats.deletes += 1;
        Operation::Delete { key }
    }

    // Callers guarantee a non-empty history.
    fn pick_record(&mut self) -> &(String, String) {
        let idx = self.rng.gen_range(0..self.history.len());
        &self.history[idx]
    }

    fn mixed(&mut self) -> Operation {
        // With N < 5 the seeding phase is empty and there is nothing to reuse
        // yet; a fresh write is the only operation that keeps every key
        // traceable to an earlier write.
        if self.history.is_empty() {
            return self.fresh_write();
        }
        match self.rng.gen_range(0..3u8) {
            0 => self.read(),
            1 => {
                if self.rng.gen_bool(0.5) {
                    self.fresh_write()
                } else {
                    self.reused_write()
                }
            }
            _ => self.delete(),
        }
    }
}

impl Iterator for WorkloadGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        if self.emitted >= self.total {
            return None;
        }
        if self.emitted == self.seeding {
            debug!(
                target: "kvharness::workload",
                seeded = self.seeding,
                remaining = self.total - self.emitted,
                "Seeding phase complete"
            );
        }

        let op = if self.emitted < self.seeding {
            self.fresh_write()
        } else {
            self.mixed()
        };
        self.emitted += 1;
        Some(op)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WorkloadGenerator {}

/// Number of seeding writes for a workload of `total` operations:
/// `floor(total * 0.20)`.
pub fn seeding_count(total: usize) -> usize {
    total / 5
}

fn random_token(rng: &mut StdRng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A fully generated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Seed that reproduces this workload.
    pub seed: u64,
    /// Operations in generation order.
    pub operations: Vec<Operation>,
    /// Per-kind counts.
    pub stats: WorkloadStats,
}

impl Workload {
    /// Render the workload in the operation stream format.
    pub fn encode(&self) -> Result<String> {
        encode_stream(&self.operations)
    }
}

/// Generate a complete workload for `config`.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the config does not validate. Nothing
/// else can fail.
pub fn generate(config: &WorkloadConfig) -> Result<Workload> {
    let mut generator = WorkloadGenerator::new(config)?;
    let operations: Vec<Operation> = generator.by_ref().collect();
    let stats = *generator.stats();

    info!(
        target: "kvharness::workload",
        seed = generator.seed(),
        operations = operations.len(),
        reads = stats.reads,
        fresh_writes = stats.fresh_writes,
        reused_writes = stats.reused_writes,
        deletes = stats.deletes,
        "Workload generated"
    );

    Ok(Workload {
        seed: generator.seed(),
        operations,
        stats,
    })
}
