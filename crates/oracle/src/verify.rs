//! Scoring an implementation's output against the oracle's.

use std::fmt;

use kvharness_core::OpResult;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Cap on mismatches kept in a [`Verdict`]; every line is still counted.
pub const MAX_REPORTED_MISMATCHES: usize = 100;

/// One result line that differs from the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// 0-based operation index.
    pub index: usize,
    /// Oracle result.
    pub expected: OpResult,
    /// Result produced by the implementation under test.
    pub actual: OpResult,
}

/// Outcome of comparing two result streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Results produced by the oracle.
    pub expected_count: usize,
    /// Results produced by the implementation under test.
    pub actual_count: usize,
    /// Positions where both streams agree.
    pub matched: usize,
    /// Total disagreeing positions, including any not kept in `mismatches`.
    pub mismatch_count: usize,
    /// First disagreements, at most [`MAX_REPORTED_MISMATCHES`].
    pub mismatches: Vec<Mismatch>,
}

impl Verdict {
    /// True when the counts agree and every line matches.
    pub fn passed(&self) -> bool {
        self.expected_count == self.actual_count && self.mismatch_count == 0
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "PASS: {} of {} results match", self.matched, self.expected_count);
        }
        write!(
            f,
            "FAIL: {} of {} results match",
            self.matched, self.expected_count
        )?;
        if self.expected_count != self.actual_count {
            write!(
                f,
                "\n  count mismatch: expected {}, got {}",
                self.expected_count, self.actual_count
            )?;
        }
        for m in &self.mismatches {
            write!(
                f,
                "\n  operation {}: expected {}, got {}",
                m.index + 1,
                m.expected,
                m.actual
            )?;
        }
        if self.mismatch_count > self.mismatches.len() {
            write!(
                f,
                "\n  ... {} more mismatches",
                self.mismatch_count - self.mismatches.len()
            )?;
        }
        Ok(())
    }
}

/// Compare the oracle's `expected` results with `actual` results, position by
/// position. Positions present in only one stream are reported through the
/// counts, not as mismatches.
///
/// Results are compared by their output line, so a stored value spelled
/// `-ERROR-` matches an `-ERROR-` line decoded from an implementation.
pub fn verify(expected: &[OpResult], actual: &[OpResult]) -> Verdict {
    let mut matched = 0;
    let mut mismatch_count = 0;
    let mut mismatches = Vec::new();

    for (index, (exp, act)) in expected.iter().zip(actual).enumerate() {
        if exp.as_line() == act.as_line() {
            matched += 1;
            continue;
        }
        if mismatch_count == 0 {
            warn!(
                target: "kvharness::verify",
                index,
                expected = %exp,
                actual = %act,
                "First mismatch against oracle"
            );
        }
        mismatch_count += 1;
        if mismatches.len() < MAX_REPORTED_MISMATCHES {
            mismatches.push(Mismatch {
                index,
                expected: exp.clone(),
                actual: act.clone(),
            });
        }
    }

    Verdict {
        expected_count: expected.len(),
        actual_count: actual.len(),
        matched,
        mismatch_count,
        mismatches,
    }
}
