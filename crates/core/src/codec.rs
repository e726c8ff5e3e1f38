//! Line-oriented wire format for operation streams and oracle output.
//!
//! Operation stream:
//!
//! ```text
//! N
//! 1 <key>
//! 2 <key> <value>
//! 3 <key>
//! ```
//!
//! Result stream: the count `N` followed by one value or marker per line.
//!
//! Decoding rejects the whole stream on the first structural problem. Skipping
//! a bad line would shift every later result against its operation.

use std::str::Lines;

use tracing::warn;

use crate::error::{Error, Result};
use crate::operation::{OpKind, OpResult, Operation};

// Upper bound on pre-allocation; the header count is untrusted input.
const MAX_PREALLOC: usize = 1 << 16;

// =============================================================================
// Operation stream
// =============================================================================

/// Encode a single operation as one line, without the trailing newline.
///
/// Fails if a key or value is empty or contains whitespace, since the line
/// could not be decoded back into the same operation.
pub fn encode_operation(op: &Operation) -> Result<String> {
    match op {
        Operation::Read { key } => {
            check_token("key", key)?;
            Ok(format!("{} {}", OpKind::Read.tag(), key))
        }
        Operation::Write { key, value } => {
            check_token("key", key)?;
            check_token("value", value)?;
            Ok(format!("{} {} {}", OpKind::Write.tag(), key, value))
        }
        Operation::Delete { key } => {
            check_token("key", key)?;
            Ok(format!("{} {}", OpKind::Delete.tag(), key))
        }
    }
}

/// Encode a full stream: the count line, then one line per operation.
pub fn encode_stream(ops: &[Operation]) -> Result<String> {
    let mut out = String::with_capacity(16 + ops.len() * 24);
    out.push_str(&ops.len().to_string());
    out.push('\n');
    for op in ops {
        out.push_str(&encode_operation(op)?);
        out.push('\n');
    }
    Ok(out)
}

/// Decode one operation line. `line_no` is 1-based and only used for errors.
pub fn decode_operation(line_no: usize, line: &str) -> Result<Operation> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some(tag) = fields.first() else {
        return Err(Error::malformed_operation(line_no, "empty line"));
    };
    let kind = OpKind::from_tag(tag).ok_or_else(|| {
        Error::malformed_operation(line_no, format!("unknown operation tag '{}'", tag))
    })?;
    if fields.len() != kind.field_count() {
        return Err(Error::malformed_operation(
            line_no,
            format!(
                "{} expects {} argument(s), found {}",
                kind,
                kind.field_count() - 1,
                fields.len() - 1
            ),
        ));
    }

    let op = match kind {
        OpKind::Read => Operation::read(fields[1]),
        OpKind::Write => Operation::write(fields[1], fields[2]),
        OpKind::Delete => Operation::delete(fields[1]),
    };
    Ok(op)
}

/// Decode a full operation stream.
///
/// Exactly `N` operation lines are read after the header. Fewer lines is an
/// error; anything after the `N`th operation is ignored.
pub fn decode_stream(input: &str) -> Result<Vec<Operation>> {
    let mut lines = input.lines();
    let count = read_count(&mut lines, |line, reason| {
        Error::malformed_operation(line, reason)
    })?;

    let mut ops = Vec::with_capacity(count.min(MAX_PREALLOC));
    for i in 0..count {
        let line_no = i + 2;
        let line = lines.next().ok_or_else(|| {
            Error::malformed_operation(
                line_no,
                format!("stream truncated: expected {} operations, found {}", count, i),
            )
        })?;
        ops.push(decode_operation(line_no, line)?);
    }

    warn_trailing(lines, count, "operation stream");
    Ok(ops)
}

// =============================================================================
// Result stream
// =============================================================================

/// Encode oracle output: the count line, then one result per line.
pub fn encode_results(results: &[OpResult]) -> String {
    let mut out = String::with_capacity(16 + results.len() * 12);
    out.push_str(&results.len().to_string());
    out.push('\n');
    for result in results {
        out.push_str(result.as_line());
        out.push('\n');
    }
    out
}

/// Decode a result stream produced by the oracle or an implementation under
/// test. Surrounding whitespace on each result line is ignored.
pub fn decode_results(input: &str) -> Result<Vec<OpResult>> {
    let mut lines = input.lines();
    let count = read_count(&mut lines, |line, reason| {
        Error::malformed_result(line, reason)
    })?;

    let mut results = Vec::with_capacity(count.min(MAX_PREALLOC));
    for i in 0..count {
        let line = lines.next().ok_or_else(|| {
            Error::malformed_result(
                i + 2,
                format!("output truncated: expected {} results, found {}", count, i),
            )
        })?;
        results.push(OpResult::from_line(line.trim()));
    }

    warn_trailing(lines, count, "result stream");
    Ok(results)
}

// =============================================================================
// Helpers
// =============================================================================

fn check_token(field: &'static str, token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::InvalidToken {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if token.chars().any(char::is_whitespace) {
        return Err(Error::InvalidToken {
            field,
            reason: format!("'{}' contains whitespace", token),
        });
    }
    Ok(())
}

fn read_count(lines: &mut Lines<'_>, err: fn(usize, String) -> Error) -> Result<usize> {
    let header = lines
        .next()
        .ok_or_else(|| err(1, "missing count line".to_string()))?;
    header
        .trim()
        .parse::<usize>()
        .map_err(|_| err(1, format!("expected a non-negative count, found '{}'", header.trim())))
}

fn warn_trailing(lines: Lines<'_>, count: usize, what: &str) {
    let extra = lines.filter(|l| !l.trim().is_empty()).count();
    if extra > 0 {
        warn!(
            target: "kvharness::codec",
            count,
            extra,
            "Ignoring lines after the last entry of the {}", what
        );
    }
}
