//! Operation and result types exchanged between generator, oracle and the
//! implementation under test.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal printed for a successful write or delete.
pub const SUCCESS_MARKER: &str = "-SUCCESS-";

/// Literal printed for a read or delete of an absent key.
pub const ERROR_MARKER: &str = "-ERROR-";

/// The three operation kinds and their wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// Tag `1`
    Read,
    /// Tag `2`
    Write,
    /// Tag `3`
    Delete,
}

impl OpKind {
    /// All kinds, in tag order.
    pub const ALL: [OpKind; 3] = [OpKind::Read, OpKind::Write, OpKind::Delete];

    /// Wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            OpKind::Read => "1",
            OpKind::Write => "2",
            OpKind::Delete => "3",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<OpKind> {
        match tag {
            "1" => Some(OpKind::Read),
            "2" => Some(OpKind::Write),
            "3" => Some(OpKind::Delete),
            _ => None,
        }
    }

    /// Number of whitespace-separated fields a line of this kind carries,
    /// including the tag.
    pub fn field_count(self) -> usize {
        match self {
            OpKind::Read | OpKind::Delete => 2,
            OpKind::Write => 3,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Read => "read",
            OpKind::Write => "write",
            OpKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A single key-value operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Read the current value of `key`.
    Read { key: String },
    /// Insert or overwrite `key` with `value`.
    Write { key: String, value: String },
    /// Remove `key` if present.
    Delete { key: String },
}

impl Operation {
    /// Build a `Read`.
    pub fn read(key: impl Into<String>) -> Self {
        Operation::Read { key: key.into() }
    }

    /// Build a `Write`.
    pub fn write(key: impl Into<String>, value: impl Into<String>) -> Self {
        Operation::Write {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Build a `Delete`.
    pub fn delete(key: impl Into<String>) -> Self {
        Operation::Delete { key: key.into() }
    }

    /// The kind of this operation.
    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Read { .. } => OpKind::Read,
            Operation::Write { .. } => OpKind::Write,
            Operation::Delete { .. } => OpKind::Delete,
        }
    }

    /// The key this operation targets.
    pub fn key(&self) -> &str {
        match self {
            Operation::Read { key } | Operation::Write { key, .. } | Operation::Delete { key } => {
                key
            }
        }
    }
}

/// The expected output of one operation.
///
/// `NotFound` is an ordinary result, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpResult {
    /// Successful read; the stored value.
    Value(String),
    /// Write, or delete of a present key.
    Success,
    /// Read or delete of an absent key.
    NotFound,
}

impl OpResult {
    /// Interpret one line of result output.
    ///
    /// The two markers map back to `Success` and `NotFound`; anything else is
    /// a read value.
    pub fn from_line(line: &str) -> Self {
        match line {
            SUCCESS_MARKER => OpResult::Success,
            ERROR_MARKER => OpResult::NotFound,
            value => OpResult::Value(value.to_string()),
        }
    }

    /// The output line for this result.
    ///
    /// A read value spelled like a marker prints the same line as the marker,
    /// so results are compared by this line, not by variant.
    pub fn as_line(&self) -> &str {
        match self {
            OpResult::Value(v) => v,
            OpResult::Success => SUCCESS_MARKER,
            OpResult::NotFound => ERROR_MARKER,
        }
    }
}

impl fmt::Display for OpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_line())
    }
}
