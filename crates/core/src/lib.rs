//! Core types for kvharness
//!
//! This crate defines what generator, oracle and implementation under test
//! agree on:
//! - Operation: Read / Write / Delete records
//! - OpResult: value, `-SUCCESS-` or `-ERROR-` per operation
//! - Codec: the line format for operation streams and result streams
//! - Error: fatal harness conditions

#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod operation;

pub use codec::{
    decode_operation, decode_results, decode_stream, encode_operation, encode_results,
    encode_stream,
};
pub use error::{Error, Result};
pub use operation::{OpKind, OpResult, Operation, ERROR_MARKER, SUCCESS_MARKER};
