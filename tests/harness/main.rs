//! Harness Integration Tests
//!
//! End-to-end tests across the workspace:
//! - Wire-level oracle scenarios (stream text in, output text out)
//! - Testable properties of generator and oracle together
//! - Scoring implementations under test against the oracle

#[path = "../common/mod.rs"]
mod common;

mod pipeline;
mod properties;
mod scenarios;
