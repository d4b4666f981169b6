//! Differential conformance harness for ferroctype.
//!
//! This crate provides:
//! - Fixture capture: record host libc classification behavior as JSON
//!   reference data
//! - Fixture verify: replay captured fixtures against our implementation
//! - Report generation: human-readable + machine-readable conformance reports
//! - Structured logging: JSONL log records with SHA-256 artifact indexing
//!
//! Host libc calls are confined to the [`host`] module; everything else is
//! safe code.

#![deny(unsafe_code)]

pub mod capture;
pub mod domain;
pub mod error;
pub mod fixtures;
#[allow(unsafe_code)]
pub mod host;
pub mod report;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use verify::VerificationResult;
