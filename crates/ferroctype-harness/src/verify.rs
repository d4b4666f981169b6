//! Fixture replay against the ferroctype implementation.

use serde::{Deserialize, Serialize};

use crate::domain;
use crate::error::HarnessError;
use crate::fixtures::FixtureSet;

/// Outcome of replaying one fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub symbol: String,
    pub input: i32,
    pub expected: i32,
    pub actual: i32,
    pub passed: bool,
}

/// Replay every case in a fixture set against the registry implementations.
///
/// Fails fast on a symbol the registry does not know; a stale fixture file
/// should be recaptured, not silently skipped.
pub fn verify_fixture_set(set: &FixtureSet) -> Result<Vec<VerificationResult>, HarnessError> {
    set.cases
        .iter()
        .map(|case| {
            let sym = domain::lookup(&case.symbol)?;
            let actual = sym.eval(case.input);
            Ok(VerificationResult {
                case_name: case.name.clone(),
                symbol: case.symbol.clone(),
                input: case.input,
                expected: case.expected,
                actual,
                passed: actual == case.expected,
            })
        })
        .collect()
}
