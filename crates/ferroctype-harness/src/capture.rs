//! Host fixture capture.
//!
//! Records host libc behavior for every registry symbol over the host table
//! domain as a JSON reference set. Captured sets are replayed by
//! [`crate::verify`].

use crate::domain::SYMBOLS;
use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::host;
use crate::structured_log::now_utc;

/// Schema version stamped on captured sets.
pub const FIXTURE_SCHEMA_VERSION: &str = "v1";

/// Capture a full host reference set: every symbol over its host-parity
/// domain (the whole table for predicates; EOF plus the byte domain for
/// conversions, whose host tables alias sign-extended negatives).
pub fn capture_host_fixture_set() -> Result<FixtureSet, HarnessError> {
    let mut cases = Vec::with_capacity(SYMBOLS.len() * 384);
    for sym in SYMBOLS {
        for c in sym.host_parity_domain() {
            cases.push(FixtureCase {
                name: format!("{}@{c}", sym.name),
                symbol: sym.name.to_string(),
                input: c,
                expected: host::eval_symbol(sym, c)?,
            });
        }
    }
    Ok(FixtureSet {
        version: FIXTURE_SCHEMA_VERSION.to_string(),
        family: "ctype".to_string(),
        captured_at: now_utc(),
        cases,
    })
}
