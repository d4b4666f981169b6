//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single captured reference case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier, `<symbol>@<input>`.
    pub name: String,
    /// C symbol being tested.
    pub symbol: String,
    /// Integer argument passed to the symbol.
    pub input: i32,
    /// Reference result (predicates already normalized to 0/1).
    pub expected: i32,
}

/// A collection of reference cases captured from the host libc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Parse a fixture set from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Write the fixture set to a file path as pretty JSON.
    pub fn write_file(&self, path: &std::path::Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
