//! Shared helpers for behaviour-driven catalog suites.
//!
//! `StepText` strips the quotes scenarios use around values with spaces, and
//! `key_path` turns dotted keys into namespace paths.

use std::convert::Infallible;
use std::str::FromStr;

/// Wrapper for values supplied via behaviour-driven test steps.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl AsRef<str> for StepText {
    fn as_ref(&self) -> &str {
        self.raw.as_str()
    }
}

impl StepText {
    /// Consumes the step value, yielding the parsed string.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// Split a dotted key into its namespace segments.
pub fn key_path(key: &str) -> Vec<String> {
    key.split('.').map(str::to_owned).collect()
}
