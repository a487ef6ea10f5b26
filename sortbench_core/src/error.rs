//! Errors surfaced by the core.
//!
//! Sorting itself never fails. The only fallible operations are the textual lookups of an
//! [`AlgorithmKind`](crate::orst::AlgorithmKind) or a [`DataSetKind`](crate::data::DataSetKind).

use std::error::Error as StdError;
use std::fmt;

/// Raised when a name does not match any known algorithm or data set kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    what: &'static str,
    value: String,
    expected: Vec<&'static str>,
}

impl ParseKindError {
    pub(crate) fn new(what: &'static str, value: &str, expected: Vec<&'static str>) -> Self {
        Self {
            what,
            value: value.to_string(),
            expected,
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown {}: `{}` (expected one of: {})",
            self.what,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl StdError for ParseKindError {}
