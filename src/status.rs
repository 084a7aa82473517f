//! HTTP status classification
//!
//! Closed-list policy: only the listed codes are success or warning,
//! everything else (including malformed input) is an error.

use std::fmt;

/// Codes rendered with the success theme
pub const SUCCESS_CODES: [&str; 4] = ["200", "201", "202", "304"];

/// Codes rendered with the warning theme
pub const WARNING_CODES: [&str; 3] = ["301", "302", "303"];

/// Number of leading characters kept from a stringified status
pub const STATUS_DIGITS: usize = 3;

/// Outcome class of a request, in ascending severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeClass {
    Success,
    Warning,
    Error,
}

impl OutcomeClass {
    pub const fn name(self) -> &'static str {
        match self {
            OutcomeClass::Success => "success",
            OutcomeClass::Warning => "warning",
            OutcomeClass::Error => "error",
        }
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a status code by exact match against the fixed lists
pub fn classify(code: &str) -> OutcomeClass {
    if SUCCESS_CODES.contains(&code) {
        OutcomeClass::Success
    } else if WARNING_CODES.contains(&code) {
        OutcomeClass::Warning
    } else {
        OutcomeClass::Error
    }
}

/// Leading status digits of a stringified status (`"200 OK"` -> `"200"`)
pub fn status_code(raw: &str) -> &str {
    match raw.char_indices().nth(STATUS_DIGITS) {
        Some((end, _)) => &raw[..end],
        None => raw,
    }
}
