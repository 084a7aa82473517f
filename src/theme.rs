//! Log themes - role assignments per line kind
//!
//! Tuned for dark terminal backgrounds.

use crate::palette::Role;
use crate::status::OutcomeClass;

/// Field of a request line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    /// Timestamp and elapsed time
    Plain,
    Code,
    Method,
    Path,
}

/// Role for a request field under an outcome class (`{class}_{field}`)
pub const fn request_role(class: OutcomeClass, field: RequestField) -> Role {
    match (class, field) {
        (OutcomeClass::Success, RequestField::Plain) => Role::SuccessPlain,
        (OutcomeClass::Success, RequestField::Code) => Role::SuccessCode,
        (OutcomeClass::Success, RequestField::Method) => Role::SuccessMethod,
        (OutcomeClass::Success, RequestField::Path) => Role::SuccessPath,
        (OutcomeClass::Warning, RequestField::Plain) => Role::WarningPlain,
        (OutcomeClass::Warning, RequestField::Code) => Role::WarningCode,
        (OutcomeClass::Warning, RequestField::Method) => Role::WarningMethod,
        (OutcomeClass::Warning, RequestField::Path) => Role::WarningPath,
        (OutcomeClass::Error, RequestField::Plain) => Role::ErrorPlain,
        (OutcomeClass::Error, RequestField::Code) => Role::ErrorCode,
        (OutcomeClass::Error, RequestField::Method) => Role::ErrorMethod,
        (OutcomeClass::Error, RequestField::Path) => Role::ErrorPath,
    }
}

// Memory lines
pub const MEMORY_TEXT: Role = Role::MemoryText;
pub const MEMORY_SIZE: Role = Role::MemorySize;

// Severity lines
pub const SEVERITY_TIMESTAMP: Role = Role::Slate;

/// Severity colors, indexed by level
pub const SEVERITY_SCALE: [Role; 6] = [
    Role::Yellow,
    Role::Green,
    Role::Orange,
    Role::Red,
    Role::Pink,
    Role::White,
];

/// Severity labels, indexed by level
pub const SEVERITY_LABELS: [&str; 6] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL", "ANY"];

/// Label used for levels outside `SEVERITY_LABELS`
pub const FALLBACK_LABEL: &str = "ANY";

fn level_slot(level: i32) -> Option<usize> {
    usize::try_from(level)
        .ok()
        .filter(|&i| i < SEVERITY_LABELS.len())
}

/// Label for a severity level, `ANY` when out of range
pub fn severity_label(level: i32) -> &'static str {
    level_slot(level)
        .map(|i| SEVERITY_LABELS[i])
        .unwrap_or(FALLBACK_LABEL)
}

/// Color role for a severity level, clamped to the scale
pub fn severity_role(level: i32) -> Role {
    let slot = level_slot(level).unwrap_or(SEVERITY_SCALE.len() - 1);
    SEVERITY_SCALE[slot]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_role_names_follow_class_and_field() {
        let classes = [
            OutcomeClass::Success,
            OutcomeClass::Warning,
            OutcomeClass::Error,
        ];
        let fields = [
            (RequestField::Plain, "plain"),
            (RequestField::Code, "code"),
            (RequestField::Method, "method"),
            (RequestField::Path, "path"),
        ];
        for class in classes {
            for (field, suffix) in fields {
                let expected = format!("{}_{}", class.name(), suffix);
                assert_eq!(request_role(class, field).name(), expected);
            }
        }
    }

    #[test]
    fn test_severity_in_range() {
        assert_eq!(severity_label(0), "DEBUG");
        assert_eq!(severity_label(3), "ERROR");
        assert_eq!(severity_role(0), Role::Yellow);
        assert_eq!(severity_role(2), Role::Orange);
        assert_eq!(severity_role(5), Role::White);
    }

    #[test]
    fn test_severity_out_of_range_clamps() {
        assert_eq!(severity_label(99), "ANY");
        assert_eq!(severity_role(99), Role::White);
        assert_eq!(severity_label(-1), "ANY");
        assert_eq!(severity_role(-1), Role::White);
        assert_eq!(severity_role(i32::MAX), Role::White);
    }

    #[test]
    fn test_memory_roles() {
        assert_eq!(MEMORY_TEXT.name(), "memory_text");
        assert_eq!(MEMORY_SIZE.name(), "memory_size");
        assert_eq!(SEVERITY_TIMESTAMP.name(), "slate");
    }
}
