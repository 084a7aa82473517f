//! Centralized error types
//!
//! All crate errors are represented by the `ChromaError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, ChromaError>`.
//!
//! Out-of-range severity levels and unclassified status codes are not errors:
//! they are recovered where they occur (`ANY` label, `error` class).

use std::fmt;

/// All chroma-log errors
#[derive(Debug)]
pub enum ChromaError {
    // === Palette ===
    /// Role name has no palette entry
    UndefinedRole { name: String },
    /// Background name is not one of the eight base colors
    UndefinedBackground { name: String },
    /// Hex triplet is not in the 256-color table
    UndefinedColor { hex: String },
    /// Color index outside the table (0-15 have no fixed RGB value)
    InvalidColorIndex { index: u8 },
    /// Color reference is neither a role name nor a 0-255 integer
    InvalidColorRef { value: String },

    // === Memory ===
    /// Resident set size could not be sampled
    MemorySample {
        source: std::io::Error,
    },
    /// Sampler output did not contain a usable RSS value
    MemoryParse { output: String },

    // === IO ===
    /// Writing a finished line failed
    Io { source: std::io::Error },
}

impl std::error::Error for ChromaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MemorySample { source } | Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for ChromaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedRole { name } => write!(f, "Undefined color role: {}", name),
            Self::UndefinedBackground { name } => {
                write!(f, "Undefined background role: {}", name)
            }
            Self::UndefinedColor { hex } => write!(f, "No 256-color entry for #{}", hex),
            Self::InvalidColorIndex { index } => {
                write!(f, "Color index {} has no table entry", index)
            }
            Self::InvalidColorRef { value } => {
                write!(f, "Not a role name or color index: {}", value)
            }
            Self::MemorySample { .. } => write!(f, "Cannot sample resident set size"),
            Self::MemoryParse { output } => {
                write!(f, "Cannot parse resident set size from {:?}", output)
            }
            Self::Io { .. } => write!(f, "Failed to write log line"),
        }
    }
}

impl From<std::io::Error> for ChromaError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Alias for Result with ChromaError
pub type Result<T> = std::result::Result<T, ChromaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_undefined_role() {
        let err = ChromaError::UndefinedRole {
            name: "teal".to_string(),
        };
        assert_eq!(err.to_string(), "Undefined color role: teal");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: ChromaError = std::io::Error::other("closed").into();
        assert!(matches!(err, ChromaError::Io { .. }));
        assert_eq!(err.source().map(|s| s.to_string()), Some("closed".into()));
    }
}
