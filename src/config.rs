//! Formatting configuration
//!
//! Plain serde structs with defaults. No file is read here: hosts embed
//! `Config` in their own configuration, and the CLI builds it from flags.

use crate::format::DEFAULT_TIMESTAMP_FORMAT;
use crate::palette::BackgroundRole;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub memory: MemoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// strftime pattern for line timestamps
    pub timestamp_format: String,
    /// Background for ad-hoc dyeing (themed lines always use the default)
    pub background: BackgroundRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Sample RSS around each unit of work
    pub enabled: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            background: BackgroundRole::Black,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.format.timestamp_format, "%m/%d %H:%M");
        assert_eq!(config.format.background, BackgroundRole::Black);
        assert!(config.memory.enabled);
    }

    #[test]
    fn test_embedded_partial_section() {
        // Host config with only some fields - rest should use defaults
        #[derive(Deserialize)]
        struct HostConfig {
            chroma: Config,
        }

        let host: HostConfig = toml::from_str(
            r#"
[chroma.format]
background = "blue"
"#,
        )
        .unwrap();

        assert_eq!(host.chroma.format.background, BackgroundRole::Blue);
        assert_eq!(host.chroma.format.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert!(host.chroma.memory.enabled);
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            format: FormatConfig {
                timestamp_format: "%H:%M:%S".to_string(),
                background: BackgroundRole::Cyan,
            },
            memory: MemoryConfig { enabled: false },
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&text).unwrap();

        assert_eq!(restored.format.timestamp_format, "%H:%M:%S");
        assert_eq!(restored.format.background, BackgroundRole::Cyan);
        assert!(!restored.memory.enabled);
    }

    #[test]
    fn test_empty_document() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.format.background, BackgroundRole::Black);
    }
}
