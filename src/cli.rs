//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use chroma_log::{BackgroundRole, ColorRef};
use clap::{Parser, Subcommand};

// =============================================================================
// CLI Definition
// =============================================================================

/// Render 256-color access, memory and severity log lines
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Strip escape sequences from output
    #[arg(long, global = true)]
    pub plain: bool,

    /// strftime pattern for timestamps
    #[arg(long, value_name = "FORMAT", global = true)]
    pub timestamp_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dye text with a role name or color index
    Dye {
        text: String,

        /// Foreground role (`slate`) or index (`241`)
        #[arg(long, default_value = "white")]
        fg: ColorRef,

        /// Background role
        #[arg(long)]
        bg: Option<BackgroundRole>,
    },

    /// Render an access log line
    Request {
        #[arg(long, default_value = "200")]
        status: String,

        #[arg(long, default_value = "GET")]
        method: String,

        #[arg(long, default_value = "/")]
        path: String,

        /// Elapsed milliseconds
        #[arg(long, default_value_t = 0.0)]
        elapsed_ms: f64,
    },

    /// Render a memory line
    ///
    /// With `--rss`, renders the given values. Otherwise samples this process
    /// around allocating `--alloc-kb` kilobytes.
    Memory {
        /// Current RSS (KB)
        #[arg(long, requires = "delta")]
        rss: Option<u64>,

        /// Signed RSS change (KB)
        #[arg(long, allow_negative_numbers = true)]
        delta: Option<i64>,

        /// Kilobytes to allocate between live samples
        #[arg(long, default_value_t = 1024)]
        alloc_kb: usize,
    },

    /// Render a severity line
    Severity {
        /// Severity level (0 = DEBUG ... 5 = ANY)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        level: i32,

        #[arg(long, default_value = "main")]
        module: String,

        message: String,
    },

    /// Resolve a hex triplet to its 256-color index
    Resolve { hex: String },

    /// Print the palette roles and the 256-color table
    Palette,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_log::{ColorIndex, Role};

    #[test]
    fn test_cli_parse_dye_defaults() {
        let cli = Cli::parse_from(["chroma", "dye", "hello"]);
        assert!(!cli.verbose);
        assert!(!cli.plain);
        match cli.command {
            Command::Dye { text, fg, bg } => {
                assert_eq!(text, "hello");
                assert_eq!(fg, ColorRef::Named(Role::White));
                assert_eq!(bg, None);
            }
            _ => panic!("Expected Dye command"),
        }
    }

    #[test]
    fn test_cli_parse_dye_index_and_bg() {
        let cli = Cli::parse_from(["chroma", "dye", "x", "--fg", "99", "--bg", "red"]);
        match cli.command {
            Command::Dye { fg, bg, .. } => {
                assert_eq!(fg, ColorRef::Indexed(ColorIndex(99)));
                assert_eq!(bg, Some(BackgroundRole::Red));
            }
            _ => panic!("Expected Dye command"),
        }
    }

    #[test]
    fn test_cli_rejects_undefined_role() {
        assert!(Cli::try_parse_from(["chroma", "dye", "x", "--fg", "teal"]).is_err());
    }

    #[test]
    fn test_cli_parse_request() {
        let cli = Cli::parse_from([
            "chroma",
            "-v",
            "request",
            "--status",
            "404",
            "--path",
            "/missing",
            "--elapsed-ms",
            "3.5",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Request {
                status,
                method,
                path,
                elapsed_ms,
            } => {
                assert_eq!(status, "404");
                assert_eq!(method, "GET");
                assert_eq!(path, "/missing");
                assert_eq!(elapsed_ms, 3.5);
            }
            _ => panic!("Expected Request command"),
        }
    }

    #[test]
    fn test_cli_parse_memory_negative_delta() {
        let cli = Cli::parse_from(["chroma", "memory", "--rss", "2048", "--delta", "-128"]);
        match cli.command {
            Command::Memory { rss, delta, .. } => {
                assert_eq!(rss, Some(2048));
                assert_eq!(delta, Some(-128));
            }
            _ => panic!("Expected Memory command"),
        }
    }

    #[test]
    fn test_cli_parse_severity_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chroma", "severity", "--level", "99", "boot", "--plain"]);
        assert!(cli.plain);
        match cli.command {
            Command::Severity { level, message, .. } => {
                assert_eq!(level, 99);
                assert_eq!(message, "boot");
            }
            _ => panic!("Expected Severity command"),
        }
    }
}
