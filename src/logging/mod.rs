//! Severity logging
//!
//! Plugs the severity line format into `tracing`:
//! - `Severity` - logger level to severity scale mapping
//! - `SeverityFormat` - event formatter for `tracing_subscriber`

pub mod entry;
pub mod format;

pub use entry::Severity;
pub use format::SeverityFormat;

use crate::config::FormatConfig;

/// Filter directive used when `RUST_LOG` is unset
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize tracing with severity-line output on stderr
///
/// Call early in main() before any logging occurs.
/// `verbose` lowers the default filter from warn to debug; `RUST_LOG`
/// overrides both.
pub fn init_tracing(verbose: bool, config: &FormatConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(SeverityFormat::new(config.timestamp_format.as_str()))
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
