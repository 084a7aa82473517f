//! Severity-line event formatter
//!
//! Renders every tracing event as `[stamp] [LEVEL] target message`.

use super::Severity;
use crate::format::{severity_line, timestamp, DEFAULT_TIMESTAMP_FORMAT};
use chrono::Local;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// `FormatEvent` producing themed severity lines
#[derive(Debug, Clone)]
pub struct SeverityFormat {
    timestamp_format: String,
}

impl SeverityFormat {
    pub fn new(timestamp_format: impl Into<String>) -> Self {
        Self {
            timestamp_format: timestamp_format.into(),
        }
    }
}

impl Default for SeverityFormat {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

/// Collects event fields as plain text
///
/// The message is written as-is so dyed fragments reach the terminal intact;
/// other fields follow it as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    out: String,
}

impl MessageVisitor {
    fn separate(&mut self) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.separate();
            self.out.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.separate();
        if field.name() == "message" {
            let _ = write!(self.out, "{:?}", value);
        } else {
            let _ = write!(self.out, "{}={:?}", field.name(), value);
        }
    }
}

impl<S, N> FormatEvent<S, N> for SeverityFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let line = severity_line(
            Severity::from(*meta.level()).level(),
            &timestamp(&Local::now(), &self.timestamp_format),
            meta.target(),
            &visitor.out,
        );
        writer.write_str(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dye::{paint, strip};
    use crate::format::{memory_line, Sign};
    use crate::palette::Role;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .event_format(SeverityFormat::new("%Y"))
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);
        buf.contents()
    }

    #[test]
    fn test_info_event_line() {
        let out = capture(|| tracing::info!(target: "app", "server started"));
        let plain = strip(&out);

        assert!(plain.starts_with('['));
        assert!(plain.ends_with("] [ INFO] app server started \n"));
        assert!(out.contains(&paint(" INFO", Role::Green)));
    }

    #[test]
    fn test_error_event_uses_error_color() {
        let out = capture(|| tracing::error!(target: "db", "connection lost"));
        assert!(out.contains(&paint("ERROR", Role::Red)));
        assert!(strip(&out).contains("[ERROR] db connection lost"));
    }

    #[test]
    fn test_trace_maps_to_debug() {
        let out = capture(|| tracing::trace!(target: "net", "tick"));
        assert!(strip(&out).contains("[DEBUG] net tick"));
    }

    #[test]
    fn test_fields_follow_message() {
        let out = capture(|| tracing::warn!(target: "app", retries = 3, "slow upstream"));
        assert!(strip(&out).contains("[ WARN] app slow upstream retries=3"));
    }

    #[test]
    fn test_dyed_message_passes_through_unescaped() {
        let mem = memory_line(Sign::Plus, 512, 20480);
        let out = capture(|| tracing::info!(target: "app", "{}", mem));

        assert!(out.contains(&mem));
        assert!(!out.contains("\\x1b"));
        assert!(strip(&out).ends_with("] [ INFO] app RAM: 20480K (+512K) \n"));
    }

    #[test]
    fn test_string_fields_are_debug_quoted() {
        let out = capture(|| tracing::info!(target: "app", peer = "10.0.0.1", "accepted"));
        assert!(strip(&out).contains("app accepted peer=\"10.0.0.1\""));
    }
}
