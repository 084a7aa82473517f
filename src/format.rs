//! Line formatting
//!
//! Builds finished, printable lines from already-collected values:
//! - `request_line` - access log line themed by outcome class
//! - `memory_line` - resident memory and its delta
//! - `severity_line` - generic leveled log line
//!
//! All functions are pure; timing and sampling happen in the callers.

use crate::dye::paint;
use crate::status::classify;
use crate::theme::{
    self, request_role, RequestField, MEMORY_SIZE, MEMORY_TEXT, SEVERITY_TIMESTAMP,
};
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write};
use std::time::Duration;

/// Default strftime pattern for line timestamps (`10/18 14:05`)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d %H:%M";

/// Width the severity label is right-justified to
pub const SEVERITY_LABEL_WIDTH: usize = 5;

/// Direction of a memory change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub const fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

/// Access log line: `[stamp] code method path elapsed\n`
///
/// Every fragment is dyed with the role of the status's outcome class.
pub fn request_line(stamp: &str, code: &str, method: &str, path: &str, elapsed: &str) -> String {
    let class = classify(code);
    let role = |field| request_role(class, field);

    let mut last = paint(elapsed, role(RequestField::Plain));
    last.push('\n');

    [
        paint(&format!("[{}]", stamp), role(RequestField::Plain)),
        paint(code, role(RequestField::Code)),
        paint(method, role(RequestField::Method)),
        paint(path, role(RequestField::Path)),
        last,
    ]
    .join(" ")
}

/// Memory line: `RAM: <current>K (<sign><delta>K)`, without trailing newline
pub fn memory_line(sign: Sign, delta_kb: u64, current_kb: u64) -> String {
    let mut line = paint("RAM: ", MEMORY_TEXT);
    line.push_str(&paint(&current_kb.to_string(), MEMORY_SIZE));
    line.push_str(&paint("K (", MEMORY_TEXT));
    line.push_str(&paint(&format!("{}{}", sign, delta_kb), MEMORY_SIZE));
    line.push_str(&paint("K)", MEMORY_TEXT));
    line
}

/// Severity label dyed with its scale color (`ANY` when out of range)
pub fn severity_label(level: i32) -> String {
    paint(theme::severity_label(level), theme::severity_role(level))
}

/// Leveled log line: `[stamp] [LEVEL] module message \n`
///
/// Brackets around the level stay uncolored; the padded label inside them
/// takes the severity scale color, clamped for out-of-range levels.
pub fn severity_line(level: i32, stamp: &str, module: &str, message: &str) -> String {
    let label = format!(
        "{:>width$}",
        theme::severity_label(level),
        width = SEVERITY_LABEL_WIDTH
    );
    let level_fragment = format!("[{}]", paint(&label, theme::severity_role(level)));

    [
        paint(&format!("[{}]", stamp), SEVERITY_TIMESTAMP),
        level_fragment,
        module.to_string(),
        message.to_string(),
        "\n".to_string(),
    ]
    .join(" ")
}

/// Elapsed time in milliseconds, rounded to 4 decimals (`12.3456ms`)
pub fn elapsed(duration: Duration) -> String {
    elapsed_ms(duration.as_secs_f64() * 1000.0)
}

/// Render a millisecond value the way `elapsed` does
///
/// Negative and non-finite values render as `0.0ms`.
pub fn elapsed_ms(ms: f64) -> String {
    let ms = if ms.is_finite() && ms > 0.0 { ms } else { 0.0 };
    let rounded = (ms * 10_000.0).round() / 10_000.0;
    // too large to scale; already integral at this magnitude
    let rounded = if rounded.is_finite() { rounded } else { ms };
    let mut out = rounded.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out.push_str("ms");
    out
}

/// Format a timestamp, falling back to the default pattern if `format` is invalid
pub fn timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", at.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}
