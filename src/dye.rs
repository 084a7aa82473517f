//! Escape-sequence wrapping
//!
//! Output format: `ESC[<bg>;5;<fg>m<text>ESC[0m`.
//! Text is passed through verbatim. Strip or sanitize untrusted input before
//! dyeing it, since embedded control sequences reach the terminal unchanged.

use crate::palette::{background, BackgroundRole, ColorRef};

const ESC: char = '\x1b';

/// Reset sequence closing every dyed fragment
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in the escape sequence for `fg` on `bg`
pub fn dye(text: &str, fg: impl Into<ColorRef>, bg: BackgroundRole) -> String {
    let fg = fg.into().resolve();
    format!("{ESC}[{};5;{}m{}{RESET}", background(bg), fg, text)
}

/// Dye on the default (black) background
#[inline]
pub fn paint(text: &str, fg: impl Into<ColorRef>) -> String {
    dye(text, fg, BackgroundRole::default())
}

/// Remove SGR sequences (`ESC[<digits;...>m`) from a string
///
/// Other escape sequences are left in place.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find("\x1b[") {
        out.push_str(&rest[..at]);
        let params = &rest[at + 2..];
        let len = params
            .find(|c: char| !(c.is_ascii_digit() || c == ';'))
            .unwrap_or(params.len());
        if params[len..].starts_with('m') {
            rest = &params[len + 1..];
        } else {
            out.push_str("\x1b[");
            rest = params;
        }
    }
    out.push_str(rest);
    out
}
