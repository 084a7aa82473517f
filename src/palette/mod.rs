//! Color palette
//!
//! Resolves semantic roles to terminal color indices:
//! - `Role` - foreground roles (themed fields and named colors)
//! - `BackgroundRole` - the eight ANSI base backgrounds
//! - `ColorRef` - either a role or a raw index, resolved before dyeing
//! - `hex` - the 256-color reference table

pub mod hex;

use crate::error::{ChromaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal color slot (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(pub u8);

impl fmt::Display for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Foreground color role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // Request lines
    SuccessPlain,
    SuccessCode,
    SuccessMethod,
    SuccessPath,
    WarningPlain,
    WarningCode,
    WarningMethod,
    WarningPath,
    ErrorPlain,
    ErrorCode,
    ErrorMethod,
    ErrorPath,
    // Memory lines
    MemoryText,
    MemorySize,
    // Named colors
    Amber,
    Black,
    Orange,
    Pink,
    Purple,
    Slate,
    Charcoal,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Role {
    /// Every role, in palette order
    pub const ALL: [Role; 28] = [
        Role::SuccessPlain,
        Role::SuccessCode,
        Role::SuccessMethod,
        Role::SuccessPath,
        Role::WarningPlain,
        Role::WarningCode,
        Role::WarningMethod,
        Role::WarningPath,
        Role::ErrorPlain,
        Role::ErrorCode,
        Role::ErrorMethod,
        Role::ErrorPath,
        Role::MemoryText,
        Role::MemorySize,
        Role::Amber,
        Role::Black,
        Role::Orange,
        Role::Pink,
        Role::Purple,
        Role::Slate,
        Role::Charcoal,
        Role::Red,
        Role::Green,
        Role::Yellow,
        Role::Blue,
        Role::Magenta,
        Role::Cyan,
        Role::White,
    ];

    /// Snake-case role name (`success_path`, `slate`)
    pub const fn name(self) -> &'static str {
        match self {
            Role::SuccessPlain => "success_plain",
            Role::SuccessCode => "success_code",
            Role::SuccessMethod => "success_method",
            Role::SuccessPath => "success_path",
            Role::WarningPlain => "warning_plain",
            Role::WarningCode => "warning_code",
            Role::WarningMethod => "warning_method",
            Role::WarningPath => "warning_path",
            Role::ErrorPlain => "error_plain",
            Role::ErrorCode => "error_code",
            Role::ErrorMethod => "error_method",
            Role::ErrorPath => "error_path",
            Role::MemoryText => "memory_text",
            Role::MemorySize => "memory_size",
            Role::Amber => "amber",
            Role::Black => "black",
            Role::Orange => "orange",
            Role::Pink => "pink",
            Role::Purple => "purple",
            Role::Slate => "slate",
            Role::Charcoal => "charcoal",
            Role::Red => "red",
            Role::Green => "green",
            Role::Yellow => "yellow",
            Role::Blue => "blue",
            Role::Magenta => "magenta",
            Role::Cyan => "cyan",
            Role::White => "white",
        }
    }

    /// Look up a role by its snake-case name
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Role::from_name(s).ok_or_else(|| ChromaError::UndefinedRole { name: s.to_string() })
    }
}

/// Foreground color index for a role
pub const fn foreground(role: Role) -> ColorIndex {
    let index = match role {
        Role::SuccessPlain => 22,
        Role::SuccessCode => 40,
        Role::SuccessMethod => 42,
        Role::SuccessPath => 30,
        Role::WarningPlain => 94,
        Role::WarningCode => 208,
        Role::WarningMethod => 184,
        Role::WarningPath => 100,
        Role::ErrorPlain => 52,
        Role::ErrorCode => 196,
        Role::ErrorMethod => 202,
        Role::ErrorPath => 130,
        Role::MemoryText => 57,
        Role::MemorySize => 27,
        Role::Amber => 214,
        Role::Black => 38,
        Role::Orange => 202,
        Role::Pink => 165,
        Role::Purple => 57,
        Role::Slate => 241,
        Role::Charcoal => 237,
        Role::Red => 160,
        Role::Green => 76,
        Role::Yellow => 226,
        Role::Blue => 27,
        Role::Magenta => 165,
        Role::Cyan => 45,
        Role::White => 47,
    };
    ColorIndex(index)
}

/// Background role (ANSI base colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundRole {
    /// Terminal default background
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BackgroundRole {
    pub const ALL: [BackgroundRole; 8] = [
        BackgroundRole::Black,
        BackgroundRole::Red,
        BackgroundRole::Green,
        BackgroundRole::Yellow,
        BackgroundRole::Blue,
        BackgroundRole::Magenta,
        BackgroundRole::Cyan,
        BackgroundRole::White,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BackgroundRole::Black => "black",
            BackgroundRole::Red => "red",
            BackgroundRole::Green => "green",
            BackgroundRole::Yellow => "yellow",
            BackgroundRole::Blue => "blue",
            BackgroundRole::Magenta => "magenta",
            BackgroundRole::Cyan => "cyan",
            BackgroundRole::White => "white",
        }
    }
}

impl FromStr for BackgroundRole {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        BackgroundRole::ALL
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| ChromaError::UndefinedBackground { name: s.to_string() })
    }
}

/// Leading SGR code for a background role
///
/// `black` is 38 (extended foreground on the terminal's own background);
/// the others are the 41-47 base background codes.
pub const fn background(role: BackgroundRole) -> u8 {
    match role {
        BackgroundRole::Black => 38,
        BackgroundRole::Red => 41,
        BackgroundRole::Green => 42,
        BackgroundRole::Yellow => 43,
        BackgroundRole::Blue => 44,
        BackgroundRole::Magenta => 45,
        BackgroundRole::Cyan => 46,
        BackgroundRole::White => 47,
    }
}

/// Foreground color given either by role or by raw index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRef {
    Named(Role),
    Indexed(ColorIndex),
}

impl ColorRef {
    /// Resolve to a concrete color index
    #[inline]
    pub const fn resolve(self) -> ColorIndex {
        match self {
            ColorRef::Named(role) => foreground(role),
            ColorRef::Indexed(index) => index,
        }
    }
}

impl From<Role> for ColorRef {
    fn from(role: Role) -> Self {
        ColorRef::Named(role)
    }
}

impl From<ColorIndex> for ColorRef {
    fn from(index: ColorIndex) -> Self {
        ColorRef::Indexed(index)
    }
}

impl FromStr for ColorRef {
    type Err = ChromaError;

    /// Accepts a role name (`slate`) or a decimal index (`241`)
    fn from_str(s: &str) -> Result<Self> {
        if let Some(role) = Role::from_name(s) {
            return Ok(ColorRef::Named(role));
        }
        if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() {
            return s
                .parse::<u8>()
                .map(|i| ColorRef::Indexed(ColorIndex(i)))
                .map_err(|_| ChromaError::InvalidColorRef {
                    value: s.to_string(),
                });
        }
        Err(ChromaError::UndefinedRole {
            name: s.to_string(),
        })
    }
}
