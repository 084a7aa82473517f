//! chroma-log - 256-color formatting for access, memory and severity logs
//!
//! Layers, leaves first:
//! - `palette` - roles to color indices, plus the 256-color hex table
//! - `theme` - role assignments per line kind
//! - `status` - HTTP status to outcome class
//! - `dye` - escape-sequence wrapping
//! - `format` - finished request, memory and severity lines
//!
//! Adapters feeding the formatter:
//! - `middleware` - request timing and access log writer
//! - `probe` - resident memory sampling
//! - `logging` - `tracing` event formatter and subscriber setup

pub mod config;
pub mod dye;
pub mod error;
pub mod format;
pub mod logging;
pub mod middleware;
pub mod palette;
pub mod probe;
pub mod status;
pub mod theme;

pub use dye::{dye, paint, strip};
pub use error::{ChromaError, Result};
pub use format::{memory_line, request_line, severity_line, Sign};
pub use palette::{BackgroundRole, ColorIndex, ColorRef, Role};
pub use status::{classify, OutcomeClass};
