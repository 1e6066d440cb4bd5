//! The location frame type produced by the scanner.
//!
//! A [`LocationMarker`] is one extracted "execution is now at file X,
//! line Y" position. The file is optional: a line-only marker seen before
//! any file-carrying marker yields a frame with no known file, which a
//! host must treat as "do not navigate" rather than as an error.
//!
//! # Examples
//!
//! ```
//! use markmodem::LocationMarker;
//!
//! let frame = LocationMarker::new("prog.awk", 5);
//! assert_eq!(frame.to_string(), "prog.awk:5");
//!
//! let unresolved = LocationMarker::without_file(7);
//! assert_eq!(unresolved.file, None);
//! assert_eq!(unresolved.to_string(), "?:7");
//! ```

use core::fmt;

/// A source position reported by the debugger.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct LocationMarker {
    /// Source file named by the debugger, or `None` when only line-relative
    /// markers have been seen so far in this session.
    pub file: Option<String>,
    /// 1-based source line.
    pub line: u32,
}

impl LocationMarker {
    /// A marker that names its own file.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line,
        }
    }

    /// A marker with unresolved file context.
    #[must_use]
    pub fn without_file(line: u32) -> Self {
        Self { file: None, line }
    }
}

impl fmt::Display for LocationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}", self.line),
            None => write!(f, "?:{}", self.line),
        }
    }
}
