//! Streaming, incremental extraction of source-location markers from the
//! output of an interactive line-oriented debugger.
//!
//! A debugger writing to a pipe delivers its output in arbitrary OS-sized
//! chunks, so a location marker such as ``Breakpoint 1, main() at
//! `prog.awk':5`` can be split anywhere, including in the middle of a word.
//! [`MarkerScanner`] consumes those chunks in arrival order, returns every
//! byte of non-marker text for immediate display, and tracks the most
//! recently reported source position so a host can move its source view.
//!
//! ```rust
//! use markmodem::{LocationMarker, MarkerScanner};
//!
//! let mut scanner = MarkerScanner::new();
//! let shown = scanner.feed("Breakpoint 1, main() at `prog.awk':5\n");
//! assert_eq!(shown, "Breakpoint 1, main() at `prog.awk':5\n");
//! assert_eq!(scanner.current_frame(), Some(&LocationMarker::new("prog.awk", 5)));
//! ```
//!
//! The crate also carries the small fixed data surfaces a host needs to
//! drive the debugger itself: the [`DebuggerCommand`] table of
//! command-string templates and the [`PromptPattern`] used to detect that
//! the child is waiting for input. It spawns no processes and performs no
//! I/O of its own.

mod command;
mod marker;
mod matcher;
mod prompt;
mod scanner;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use command::{CommandContext, DebuggerCommand, TemplateError, expand};
pub use marker::LocationMarker;
pub use prompt::PromptPattern;
pub use scanner::MarkerScanner;
