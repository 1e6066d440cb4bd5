//! The incremental marker scanner.
//!
//! This module provides [`MarkerScanner`], which consumes debugger output
//! in arrival-order chunks, emits all text for display, and extracts
//! location markers even when they straddle chunk boundaries.
//!
//! # Examples
//!
//! ```rust
//! use markmodem::{LocationMarker, MarkerScanner};
//!
//! let mut scanner = MarkerScanner::new();
//!
//! // The marker arrives split across two deliveries.
//! assert_eq!(scanner.feed("Breakpoint 1,"), "");
//! assert_eq!(scanner.feed(" at `prog.awk':5\n"), "Breakpoint 1, at `prog.awk':5\n");
//! assert_eq!(scanner.current_frame(), Some(&LocationMarker::new("prog.awk", 5)));
//!
//! // A line-only step marker inherits the file.
//! scanner.feed("next\n7 print x\n");
//! assert_eq!(scanner.current_frame(), Some(&LocationMarker::new("prog.awk", 7)));
//! ```

use tracing::{debug, trace};

use crate::{
    marker::LocationMarker,
    matcher::{self, MarkerShape},
};

/// Stateful incremental scanner over one debug session's output stream.
///
/// One scanner is bound to one child-process session: it owns the pending
/// unprocessed text and the last explicitly named source file, and nothing
/// else shares them. Simultaneous sessions each construct their own
/// scanner. All calls are synchronous; `feed` runs to completion before
/// the next chunk may be delivered.
#[derive(Debug, Default)]
pub struct MarkerScanner {
    /// Unprocessed tail from previous calls plus the newly arrived chunk.
    /// Grows only at the start of a `feed`, shrinks only by removing
    /// fully-consumed prefixes.
    pending: String,
    /// The most recently seen explicitly named file, inherited by
    /// line-only markers.
    current_file: Option<String>,
    latest: Option<LocationMarker>,
    frames: Vec<LocationMarker>,
}

impl MarkerScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one chunk of raw debugger output and return the text to
    /// display for it.
    ///
    /// Every complete marker in the (previous tail + chunk) buffer is
    /// extracted in order; its text is included in the returned output
    /// unchanged. Afterwards, a trailing region that could still become an
    /// explicit marker is withheld until the next call; everything else is
    /// returned. Concatenating all returned text plus [`finish`] yields
    /// the input byte-for-byte.
    ///
    /// This call cannot fail: unrecognized or malformed text passes
    /// through as ordinary output.
    ///
    /// [`finish`]: MarkerScanner::finish
    pub fn feed(&mut self, chunk: &str) -> String {
        self.pending.push_str(chunk);
        let mut output = String::new();

        while let Some(found) = matcher::find_marker(&self.pending) {
            let marker = match found.shape {
                MarkerShape::Explicit { file, line } => LocationMarker::new(file, line),
                MarkerShape::Implicit { line } => LocationMarker {
                    file: self.current_file.clone(),
                    line,
                },
            };
            // Re-affirmed even for the implicit case, where it is a no-op.
            self.current_file = marker.file.clone();
            debug!(file = ?marker.file, line = marker.line, "matched location marker");

            output.push_str(&self.pending[..found.end]);
            self.pending.drain(..found.end);
            self.latest = Some(marker.clone());
            self.frames.push(marker);
        }

        match matcher::holdback_offset(&self.pending) {
            Some(0) => {
                trace!(held = self.pending.len(), "holding back possible marker");
            }
            Some(offset) => {
                output.push_str(&self.pending[..offset]);
                self.pending.drain(..offset);
                trace!(held = self.pending.len(), "holding back possible marker");
            }
            None => {
                output.push_str(&self.pending);
                self.pending.clear();
            }
        }
        output
    }

    /// End the session, flushing any withheld partial text verbatim.
    #[must_use]
    pub fn finish(self) -> String {
        self.pending
    }

    /// The most recently extracted marker, the "current frame" a host
    /// navigates its source view to. A frame whose `file` is `None` means
    /// no file is known yet and no navigation should occur.
    #[must_use]
    pub fn current_frame(&self) -> Option<&LocationMarker> {
        self.latest.as_ref()
    }

    /// Drain the in-order queue of markers extracted since the previous
    /// call, so every update is observable even when one chunk carries
    /// several markers.
    pub fn take_frames(&mut self) -> Vec<LocationMarker> {
        core::mem::take(&mut self.frames)
    }
}
