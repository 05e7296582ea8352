//! External line-parser interface
//!
//! The line-level WEBVTT grammar parser is an external collaborator: it
//! reads the raw text stream and yields a finite sequence of events, one
//! per completed cue or header declaration line. The demuxer consumes the
//! whole sequence eagerly, in a single blocking pass, at open time.

use crate::cue::Cue;

/// Kind of header declaration block a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// A `REGION` block line
    Region,
    /// A `STYLE` block line
    Style,
}

/// One event produced by the external line parser
#[derive(Debug, Clone)]
pub enum ParserEvent {
    /// A fully-populated cue
    Cue(Cue),
    /// One header declaration line, without its trailing newline
    Header { kind: HeaderKind, line: String },
}

impl ParserEvent {
    /// Convenience constructor for header events
    pub fn header(kind: HeaderKind, line: impl Into<String>) -> Self {
        Self::Header {
            kind,
            line: line.into(),
        }
    }
}
