//! WEBVTT subtitle demuxer
//!
//! Turns a parsed WEBVTT event stream into a time-indexed, seekable
//! sequence of box-framed subtitle packets (`vttc`/`vttx` containers, as
//! carried in ISOBMFF `wvtt` tracks) paced against a clock. The line-level
//! grammar parser and the downstream renderer are external collaborators;
//! see [`ParserEvent`] and [`SubtitleSink`].

pub(crate) mod boxes;
pub(crate) mod config;
pub(crate) mod cue;
pub(crate) mod demux;
pub(crate) mod error;
pub(crate) mod headers;
pub(crate) mod parser;
pub(crate) mod probe;
pub(crate) mod sink;

#[cfg(test)]
pub(crate) mod tests;

pub use boxes::{
    encode_cue, walk_boxes, BOX_CUE, BOX_CUE_CONTINUED, BOX_HEADER_LEN, BOX_IDENTIFIER,
    BOX_PAYLOAD, BOX_SETTINGS,
};
pub use config::{DemuxConfig, CLOCK_FREQ};
pub use cue::{Cue, CueStore};
pub use demux::{DemuxStep, WebvttDemuxer};
pub use error::{DemuxError, Result};
pub use headers::{build_extradata, HeaderAggregator, HeaderBlocks, EXTRADATA_MAGIC};
pub use parser::{HeaderKind, ParserEvent};
pub use probe::{probe, PROBE_LEN};
pub use sink::{StreamDescriptor, SubtitlePacket, SubtitleSink, WEBVTT_FOURCC};
