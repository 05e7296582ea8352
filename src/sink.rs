//! Downstream sink interface
//!
//! The demuxer does not render anything itself; it registers one subtitle
//! stream with a host-provided sink and then hands it timestamped,
//! box-framed packets plus clock references.

use bytes::Bytes;

use crate::error::Result;

/// Four-character codec identifier delivered with the stream descriptor
pub const WEBVTT_FOURCC: [u8; 4] = *b"wvtt";

/// Stream registration payload, delivered exactly once at open time
#[derive(Debug, Clone)]
pub struct StreamDescriptor {
    /// Codec four-cc (`wvtt`)
    pub codec: [u8; 4],
    /// One-shot initialization blob: WEBVTT magic + region/style headers
    pub extradata: Bytes,
}

/// One encoded cue, ready for the renderer
#[derive(Debug, Clone)]
pub struct SubtitlePacket {
    /// Box-framed cue data (`vttc`/`vttx` container)
    pub data: Bytes,
    /// Presentation timestamp in microseconds (clock base + cue start)
    pub pts: i64,
    /// Display duration in microseconds (0 for open-ended cues)
    pub duration: i64,
    /// Set on the first packet delivered after a seek
    pub discontinuity: bool,
}

/// Receiver for the demuxer's output
pub trait SubtitleSink {
    /// Register the subtitle stream. Called exactly once, before any
    /// packet. An error here aborts the open.
    fn add_stream(&mut self, desc: &StreamDescriptor) -> Result<()>;

    /// Deliver one encoded cue
    fn send(&mut self, packet: SubtitlePacket);

    /// Publish a clock reference (only while the demuxer paces itself)
    fn set_clock(&mut self, reference: i64);
}
