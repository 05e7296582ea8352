//! Pull-driven cue delivery and the host control surface
//!
//! The demuxer ingests the whole parser event stream at open time, then
//! serves cues one pull at a time: every [`WebvttDemuxer::demux`] call
//! delivers all cues due at the current barrier and, unless slaved to an
//! external clock, advances the barrier by one tick. Seeks reposition the
//! cursor through the store's start-time index.

use crate::boxes::encode_cue;
use crate::config::DemuxConfig;
use crate::cue::CueStore;
use crate::error::{DemuxError, Result};
use crate::headers::{build_extradata, HeaderAggregator};
use crate::parser::ParserEvent;
use crate::probe::probe;
use crate::sink::{StreamDescriptor, SubtitlePacket, SubtitleSink, WEBVTT_FOURCC};

/// Outcome of one demux step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemuxStep {
    /// More cues remain; keep pulling
    More,
    /// End of stream: every cue has been served
    End,
}

/// WEBVTT cue demultiplexer.
///
/// Holds the ordered cue store and the pacing state. All stepping and
/// seeking goes through `&mut self`; queries are plain reads.
pub struct WebvttDemuxer {
    cues: CueStore,
    config: DemuxConfig,
    /// External clock drives the barrier; self-pacing is off
    slaved: bool,
    /// Force a clock publish before the next delivery (set at open and
    /// after every seek)
    first_time: bool,
    /// Mark the next delivered packet as discontinuous
    discontinuity_pending: bool,
    next_demux_time: i64,
}

impl WebvttDemuxer {
    /// Probe the stream head, then open.
    ///
    /// `head` is the first [`PROBE_LEN`] bytes peeked from the stream;
    /// anything that does not carry the WEBVTT signature is declined with
    /// [`DemuxError::UnrecognizedStream`] and no side effects.
    ///
    /// [`PROBE_LEN`]: crate::probe::PROBE_LEN
    pub fn open_with_probe<I>(
        head: &[u8],
        events: I,
        sink: &mut dyn SubtitleSink,
        config: DemuxConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = ParserEvent>,
    {
        if !probe(head) {
            tracing::debug!("subtitle demux discarded");
            return Err(DemuxError::UnrecognizedStream);
        }
        Self::open(events, sink, config)
    }

    /// Consume the parser event stream to completion, repair cue ordering,
    /// and register the stream (with its extradata) with the sink.
    ///
    /// This is the single blocking parse pass; after it returns the store
    /// never grows again.
    pub fn open<I>(events: I, sink: &mut dyn SubtitleSink, config: DemuxConfig) -> Result<Self>
    where
        I: IntoIterator<Item = ParserEvent>,
    {
        let mut cues = CueStore::new();
        let mut headers = HeaderAggregator::new();

        for event in events {
            match event {
                ParserEvent::Cue(cue) => cues.push(cue),
                ParserEvent::Header { kind, line } => headers.push(kind, &line),
            }
        }
        cues.finalize_ordering();

        tracing::debug!(
            cues = cues.len(),
            duration_us = cues.duration(),
            "webvtt ingest complete"
        );

        let desc = StreamDescriptor {
            codec: WEBVTT_FOURCC,
            extradata: build_extradata(&headers.finalize()),
        };
        sink.add_stream(&desc)?;

        Ok(Self {
            cues,
            config,
            slaved: false,
            first_time: true,
            discontinuity_pending: false,
            next_demux_time: 0,
        })
    }

    /// One pull: deliver every cue due at the current barrier.
    ///
    /// When not slaved, the barrier then advances by one tick and a clock
    /// reference is published to the sink.
    pub fn demux(&mut self, sink: &mut dyn SubtitleSink) -> DemuxStep {
        let barrier = self.next_demux_time;

        loop {
            let index = self.cues.current();
            let Some(cue) = self.cues.get(index) else {
                break;
            };
            if cue.start > barrier {
                break;
            }

            if !self.slaved && self.first_time {
                sink.set_clock(self.config.clock_base + barrier);
                self.first_time = false;
            }

            // A negative start time cannot be stamped; skip the cue but
            // keep the cursor moving.
            if cue.start >= 0 {
                let packet = SubtitlePacket {
                    data: encode_cue(cue, index > 0),
                    pts: self.config.clock_base + cue.start,
                    duration: cue.duration(),
                    discontinuity: std::mem::take(&mut self.discontinuity_pending),
                };
                sink.send(packet);
            }

            self.cues.advance();
        }

        if !self.slaved {
            sink.set_clock(self.config.clock_base + barrier);
            self.next_demux_time += self.config.tick_us;
        }

        if self.cues.is_exhausted() {
            DemuxStep::End
        } else {
            DemuxStep::More
        }
    }

    /// Total duration in microseconds
    pub fn length(&self) -> i64 {
        self.cues.duration()
    }

    /// Current demux time in microseconds
    pub fn time(&self) -> i64 {
        self.next_demux_time
    }

    /// Fractional position in `[0.0, 1.0]`
    pub fn position(&self) -> f64 {
        if self.cues.is_exhausted() {
            1.0
        } else if !self.cues.is_empty() {
            // +0.5 keeps the ratio finite when the duration is 0
            self.next_demux_time as f64 / (self.cues.duration() as f64 + 0.5)
        } else {
            0.0
        }
    }

    /// Seeking is always available on a fully-ingested store
    pub fn can_seek(&self) -> bool {
        true
    }

    /// Seek to an absolute time.
    ///
    /// The cursor moves to the first cue starting at or after `time_us`,
    /// the barrier snaps to that cue's start, and the next delivered
    /// packet is marked discontinuous.
    pub fn set_time(&mut self, time_us: i64) {
        let index = self.cues.index_for_time(time_us);
        self.cues.set_current(index);

        // Snap the barrier to the cue now under the cursor; past the last
        // cue, the last start is the nearest meaningful barrier.
        let snap = index.min(self.cues.len().saturating_sub(1));
        if let Some(cue) = self.cues.get(snap) {
            self.next_demux_time = cue.start;
        }

        self.first_time = true;
        self.discontinuity_pending = true;
        tracing::trace!(time_us, index, "seek");
    }

    /// Seek to a fractional position of the total duration
    pub fn set_position(&mut self, position: f64) -> Result<()> {
        if self.cues.is_empty() {
            return Err(DemuxError::NoCues);
        }
        self.set_time((position * self.cues.duration() as f64) as i64);
        Ok(())
    }

    /// Slave the loop to an external clock: the barrier no longer
    /// self-advances and clock references are no longer published.
    pub fn set_next_demux_time(&mut self, time: i64) {
        self.slaved = true;
        self.next_demux_time = time - self.config.clock_base;
    }
}
