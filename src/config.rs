//! Demuxer configuration
//!
//! Hosts can embed [`DemuxConfig`] in their own config files; all fields
//! have sensible defaults.

use serde::{Deserialize, Serialize};

/// One second in demuxer time units (microseconds).
pub const CLOCK_FREQ: i64 = 1_000_000;

/// Tuning knobs for the demux loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemuxConfig {
    /// Pacing quantum in microseconds: how far the self-driven clock
    /// advances per pull when not slaved to an external clock.
    pub tick_us: i64,
    /// Absolute clock base added to cue-relative timestamps on every
    /// packet and clock reference handed to the sink.
    pub clock_base: i64,
}

impl Default for DemuxConfig {
    fn default() -> Self {
        Self {
            tick_us: CLOCK_FREQ / 8,
            clock_base: 0,
        }
    }
}
