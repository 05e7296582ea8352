//! Region/style header aggregation and extradata assembly
//!
//! Header declaration lines seen during the parse pass are accumulated
//! into two independent buffers, frozen once parsing completes, and
//! prefixed with the WEBVTT magic to form the one-shot extradata blob
//! delivered with the stream descriptor.

use bytes::{BufMut, Bytes, BytesMut};

use crate::parser::HeaderKind;

/// Magic prefix of the extradata blob
pub const EXTRADATA_MAGIC: &[u8] = b"WEBVTT\n\n";

/// Accumulates region and style header lines during the parse pass
#[derive(Debug, Default)]
pub struct HeaderAggregator {
    regions: String,
    styles: String,
}

impl HeaderAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one header line (newline-terminated) to the matching buffer
    pub fn push(&mut self, kind: HeaderKind, line: &str) {
        let buf = match kind {
            HeaderKind::Region => &mut self.regions,
            HeaderKind::Style => &mut self.styles,
        };
        buf.push_str(line);
        buf.push('\n');
    }

    /// Freeze both buffers. Either may be empty.
    pub fn finalize(self) -> HeaderBlocks {
        HeaderBlocks {
            regions: self.regions,
            styles: self.styles,
        }
    }
}

/// Frozen header buffers, ready for extradata assembly
#[derive(Debug, Clone, Default)]
pub struct HeaderBlocks {
    pub regions: String,
    pub styles: String,
}

/// Assemble the one-shot initialization blob: the WEBVTT magic followed
/// by the region headers then the style headers, verbatim.
pub fn build_extradata(headers: &HeaderBlocks) -> Bytes {
    let mut buf = BytesMut::with_capacity(
        EXTRADATA_MAGIC.len() + headers.regions.len() + headers.styles.len(),
    );
    buf.put_slice(EXTRADATA_MAGIC);
    buf.put_slice(headers.regions.as_bytes());
    buf.put_slice(headers.styles.as_bytes());
    buf.freeze()
}
