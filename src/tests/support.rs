//! Test doubles shared by the demux scenarios

use crate::error::Result;
use crate::sink::{StreamDescriptor, SubtitlePacket, SubtitleSink};

/// Sink that records everything it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub descriptors: Vec<StreamDescriptor>,
    pub packets: Vec<SubtitlePacket>,
    pub clocks: Vec<i64>,
}

impl SubtitleSink for RecordingSink {
    fn add_stream(&mut self, desc: &StreamDescriptor) -> Result<()> {
        self.descriptors.push(desc.clone());
        Ok(())
    }

    fn send(&mut self, packet: SubtitlePacket) {
        self.packets.push(packet);
    }

    fn set_clock(&mut self, reference: i64) {
        self.clocks.push(reference);
    }
}

impl RecordingSink {
    /// Payload texts of all delivered packets, decoded from their `payl`
    /// boxes, in delivery order.
    pub fn payloads(&self) -> Vec<String> {
        self.packets
            .iter()
            .map(|p| {
                let mut text = String::new();
                crate::boxes::walk_boxes(&p.data, &mut |tag, payload| {
                    if tag == crate::boxes::BOX_PAYLOAD {
                        text = String::from_utf8_lossy(payload).into_owned();
                    }
                });
                text
            })
            .collect()
    }
}
