//! ISOBMFF-style cue framing
//!
//! Serializes one cue into a nested, length-prefixed binary container as
//! carried in `wvtt` sample data: a `vttc` (or `vttx`) box wrapping
//! optional `iden` and `sttg` boxes and a mandatory `payl` box. Every box
//! is a 4-byte big-endian total length, a 4-byte ASCII tag, then the raw
//! payload.

use bytes::{BufMut, Bytes, BytesMut};

use crate::cue::Cue;

/// Size of the length + tag header that precedes every box payload.
pub const BOX_HEADER_LEN: usize = 8;

/// Standalone cue container
pub const BOX_CUE: &[u8; 4] = b"vttc";
/// Cue container that continues the previous cue's region/style context
pub const BOX_CUE_CONTINUED: &[u8; 4] = b"vttx";
/// Cue identifier sub-box
pub const BOX_IDENTIFIER: &[u8; 4] = b"iden";
/// Cue settings sub-box
pub const BOX_SETTINGS: &[u8; 4] = b"sttg";
/// Cue payload sub-box
pub const BOX_PAYLOAD: &[u8; 4] = b"payl";

fn put_box(buf: &mut BytesMut, tag: &[u8; 4], payload: &[u8]) {
    buf.put_u32((BOX_HEADER_LEN + payload.len()) as u32);
    buf.put_slice(tag);
    buf.put_slice(payload);
}

/// Encode one cue as a `vttc`/`vttx` container.
///
/// Sub-boxes appear in fixed order: `iden` (only when the cue has an id),
/// `sttg` (only when it has settings), then `payl` (always, possibly
/// empty). The buffer is allocated at its exact final size.
pub fn encode_cue(cue: &Cue, continuation: bool) -> Bytes {
    let iden_size = cue.id.as_ref().map_or(0, |s| BOX_HEADER_LEN + s.len());
    let sttg_size = cue.attrs.as_ref().map_or(0, |s| BOX_HEADER_LEN + s.len());
    let payl_size = BOX_HEADER_LEN + cue.text.len();
    let inner_size = iden_size + sttg_size + payl_size;

    let mut buf = BytesMut::with_capacity(BOX_HEADER_LEN + inner_size);

    let tag = if continuation { BOX_CUE_CONTINUED } else { BOX_CUE };
    buf.put_u32((BOX_HEADER_LEN + inner_size) as u32);
    buf.put_slice(tag);

    if let Some(id) = &cue.id {
        put_box(&mut buf, BOX_IDENTIFIER, id.as_bytes());
    }
    if let Some(attrs) = &cue.attrs {
        put_box(&mut buf, BOX_SETTINGS, attrs.as_bytes());
    }
    put_box(&mut buf, BOX_PAYLOAD, cue.text.as_bytes());

    buf.freeze()
}

/// Walk all boxes in a buffer, recursing into cue containers.
/// `callback` is invoked for every box in pre-order traversal with its
/// tag and payload. Truncated or undersized boxes stop the walk.
pub fn walk_boxes<'a, F>(data: &'a [u8], callback: &mut F)
where
    F: FnMut(&[u8; 4], &'a [u8]),
{
    let mut pos = 0;
    while pos + BOX_HEADER_LEN <= data.len() {
        let size =
            u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        if size < BOX_HEADER_LEN || pos + size > data.len() {
            break;
        }
        let tag: &[u8; 4] = &data[pos + 4..pos + 8].try_into().unwrap();
        let payload = &data[pos + 8..pos + size];

        callback(tag, payload);

        if tag == BOX_CUE || tag == BOX_CUE_CONTINUED {
            walk_boxes(payload, callback);
        }

        pos += size;
    }
}
