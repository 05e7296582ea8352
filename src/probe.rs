//! Stream signature detection
//!
//! Decides whether a byte stream looks like WEBVTT before any parsing
//! happens. A mismatch is a decline, not an error.

/// Minimum number of bytes that must be peeked from the stream for the
/// probe to give a verdict.
pub const PROBE_LEN: usize = 16;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Check the leading bytes of a stream for the WEBVTT signature.
///
/// After an optional UTF-8 byte-order mark, the stream must start with
/// the literal `WEBVTT` followed by a newline, space, tab, or CR-LF.
pub fn probe(head: &[u8]) -> bool {
    if head.len() < PROBE_LEN {
        return false;
    }

    let head = head.strip_prefix(UTF8_BOM).unwrap_or(head);

    if !head.starts_with(b"WEBVTT") {
        return false;
    }

    match head.get(6) {
        Some(b'\n') | Some(b' ') | Some(b'\t') => true,
        Some(b'\r') => head.get(7) == Some(&b'\n'),
        _ => false,
    }
}
