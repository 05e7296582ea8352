//! Cue records and the ordered cue store
//!
//! The store owns every cue produced by the initial parse pass, repairs
//! out-of-order input once, and answers start-time seek queries with a
//! binary search. A cursor tracks the next cue to deliver.

/// A single timed subtitle cue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    /// Start time in microseconds
    pub start: i64,
    /// Stop time in microseconds; `None` means the cue is open-ended
    pub stop: Option<i64>,
    /// Optional cue identifier
    pub id: Option<String>,
    /// Optional cue settings text (position, alignment, ...), kept opaque
    pub attrs: Option<String>,
    /// Payload text (may be empty)
    pub text: String,
}

impl Cue {
    /// Create a cue with timing and text only
    pub fn new(start: i64, stop: Option<i64>, text: impl Into<String>) -> Self {
        Self {
            start,
            stop,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Display duration in microseconds.
    ///
    /// A missing stop time, or a stop before the start, clamps to 0.
    pub fn duration(&self) -> i64 {
        match self.stop {
            Some(stop) if stop >= self.start => stop - self.start,
            _ => 0,
        }
    }
}

/// Growable, ordered sequence of cues with a delivery cursor.
///
/// Grows only during the initial parse pass; after [`finalize_ordering`]
/// the sequence is sorted by ascending start time and read-only.
///
/// [`finalize_ordering`]: CueStore::finalize_ordering
#[derive(Debug, Default)]
pub struct CueStore {
    cues: Vec<Cue>,
    current: usize,
    duration: i64,
    unordered: bool,
}

impl CueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully-populated cue.
    ///
    /// Tracks the total duration and flags the store as unordered when the
    /// new cue starts before the previous one. The flag is sticky.
    pub fn push(&mut self, cue: Cue) {
        if let Some(prev) = self.cues.last() {
            if cue.start < prev.start {
                self.unordered = true;
            }
        }
        let end = cue.stop.unwrap_or(cue.start);
        if end > self.duration {
            self.duration = end;
        }
        self.cues.push(cue);
    }

    /// Repair cue ordering after the source has been fully consumed.
    ///
    /// A stable sort, so cues with equal start times keep their arrival
    /// order. No-op when the input was already ordered.
    pub fn finalize_ordering(&mut self) {
        if self.unordered {
            self.cues.sort_by_key(|c| c.start);
        }
    }

    /// Index of the first cue with `start >= t` (leftmost on ties),
    /// or `len()` when every cue starts before `t`.
    ///
    /// Only meaningful once ordering has been finalized.
    pub fn index_for_time(&self, t: i64) -> usize {
        self.cues.partition_point(|c| c.start < t)
    }

    pub fn get(&self, index: usize) -> Option<&Cue> {
        self.cues.get(index)
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Total duration in microseconds: the largest stop time seen, falling
    /// back to the start time for open-ended cues.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Delivery cursor: index of the next cue to serve, `len()` when
    /// exhausted.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Reposition the cursor (seek). `index` is clamped to `len()`.
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.cues.len());
    }

    /// Move the cursor past the cue just served.
    pub fn advance(&mut self) {
        if self.current < self.cues.len() {
            self.current += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.cues.len()
    }
}
