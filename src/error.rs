use thiserror::Error;

/// Main error type for the WEBVTT demuxer
#[derive(Error, Debug)]
pub enum DemuxError {
    /// The leading bytes of the stream do not carry a WEBVTT signature.
    /// This is a decline ("not this format"), not a corruption report.
    #[error("stream does not carry a WEBVTT signature")]
    UnrecognizedStream,

    /// A seek was requested on a store that holds no cues
    #[error("cannot seek: no cues in store")]
    NoCues,

    /// The downstream sink refused the stream at registration time
    #[error("sink rejected stream: {0}")]
    Sink(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DemuxError>;
