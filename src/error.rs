//! Error types for header location and decoding.

use std::fmt;
use thiserror::Error;

/// Why a candidate header word was rejected by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Top 11 bits are not all ones.
    BadSync,
    /// Version bits `01`.
    ReservedVersion,
    /// Layer bits `00`.
    ReservedLayer,
    /// Sample-rate index `11`.
    ReservedSampleRate,
    /// Bitrate index past the end of its table row.
    BitrateIndexOutOfRange,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::BadSync => write!(f, "sync pattern mismatch"),
            InvalidReason::ReservedVersion => write!(f, "reserved MPEG version"),
            InvalidReason::ReservedLayer => write!(f, "reserved layer"),
            InvalidReason::ReservedSampleRate => write!(f, "reserved sample rate index"),
            InvalidReason::BitrateIndexOutOfRange => write!(f, "bitrate index out of range"),
        }
    }
}

/// Errors produced while reading a frame header from a byte source.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened or read.
    #[error("stream unavailable: {0}")]
    StreamUnavailable(#[from] std::io::Error),

    /// No `0xFF` lead byte followed by three more bytes before end of stream.
    #[error("no frame sync found")]
    SyncNotFound,

    /// A lead byte was found but the assembled word is not a valid header.
    #[error("invalid frame header {word:#010x}: {reason}")]
    InvalidHeader { word: u32, reason: InvalidReason },
}

impl Error {
    pub(crate) fn invalid(word: u32, reason: InvalidReason) -> Self {
        Error::InvalidHeader { word, reason }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
