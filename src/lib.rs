//! mpeginfo - Read MPEG audio frame headers
//!
//! mpeginfo finds the first frame header in an MPEG audio file (MP1/MP2/MP3)
//! and decodes it: version, layer, bitrate, sample rate, channel mode and the
//! auxiliary flags, plus the frame length derived from them.
//!
//! # Overview
//!
//! Two pieces do the work:
//!
//! 1. **Locating**: [`mpeg::locate`] scans a byte stream for the `0xFF` lead
//!    byte and assembles it and the next three bytes into a 32-bit word.
//!
//! 2. **Decoding**: [`FrameHeader::decode`] checks the 11-bit sync pattern and
//!    extracts every field through the bitrate and sample-rate tables.
//!
//! # Quick Start
//!
//! ```no_run
//! use mpeginfo::{read_header, Error};
//!
//! match read_header("song.mp3") {
//!     Ok(header) => println!(
//!         "MPEG {} Layer {}: {} kbit/s, {} Hz, {} bytes per frame",
//!         header.version,
//!         header.layer,
//!         header.bitrate,
//!         header.sample_rate,
//!         header.frame_size_bytes()
//!     ),
//!     Err(Error::SyncNotFound) => println!("no frame header"),
//!     Err(e) => println!("unreadable: {}", e),
//! }
//! ```
//!
//! Decoding a header word directly:
//!
//! ```
//! use mpeginfo::{FrameHeader, Layer};
//!
//! let header = FrameHeader::decode(0xFFFB_9064).unwrap();
//! assert_eq!(header.layer, Layer::Layer3);
//! assert_eq!(header.bitrate, 128);
//! assert_eq!(header.frame_length_slots(), 104);
//! ```
//!
//! # Frame size
//!
//! | Layer | Slots |
//! |-------|-------|
//! | I | `12 * bitrate * 1000 / sample_rate + padding` |
//! | II, III | `36 * bitrate * 1000 / sample_rate + padding` |
//!
//! The byte count is four times the slot count for every layer.
//!
//! # Modules
//!
//! - [`mpeg`]: header locating and decoding
//! - [`inspect`]: per-file pipeline with optional resynchronization
//! - [`report`]: output formatters (text, JSON, CSV)

pub mod error;
pub mod inspect;
pub mod mpeg;
pub mod report;

pub use error::{Error, InvalidReason, Result};
pub use inspect::{read_header, read_header_from, Inspection, Inspector};
pub use mpeg::{ChannelMode, Emphasis, FrameHeader, Layer, ModeExtension, MpegVersion};
