//! Per-file header inspection
//!
//! Ties the locator and decoder together for a path on disk and produces an
//! [`Inspection`] record for the reporters.

use crate::error::{Error, Result};
use crate::mpeg::{locate, FrameHeader};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Default resync window: 64 KiB past the start of the scan
pub const DEFAULT_MAX_SCAN: u64 = 64 * 1024;

/// Open `path`, locate the first candidate header and decode it.
///
/// A rejected candidate is final; use [`Inspector::with_resync`] to keep
/// scanning instead.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<FrameHeader> {
    let file = File::open(path)?;
    read_header_from(&mut BufReader::new(file))
}

/// Locate and decode the first candidate header in `reader`
pub fn read_header_from<R: Read>(reader: &mut R) -> Result<FrameHeader> {
    let word = locate(reader)?;
    FrameHeader::decode(word)
}

/// Result of inspecting a single file
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub file_path: String,
    pub file_name: String,
    /// Byte offset of the decoded header within the file
    pub offset: Option<u64>,
    pub header: Option<FrameHeader>,
    pub frame_length_slots: Option<u32>,
    pub frame_size_bytes: Option<u32>,
    pub error: Option<String>,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.header.is_some()
    }
}

/// Reads the first frame header of each file it is given
#[derive(Debug, Clone)]
pub struct Inspector {
    /// Rescan from one byte past a rejected lead byte instead of giving up
    pub resync: bool,
    /// Resync stops once a rejected candidate lies this many bytes past the start
    pub max_scan: u64,
}

impl Default for Inspector {
    fn default() -> Self {
        Self {
            resync: false,
            max_scan: DEFAULT_MAX_SCAN,
        }
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resync(mut self, resync: bool) -> Self {
        self.resync = resync;
        self
    }

    pub fn with_max_scan(mut self, max_scan: u64) -> Self {
        self.max_scan = max_scan;
        self
    }

    /// Find and decode a header starting at the reader's current position.
    ///
    /// Returns the header's byte offset along with the decoded header.
    pub fn locate_header<R: Read + Seek>(&self, reader: &mut R) -> Result<(u64, FrameHeader)> {
        let start = reader.stream_position()?;

        loop {
            let word = locate(reader)?;
            let offset = reader.stream_position()? - 4;

            match FrameHeader::decode(word) {
                Ok(header) => return Ok((offset, header)),
                Err(e @ Error::InvalidHeader { .. }) => {
                    if !self.resync || offset - start >= self.max_scan {
                        return Err(e);
                    }
                    debug!(offset, "{}, resyncing", e);
                    reader.seek(SeekFrom::Start(offset + 1))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Inspect a single file
    pub fn inspect<P: AsRef<Path>>(&self, path: P) -> Inspection {
        let path = path.as_ref();
        let file_path = path.display().to_string();
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.clone());

        let located = File::open(path)
            .map_err(Error::from)
            .and_then(|file| self.locate_header(&mut BufReader::new(file)));

        match located {
            Ok((offset, header)) => Inspection {
                file_path,
                file_name,
                offset: Some(offset),
                header: Some(header),
                frame_length_slots: Some(header.frame_length_slots()),
                frame_size_bytes: Some(header.frame_size_bytes()),
                error: None,
            },
            Err(e) => {
                warn!(file = %file_path, "{}", e);
                Inspection {
                    file_path,
                    file_name,
                    offset: None,
                    header: None,
                    frame_length_slots: None,
                    frame_size_bytes: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Inspect each path in order
    pub fn inspect_all<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<Inspection> {
        paths.iter().map(|p| self.inspect(p)).collect()
    }
}
