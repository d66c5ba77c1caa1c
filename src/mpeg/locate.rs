//! Frame sync scanning
//!
//! The locator only looks for the `0xFF` lead byte and assembles the four
//! header bytes into a word. Checking the rest of the sync pattern is left to
//! [`FrameHeader::decode`](crate::mpeg::FrameHeader::decode), so any `0xFF` in
//! audio payload yields a candidate. Callers that want to recover from such a
//! false positive seek back to one byte after the rejected lead byte and call
//! [`locate`] again (see [`Inspector::with_resync`](crate::Inspector::with_resync)).

use crate::error::{Error, Result};
use std::io::{self, Read};
use tracing::{debug, trace};

/// First byte of every frame header
pub const SYNC_LEAD_BYTE: u8 = 0xFF;

/// Assemble four header bytes, as stored in the file, into a header word.
pub fn header_word(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Scan `reader` for the next `0xFF` byte and return it together with the
/// three bytes that follow as a header word.
///
/// On success the reader is positioned right after the four header bytes.
/// Nothing is rewound on failure. Reads one byte at a time, so wrap files in a
/// `BufReader`.
pub fn locate<R: Read>(reader: &mut R) -> Result<u32> {
    let mut skipped: u64 = 0;

    loop {
        match read_byte(reader)? {
            Some(SYNC_LEAD_BYTE) => break,
            Some(_) => skipped += 1,
            None => {
                trace!(skipped, "end of stream before sync lead byte");
                return Err(Error::SyncNotFound);
            }
        }
    }

    let mut buf = [SYNC_LEAD_BYTE, 0, 0, 0];
    match reader.read_exact(&mut buf[1..]) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            trace!(skipped, "stream ends inside candidate header");
            return Err(Error::SyncNotFound);
        }
        Err(e) => return Err(e.into()),
    }

    let word = header_word(buf);
    debug!(skipped, "candidate frame header {:#010x}", word);
    Ok(word)
}

fn read_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A reader that fails every read with a non-EOF error
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_header_word_is_big_endian() {
        assert_eq!(header_word([0xFF, 0xFB, 0x90, 0x64]), 0xFFFB_9064);
        assert_eq!(header_word([0x01, 0x02, 0x03, 0x04]), 0x0102_0304);
    }

    #[test]
    fn test_locate_at_start() {
        let mut cursor = Cursor::new(vec![0xFFu8, 0xFB, 0x90, 0x64, 0x00, 0x00]);
        assert_eq!(locate(&mut cursor).expect("Should locate"), 0xFFFB_9064);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_locate_after_filler() {
        // three filler bytes, then the header: seven bytes consumed
        let mut cursor = Cursor::new(vec![0x00u8, 0x12, 0xFE, 0xFF, 0xFB, 0x90, 0x64, 0xAA]);
        assert_eq!(locate(&mut cursor).expect("Should locate"), 0xFFFB_9064);
        assert_eq!(cursor.position(), 7);
    }

    #[test]
    fn test_locate_does_not_validate_sync() {
        // 0xFF 0x00 is not a real sync but the locator still returns it
        let mut cursor = Cursor::new(vec![0x00u8, 0xFF, 0x00, 0x00, 0x00]);
        assert_eq!(locate(&mut cursor).expect("Should locate"), 0xFF00_0000);
    }

    #[test]
    fn test_locate_continues_from_cursor() {
        let mut cursor = Cursor::new(vec![0xFFu8, 0xFB, 0x90, 0x64, 0x00, 0xFF, 0xF3, 0x90, 0x00]);
        assert_eq!(locate(&mut cursor).expect("first"), 0xFFFB_9064);
        assert_eq!(locate(&mut cursor).expect("second"), 0xFFF3_9000);
        assert!(matches!(locate(&mut cursor), Err(Error::SyncNotFound)));
    }

    #[test]
    fn test_locate_empty_stream() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert!(matches!(locate(&mut cursor), Err(Error::SyncNotFound)));
    }

    #[test]
    fn test_locate_no_lead_byte() {
        let mut cursor = Cursor::new(vec![0u8; 100]);
        assert!(matches!(locate(&mut cursor), Err(Error::SyncNotFound)));
        assert_eq!(cursor.position(), 100);
    }

    #[test]
    fn test_locate_truncated_tail() {
        for data in [
            vec![0xFFu8],
            vec![0x00, 0x00, 0xFF],
            vec![0xFF, 0xFB, 0x90],
            vec![0x01, 0x02],
        ] {
            let mut cursor = Cursor::new(data.clone());
            assert!(
                matches!(locate(&mut cursor), Err(Error::SyncNotFound)),
                "data {:02X?}",
                data
            );
        }
    }

    #[test]
    fn test_locate_read_error() {
        assert!(matches!(
            locate(&mut BrokenReader),
            Err(Error::StreamUnavailable(_))
        ));
    }
}
