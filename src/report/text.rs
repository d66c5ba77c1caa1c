//! Plain text report, one block per decoded header

use crate::inspect::Inspection;
use crate::mpeg::{FrameHeader, MpegVersion};
use std::io::{self, Write};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Write the full description of one header.
///
/// The bitrate is left out for MPEG 2.5.
pub fn write_header<W: Write>(writer: &mut W, file_path: &str, h: &FrameHeader) -> io::Result<()> {
    writeln!(writer, "MPEG frame header information for {}:", file_path)?;

    write!(writer, "MPEG Version {} / Layer {} (", h.version, h.layer)?;
    if h.version != MpegVersion::Mpeg25 {
        write!(writer, "{} KBit/s, ", h.bitrate)?;
    }
    writeln!(writer, "{} Hz, {})", h.sample_rate, h.channel_mode)?;

    writeln!(writer, "Mode extension: {}", h.mode_extension_info())?;
    writeln!(writer, "Emphasis:\t{}", h.emphasis)?;
    writeln!(writer, "Protection:\t{}", yes_no(h.protection_enabled))?;
    writeln!(writer, "Padding:\t{}", yes_no(h.padding))?;
    writeln!(writer, "Private:\t{}", yes_no(h.private))?;
    writeln!(writer, "Copyright:\t{}", yes_no(h.copyright))?;
    writeln!(writer, "Original media:\t{}", yes_no(h.original))?;
    writeln!(
        writer,
        "Frame size:\t{} slots ({} bytes)",
        h.frame_length_slots(),
        h.frame_size_bytes()
    )
}

/// Write a block for every result that decoded; failures are skipped
pub fn write<W: Write>(writer: &mut W, results: &[Inspection]) -> io::Result<()> {
    for r in results {
        if let Some(header) = &r.header {
            write_header(writer, &r.file_path, header)?;
        }
    }

    Ok(())
}
