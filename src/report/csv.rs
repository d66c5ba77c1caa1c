//! CSV report generation

use crate::inspect::Inspection;
use std::io::{self, Write};

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

pub fn write<W: Write>(writer: &mut W, results: &[Inspection]) -> io::Result<()> {
    // Header
    writeln!(
        writer,
        "status,filepath,version,layer,bitrate_kbps,sample_rate_hz,channel_mode,frame_slots,frame_bytes"
    )?;

    // Rows
    for r in results {
        let h = r.header.as_ref();
        let status = if r.is_valid() { "ok" } else { "invalid" };

        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            status,
            escape_csv(&r.file_path),
            or_na(h.map(|h| h.version)),
            or_na(h.map(|h| h.layer)),
            or_na(h.map(|h| h.bitrate)),
            or_na(h.map(|h| h.sample_rate)),
            escape_csv(&or_na(h.map(|h| h.channel_mode))),
            or_na(r.frame_length_slots),
            or_na(r.frame_size_bytes),
        )?;
    }

    Ok(())
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
