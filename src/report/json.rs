//! JSON report generation

use crate::inspect::Inspection;
use crate::report::Summary;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    summary: JsonSummary,
    files: &'a [Inspection],
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    valid: usize,
    invalid: usize,
}

pub fn write<W: Write>(writer: &mut W, results: &[Inspection]) -> io::Result<()> {
    let summary = Summary::from_results(results);

    let report = JsonReport {
        generated: chrono::Utc::now().to_rfc3339(),
        summary: JsonSummary {
            total: summary.total,
            valid: summary.valid,
            invalid: summary.invalid,
        },
        files: results,
    };

    serde_json::to_writer_pretty(&mut *writer, &report).map_err(io::Error::from)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;
    use serde_json::Value;

    #[test]
    fn test_json_report_shape() {
        let results = vec![
            fixtures::valid("a.mp3", 0xFFFB_9064),
            fixtures::invalid("b.mp3"),
        ];
        let mut out = Vec::new();
        write(&mut out, &results).expect("write to Vec");
        let doc: Value = serde_json::from_slice(&out).expect("valid JSON");

        assert_eq!(doc["summary"]["total"], 2);
        assert_eq!(doc["summary"]["valid"], 1);
        assert_eq!(doc["summary"]["invalid"], 1);
        assert!(doc["generated"].is_string());

        let first = &doc["files"][0];
        assert_eq!(first["file_path"], "a.mp3");
        assert_eq!(first["header"]["version"], "1");
        assert_eq!(first["header"]["layer"], "III");
        assert_eq!(first["header"]["bitrate"], 128);
        assert_eq!(first["header"]["channel_mode"], "joint_stereo");
        assert_eq!(first["frame_size_bytes"], 416);

        let second = &doc["files"][1];
        assert!(second["header"].is_null());
        assert_eq!(second["error"], "no frame sync found");
    }
}
