//! End-to-end tests for the mpeginfo binary.
//!
//! These run the built executable against temporary files and check exit
//! codes, stdout and the per-file diagnostic on stderr.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn mpeginfo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mpeginfo"))
        .args(args)
        .arg("--no-color")
        .output()
        .expect("run mpeginfo")
}

fn temp_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(data).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn path_str(file: &NamedTempFile) -> String {
    file.path().display().to_string()
}

/// No files at all is the only usage error.
#[test]
fn test_no_arguments_exits_1() {
    let output = mpeginfo(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USAGE:"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_valid_file_prints_report() {
    let file = temp_file(&[0x00, 0x00, 0x00, 0xFF, 0xFB, 0x90, 0x64, 0x00]);
    let path = path_str(&file);
    let output = mpeginfo(&[&path]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("MPEG frame header information for {}:", path)));
    assert!(stdout.contains("MPEG Version 1 / Layer III (128 KBit/s, 44100 Hz, Joint stereo (Stereo))"));
    assert!(stdout.contains("Frame size:\t104 slots (416 bytes)"));
}

/// Per-file failures are reported and skipped; the exit code stays 0.
#[test]
fn test_invalid_file_is_ignored() {
    let bad = temp_file(&[0x00, 0x01, 0x02]);
    let good = temp_file(&[0xFF, 0xF3, 0x90, 0x00]);
    let bad_path = path_str(&bad);
    let good_path = path_str(&good);
    let output = mpeginfo(&[&bad_path, &good_path]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("{}: invalid/missing header, ignoring", bad_path)));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MPEG Version 2 / Layer III (96 KBit/s, 22050 Hz, Stereo)"));
    assert!(!stdout.contains(&bad_path));
}

#[test]
fn test_missing_file_is_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.mp3").display().to_string();
    let output = mpeginfo(&[&missing]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid/missing header, ignoring"));
}

#[test]
fn test_resync_flag() {
    let file = temp_file(&[0xFF, 0x00, 0x00, 0x00, 0xFF, 0xFB, 0x90, 0x64]);
    let path = path_str(&file);

    let plain = mpeginfo(&[&path]);
    assert!(plain.stdout.is_empty());

    let resynced = mpeginfo(&["--resync", &path]);
    let stdout = String::from_utf8_lossy(&resynced.stdout);
    assert!(stdout.contains("128 KBit/s"), "stdout: {}", stdout);
}

#[test]
fn test_json_format() {
    let file = temp_file(&[0xFF, 0xFB, 0x90, 0x64]);
    let path = path_str(&file);
    let output = mpeginfo(&["--format", "json", &path]);

    assert_eq!(output.status.code(), Some(0));
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(doc["summary"]["valid"], 1);
    assert_eq!(doc["files"][0]["header"]["sample_rate"], 44100);
    assert_eq!(doc["files"][0]["frame_length_slots"], 104);
}

#[test]
fn test_csv_format() {
    let file = temp_file(&[0xFF, 0xFB, 0x90, 0x64]);
    let path = path_str(&file);
    let output = mpeginfo(&["-f", "csv", &path]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().expect("header row").starts_with("status,filepath,"));
    let row = lines.next().expect("data row");
    assert!(row.starts_with("ok,"));
    assert!(row.ends_with(",104,416"));
}
