pub mod csv;
pub mod json;
pub mod text;

use crate::inspect::Inspection;
use std::io::{self, Write};

/// Output format for a batch of inspections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Human-readable block per file
    #[default]
    Text,
    Json,
    Csv,
}

/// Write `results` to `writer` in the given format
pub fn write<W: Write>(writer: &mut W, format: Format, results: &[Inspection]) -> io::Result<()> {
    match format {
        Format::Text => text::write(writer, results),
        Format::Json => json::write(writer, results),
        Format::Csv => csv::write(writer, results),
    }
}

/// Summary statistics for a batch of results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn from_results(results: &[Inspection]) -> Self {
        let valid = results.iter().filter(|r| r.is_valid()).count();

        Self {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
        }
    }
}
