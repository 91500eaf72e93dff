//! Dataset assembly: labelled frame rows and the combined table.
//!
//! Rows from all sampled sources are concatenated in input order; there is
//! no deduplication, shuffling, or class-balance validation. The only
//! invariant enforced here is uniform row width.

mod feather;

use crate::config::FrameSize;
use crate::error::{CoreError, CoreResult};

use serde::Serialize;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use feather::{read_feather, write_feather};

/// One sampled frame: flattened grayscale pixels plus its class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pixels: Vec<u8>,
    label: u8,
}

impl FrameRecord {
    pub fn new(pixels: Vec<u8>, label: u8) -> Self {
        Self { pixels, label }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn label(&self) -> u8 {
        self.label
    }

    /// The record as a flat row: pixels followed by the label element.
    pub fn into_row(self) -> Vec<u8> {
        let mut row = self.pixels;
        row.push(self.label);
        row
    }
}

/// The assembled dataset: one row per sampled frame, all rows the same
/// width.
#[derive(Debug, Clone)]
pub struct FrameTable {
    size: FrameSize,
    records: Vec<FrameRecord>,
}

impl FrameTable {
    /// Builds a table from concatenated record sequences, validating that
    /// every record matches the target resolution.
    pub fn from_records(records: Vec<FrameRecord>, size: FrameSize) -> CoreResult<Self> {
        let expected = size.pixel_count();
        for (i, record) in records.iter().enumerate() {
            if record.pixels.len() != expected {
                return Err(CoreError::DatasetShape(format!(
                    "row {i} has {} pixels, expected {expected}",
                    record.pixels.len()
                )));
            }
        }
        Ok(Self { size, records })
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    /// Pixel columns plus the trailing label column.
    pub fn num_columns(&self) -> usize {
        self.size.pixel_count() + 1
    }

    pub fn rows_with_label(&self, label: u8) -> usize {
        self.records.iter().filter(|r| r.label == label).count()
    }
}

/// Writes records as a plain comma-separated dump, one row per line,
/// pixels first and the label last. No header.
pub fn write_csv(records: &[FrameRecord], path: &Path) -> CoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        let mut first = true;
        for &pixel in &record.pixels {
            if !first {
                writer.write_all(b",")?;
            }
            write!(writer, "{pixel}")?;
            first = false;
        }
        if !first {
            writer.write_all(b",")?;
        }
        writeln!(writer, "{}", record.label)?;
    }
    writer.flush()?;
    log::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Per-source row counts for the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub label: u8,
    pub rows: usize,
}

/// Machine-readable result of one dataset build.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub sources: Vec<SourceSummary>,
    pub output_path: PathBuf,
}
