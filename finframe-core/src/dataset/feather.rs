//! Feather (Arrow IPC file) persistence for the assembled dataset.
//!
//! The on-disk layout matches what downstream training code expects: one
//! UInt8 column per pixel position named by its flat index ("0", "1", ...)
//! and a trailing "label" column.

use crate::dataset::FrameTable;
use crate::error::CoreResult;

use arrow_array::{ArrayRef, RecordBatch, UInt8Array};
use arrow_ipc::reader::FileReader;
use arrow_ipc::writer::FileWriter;
use arrow_schema::{DataType, Field, Schema};

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Column name of the trailing class-label column.
pub const LABEL_COLUMN: &str = "label";

fn dataset_schema(pixel_count: usize) -> Schema {
    let mut fields: Vec<Field> = (0..pixel_count)
        .map(|i| Field::new(i.to_string(), DataType::UInt8, false))
        .collect();
    fields.push(Field::new(LABEL_COLUMN, DataType::UInt8, false));
    Schema::new(fields)
}

fn to_record_batch(table: &FrameTable) -> CoreResult<RecordBatch> {
    let pixel_count = table.size().pixel_count();
    let schema = Arc::new(dataset_schema(pixel_count));

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(pixel_count + 1);
    for i in 0..pixel_count {
        let column: Vec<u8> = table.records().iter().map(|r| r.pixels()[i]).collect();
        columns.push(Arc::new(UInt8Array::from(column)) as ArrayRef);
    }
    let labels: Vec<u8> = table.records().iter().map(|r| r.label()).collect();
    columns.push(Arc::new(UInt8Array::from(labels)) as ArrayRef);

    Ok(RecordBatch::try_new(schema, columns)?)
}

/// Persists the table to `path` as a Feather v2 / Arrow IPC file.
pub fn write_feather(table: &FrameTable, path: &Path) -> CoreResult<()> {
    let batch = to_record_batch(table)?;
    let file = File::create(path)?;
    let mut writer = FileWriter::try_new(file, batch.schema().as_ref())?;
    writer.write(&batch)?;
    writer.finish()?;
    log::info!(
        "Wrote {} rows x {} columns to {}",
        batch.num_rows(),
        batch.num_columns(),
        path.display()
    );
    Ok(())
}

/// Reads all record batches back from a feather file.
pub fn read_feather(path: &Path) -> CoreResult<Vec<RecordBatch>> {
    let file = File::open(path)?;
    let reader = FileReader::try_new(file, None)?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(batches)
}
