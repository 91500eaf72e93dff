// finframe-core/tests/dataset_tests.rs
//
// End-to-end checks for dataset assembly and feather persistence using
// small synthetic tables.

use finframe_core::config::FrameSize;
use finframe_core::dataset::{read_feather, write_feather, FrameRecord, FrameTable};

use arrow_array::UInt8Array;
use tempfile::tempdir;

fn synthetic_table(positives: usize, negatives: usize, size: FrameSize) -> FrameTable {
    let mut records = Vec::new();
    for i in 0..positives {
        records.push(FrameRecord::new(vec![i as u8; size.pixel_count()], 1));
    }
    for i in 0..negatives {
        records.push(FrameRecord::new(vec![(100 + i) as u8; size.pixel_count()], 0));
    }
    FrameTable::from_records(records, size).expect("uniform rows")
}

#[test]
fn feather_file_preserves_rows_and_schema() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fish_frames.feather");
    let size = FrameSize::new(4, 3);
    let table = synthetic_table(5, 3, size);

    write_feather(&table, &path).unwrap();
    let batches = read_feather(&path).unwrap();

    let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(total_rows, 8);

    let schema = batches[0].schema();
    assert_eq!(schema.fields().len(), size.pixel_count() + 1);
    assert_eq!(schema.field(0).name().as_str(), "0");
    assert_eq!(
        schema.field(size.pixel_count() - 1).name().as_str(),
        (size.pixel_count() - 1).to_string()
    );
    assert_eq!(schema.fields().last().unwrap().name().as_str(), "label");
}

#[test]
fn feather_label_column_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.feather");
    let size = FrameSize::new(2, 2);
    let table = synthetic_table(2, 1, size);

    write_feather(&table, &path).unwrap();
    let batches = read_feather(&path).unwrap();
    let batch = &batches[0];

    let labels = batch
        .column(batch.num_columns() - 1)
        .as_any()
        .downcast_ref::<UInt8Array>()
        .unwrap();
    assert_eq!(labels.values().as_ref(), &[1u8, 1, 0][..]);
}

#[test]
fn positive_and_negative_sequences_concatenate() {
    let size = FrameSize::new(3, 3);
    let table = synthetic_table(7, 4, size);
    assert_eq!(table.num_rows(), 11);
    assert_eq!(table.rows_with_label(1), 7);
    assert_eq!(table.rows_with_label(0), 4);
}
