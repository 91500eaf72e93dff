//! Frame processing: the sampling pipeline from video files to the
//! persisted dataset.

pub mod frame;
pub mod letterbox;
pub mod sampler;

use crate::config::DatasetConfig;
use crate::dataset::{self, DatasetSummary, FrameTable, SourceSummary};
use crate::error::CoreResult;
use crate::external::ffprobe_executor;

/// Runs the full dataset build described by `config`.
///
/// Each source is probed, sampled, and optionally CSV-dumped; the rows of
/// all sources are concatenated in configuration order and written to the
/// feather output.
pub fn build_dataset(config: &DatasetConfig) -> CoreResult<DatasetSummary> {
    config.validate()?;

    let mut all_records = Vec::new();
    let mut sources = Vec::with_capacity(config.sources.len());

    for source in &config.sources {
        let props = ffprobe_executor::get_video_properties(&source.path)?;
        log::debug!(
            "{}: {}x{}, {:.2}s at {:.3} fps",
            source.path.display(),
            props.width,
            props.height,
            props.duration_secs,
            props.fps
        );

        let records = sampler::sample_frames(
            &source.path,
            &props,
            source.interval_secs,
            source.label,
            config.target,
        )?;

        if let Some(csv_path) = &source.csv_dump {
            dataset::write_csv(&records, csv_path)?;
        }

        sources.push(SourceSummary {
            path: source.path.clone(),
            label: source.label,
            rows: records.len(),
        });
        all_records.extend(records);
    }

    let table = FrameTable::from_records(all_records, config.target)?;
    dataset::write_feather(&table, &config.output_path)?;

    Ok(DatasetSummary {
        rows: table.num_rows(),
        columns: table.num_columns(),
        sources,
        output_path: config.output_path.clone(),
    })
}
