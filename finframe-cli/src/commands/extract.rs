//! Implementation of the 'extract' subcommand.
//!
//! Builds the labelled frame dataset: samples the positive and (optional)
//! negative videos, assembles the combined table, and writes the feather
//! output.

use crate::cli::ExtractArgs;
use crate::error::CliResult;
use crate::logging::get_timestamp;
use crate::terminal;

use finframe_core::config::{
    DatasetConfigBuilder, FrameSize, LabelledSource, NEGATIVE_LABEL, POSITIVE_LABEL,
};
use finframe_core::{build_dataset, CoreError};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::info;

pub fn run_extract(args: ExtractArgs) -> CliResult<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("fish_frames_{}.feather", get_timestamp())));

    if args.csv_dump.is_some() && args.negative.is_none() {
        return Err(CoreError::Config(
            "--csv-dump requires a --negative video".to_string(),
        ));
    }

    let mut builder = DatasetConfigBuilder::new()
        .target(FrameSize::new(args.width, args.height))
        .output_path(output.clone())
        .source(LabelledSource::new(
            &args.positive,
            args.positive_interval,
            POSITIVE_LABEL,
        ));
    if let Some(negative) = &args.negative {
        let mut source = LabelledSource::new(negative, args.negative_interval, NEGATIVE_LABEL);
        if let Some(csv_path) = &args.csv_dump {
            source = source.with_csv_dump(csv_path);
        }
        builder = builder.source(source);
    }
    let config = builder.build();
    config.validate()?;

    info!("Building dataset -> {}", output.display());
    let start = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid template"),
    );
    spinner.set_message("Sampling frames...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = build_dataset(&config);
    spinner.finish_and_clear();
    let summary = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    terminal::print_header("Dataset");
    for source in &summary.sources {
        terminal::print_status(
            &format!("label {}", source.label),
            &format!("{} rows from {}", source.rows, source.path.display()),
        );
    }
    terminal::print_status("rows", &summary.rows.to_string());
    terminal::print_status("columns", &summary.columns.to_string());
    terminal::print_status(
        "elapsed",
        &finframe_core::format_duration(start.elapsed().as_secs_f64()),
    );
    terminal::print_success(&format!("Wrote {}", summary.output_path.display()));
    Ok(())
}
