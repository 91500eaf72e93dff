//! Implementation of the 'info' subcommand.
//!
//! Probes a single video, or every video found in the top level of a
//! directory.

use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::terminal;

use finframe_core::utils::get_filename_safe;
use finframe_core::{
    find_processable_files, format_bytes, format_duration, get_video_properties,
};

use std::path::Path;

pub fn run_info(args: InfoArgs) -> CliResult<()> {
    if args.input.is_dir() {
        for file in find_processable_files(&args.input)? {
            print_properties(&file)?;
        }
        Ok(())
    } else {
        print_properties(&args.input)
    }
}

fn print_properties(path: &Path) -> CliResult<()> {
    let props = get_video_properties(path)?;
    let size = std::fs::metadata(path)?.len();

    terminal::print_header(&get_filename_safe(path)?);
    terminal::print_status("resolution", &format!("{}x{}", props.width, props.height));
    terminal::print_status("duration", &format_duration(props.duration_secs));
    terminal::print_status("frame rate", &format!("{:.3} fps", props.fps));
    if let Some(frames) = props.total_frames {
        terminal::print_status("frames", &frames.to_string());
    }
    terminal::print_status("size", &format_bytes(size));
    Ok(())
}
