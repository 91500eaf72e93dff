// finframe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finframe_core::config::{
    DEFAULT_NEGATIVE_INTERVAL_SECS, DEFAULT_POSITIVE_INTERVAL_SECS, DEFAULT_SCRAPE_URL,
    DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH,
};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "finframe: fish-detection dataset tooling",
    long_about = "Builds labelled frame datasets from video footage, scrapes reference \
                  images, and fetches source videos via the finframe-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Samples labelled frames from videos into a feather dataset
    Extract(ExtractArgs),
    /// Downloads gallery images and their captions for reference
    Scrape(ScrapeArgs),
    /// Fetches a source video with yt-dlp
    Fetch(FetchArgs),
    /// Prints the properties of a video file
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Video containing fish (label 1)
    #[arg(long, required = true, value_name = "VIDEO")]
    pub positive: PathBuf,

    /// Video without fish (label 0)
    #[arg(long, value_name = "VIDEO")]
    pub negative: Option<PathBuf>,

    /// Seconds between kept frames of the positive video
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_POSITIVE_INTERVAL_SECS)]
    pub positive_interval: f64,

    /// Seconds between kept frames of the negative video
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_NEGATIVE_INTERVAL_SECS)]
    pub negative_interval: f64,

    /// Width frames are resized to
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TARGET_WIDTH)]
    pub width: u32,

    /// Height frames are resized to
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TARGET_HEIGHT)]
    pub height: u32,

    /// Feather output path (defaults to fish_frames_<timestamp>.feather)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Additionally dump the negative video's rows as plain CSV
    #[arg(long, value_name = "PATH")]
    pub csv_dump: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ScrapeArgs {
    /// Gallery page to scrape
    #[arg(long, value_name = "URL", default_value = DEFAULT_SCRAPE_URL)]
    pub url: String,

    /// Directory for downloaded images and the metadata CSV
    #[arg(long, value_name = "DIR", default_value = "data/original/fish_of_the_week")]
    pub out_dir: PathBuf,
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Video URL to download
    #[arg(required = true, value_name = "URL")]
    pub url: String,

    /// Directory the download is written to
    #[arg(long, value_name = "DIR", default_value = "data/original")]
    pub out_dir: PathBuf,

    /// Do not download live streams from their first fragment
    #[arg(long)]
    pub no_live_from_start: bool,

    /// Write through a .part file instead of directly to the final name
    #[arg(long)]
    pub keep_part: bool,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Video file, or a directory of videos, to probe
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}
