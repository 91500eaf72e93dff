//! Configuration structures and constants for the finframe-core library.
//!
//! Every tunable that used to live as a literal inside a script body is a
//! named constant here, and the dataset pipeline takes an explicit
//! `DatasetConfig` instead of reading globals.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::DatasetConfigBuilder;

// Default constants

/// Default width frames are resized to before flattening.
pub const DEFAULT_TARGET_WIDTH: u32 = 352;

/// Default height frames are resized to before flattening.
pub const DEFAULT_TARGET_HEIGHT: u32 = 288;

/// Default sampling interval for positive-class (fish) footage, in seconds.
pub const DEFAULT_POSITIVE_INTERVAL_SECS: f64 = 1.0;

/// Default sampling interval for negative-class (no fish) footage, in seconds.
pub const DEFAULT_NEGATIVE_INTERVAL_SECS: f64 = 4.0;

/// Class label for frames containing fish.
pub const POSITIVE_LABEL: u8 = 1;

/// Class label for frames without fish.
pub const NEGATIVE_LABEL: u8 = 0;

/// A frame row counts as content (not letterbox) when its intensity sum
/// exceeds this fraction of the mean row sum. The small margin absorbs
/// compression artifacts in the black bars.
pub const LETTERBOX_ROW_SUM_RATIO: f64 = 0.1;

/// Gallery page the reference-image scraper reads by default.
pub const DEFAULT_SCRAPE_URL: &str = "https://visdeurbel.nl/en/fish-updates/";

/// User agent sent with scraper requests.
pub const SCRAPE_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Fixed target resolution frames are resized to after letterbox removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels in a flattened frame (excluding the label element).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_TARGET_WIDTH,
            height: DEFAULT_TARGET_HEIGHT,
        }
    }
}

/// One video to sample, together with its class label and sampling interval.
#[derive(Debug, Clone)]
pub struct LabelledSource {
    /// Path to the video file.
    pub path: PathBuf,

    /// Seconds between retained frames.
    pub interval_secs: f64,

    /// Class label appended to every row sampled from this source.
    pub label: u8,

    /// Optional plain-CSV dump of this source's rows, written in addition
    /// to the combined feather output.
    pub csv_dump: Option<PathBuf>,
}

impl LabelledSource {
    pub fn new(path: impl Into<PathBuf>, interval_secs: f64, label: u8) -> Self {
        Self {
            path: path.into(),
            interval_secs,
            label,
            csv_dump: None,
        }
    }

    pub fn with_csv_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_dump = Some(path.into());
        self
    }
}

/// Configuration for one dataset build: which videos to sample, how to
/// sample them, and where the assembled table goes.
///
/// Typically created through [`DatasetConfigBuilder`].
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Videos to sample, in the order their rows appear in the output.
    pub sources: Vec<LabelledSource>,

    /// Resolution every kept frame is resized to.
    pub target: FrameSize,

    /// Path of the feather file the assembled table is written to.
    pub output_path: PathBuf,
}

impl DatasetConfig {
    /// Checks the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.sources.is_empty() {
            return Err(CoreError::Config("no sources configured".to_string()));
        }
        if self.target.width == 0 || self.target.height == 0 {
            return Err(CoreError::Config(format!(
                "target resolution must be non-zero, got {}x{}",
                self.target.width, self.target.height
            )));
        }
        for source in &self.sources {
            if !(source.interval_secs.is_finite() && source.interval_secs > 0.0) {
                return Err(CoreError::Config(format!(
                    "sampling interval for '{}' must be a positive number of seconds, got {}",
                    source.path.display(),
                    source.interval_secs
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the reference-image scraper.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Gallery page to fetch.
    pub url: String,

    /// Directory the scraper writes into; images land in `<save_dir>/imgs/`
    /// and metadata in `<save_dir>/img_data.csv`.
    pub save_dir: PathBuf,
}

impl ScrapeConfig {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: DEFAULT_SCRAPE_URL.to_string(),
            save_dir: save_dir.into(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Configuration for the yt-dlp download wrapper.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Directory downloads are written to (yt-dlp `-P`).
    pub save_dir: PathBuf,

    /// Download live streams from their first fragment (`--live-from-start`).
    pub live_from_start: bool,

    /// Write directly to the final filename instead of a `.part` file
    /// (`--no-part`).
    pub no_part: bool,
}

impl DownloadConfig {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            live_from_start: true,
            no_part: true,
        }
    }
}
