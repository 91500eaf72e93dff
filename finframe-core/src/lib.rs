//! Core library for building fish-detection training datasets from video.
//!
//! This crate turns raw footage into a columnar training dataset: frames
//! are sampled at a fixed time interval, letterboxing is stripped, and the
//! flattened grayscale rows are written to a feather file with one column
//! per pixel position plus a label column. It also carries the CNN
//! definitions trained on that dataset, a scraper for reference images,
//! and a yt-dlp wrapper for fetching footage.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use finframe_core::config::{DatasetConfigBuilder, LabelledSource, NEGATIVE_LABEL, POSITIVE_LABEL};
//! use finframe_core::processing::build_dataset;
//!
//! let config = DatasetConfigBuilder::new()
//!     .source(LabelledSource::new("data/working/fish_frames.mp4", 1.0, POSITIVE_LABEL))
//!     .source(LabelledSource::new("data/working/no_fish_frames.mp4", 4.0, NEGATIVE_LABEL))
//!     .output_path("data/working/fish_frames.feather")
//!     .build();
//!
//! let summary = build_dataset(&config).unwrap();
//! println!("{} rows x {} columns", summary.rows, summary.columns);
//! ```

pub mod config;
pub mod dataset;
pub mod discovery;
pub mod error;
pub mod external;
pub mod model;
pub mod processing;
pub mod scrape;
pub mod utils;

// Re-exports for public API
pub use config::{DatasetConfig, DownloadConfig, FrameSize, LabelledSource, ScrapeConfig};
pub use dataset::{DatasetSummary, FrameRecord, FrameTable};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{download_video, get_video_properties, VideoProperties};
pub use processing::build_dataset;
pub use scrape::{GalleryScraper, ScrapeSummary};
pub use utils::{format_bytes, format_duration};
