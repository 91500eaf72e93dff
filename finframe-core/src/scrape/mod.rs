//! One-shot scraper for reference fish images.
//!
//! Fetches the gallery page, downloads every image into
//! `<save_dir>/imgs/`, and records metadata in `<save_dir>/img_data.csv`.
//! No retry, no pagination, no resumable state; any network or filesystem
//! failure aborts the run.

mod parser;

use crate::config::{ScrapeConfig, SCRAPE_USER_AGENT};
use crate::error::CoreResult;

use reqwest::blocking::Client;
use serde::Serialize;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use parser::{filename_stem, parse_gallery, GalleryEntry};

/// Name of the metadata file written next to the image directory.
const METADATA_FILENAME: &str = "img_data.csv";

/// Result of one scraper run.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeSummary {
    pub entries: usize,
    pub images_dir: PathBuf,
    pub csv_path: PathBuf,
}

/// Blocking scraper for the fish gallery page.
pub struct GalleryScraper {
    client: Client,
}

impl GalleryScraper {
    pub fn new() -> CoreResult<Self> {
        let client = Client::builder().user_agent(SCRAPE_USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Fetches the configured page, downloads all gallery images, and
    /// writes the metadata CSV.
    pub fn run(&self, config: &ScrapeConfig) -> CoreResult<ScrapeSummary> {
        log::info!("Scraping {}", config.url);
        let html = self
            .client
            .get(&config.url)
            .send()?
            .error_for_status()?
            .text()?;

        let entries = parse_gallery(&html)?;
        log::info!("Found {} gallery entries", entries.len());

        let images_dir = config.save_dir.join("imgs");
        fs::create_dir_all(&images_dir)?;
        for entry in &entries {
            let target = images_dir.join(format!("{}.jpg", entry.id));
            self.download_image(&entry.source, &target)?;
        }

        let csv_path = config.save_dir.join(METADATA_FILENAME);
        write_metadata_csv(&entries, &csv_path)?;

        Ok(ScrapeSummary {
            entries: entries.len(),
            images_dir,
            csv_path,
        })
    }

    fn download_image(&self, url: &str, target: &Path) -> CoreResult<()> {
        log::debug!("Downloading {url} -> {}", target.display());
        let bytes = self.client.get(url).send()?.error_for_status()?.bytes()?;
        fs::write(target, &bytes)?;
        Ok(())
    }
}

/// Writes entries as `id,source,description` rows with proper field
/// escaping.
fn write_metadata_csv(entries: &[GalleryEntry], path: &Path) -> CoreResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "id,source,description")?;
    for entry in entries {
        writeln!(
            writer,
            "{},{},{}",
            csv_field(&entry.id),
            csv_field(&entry.source),
            csv_field(&entry.description)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_passes_plain_text_through() {
        assert_eq!(csv_field("zeelt-2024"), "zeelt-2024");
    }

    #[test]
    fn csv_field_quotes_delimiters_and_quotes() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn metadata_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(METADATA_FILENAME);
        let entries = vec![
            GalleryEntry {
                id: "zeelt".to_string(),
                source: "https://x.org/zeelt.jpeg".to_string(),
                description: "tench; week 12".to_string(),
            },
            GalleryEntry {
                id: "snoek".to_string(),
                source: "https://x.org/snoek.jpeg".to_string(),
                description: "a pike, again".to_string(),
            },
        ];
        write_metadata_csv(&entries, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "id,source,description");
        assert_eq!(lines[1], "zeelt,https://x.org/zeelt.jpeg,tench; week 12");
        assert_eq!(lines[2], "snoek,https://x.org/snoek.jpeg,\"a pike, again\"");
        assert_eq!(lines.len(), 3);
    }
}
