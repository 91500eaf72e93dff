//! HTML parsing for the fish-of-the-week gallery.
//!
//! The page structure is fixed: media blocks carry a `data-slide-index`
//! that links them to a slide-content block holding the captions. Parsing
//! is separated from fetching so it can run against fixture HTML.

use scraper::{Html, Selector};

use crate::error::{CoreError, CoreResult};

const MEDIA_CLASS: &str = ".fish-of-the-week__media";
const CONTENT_CLASS: &str = ".fish-of-the-week__slide-content";
const DESCRIPTION_CLASS: &str = ".fish-of-the-week__description";

/// One gallery image: its id (URL filename stem), source URL, and joined
/// caption text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub id: String,
    pub source: String,
    pub description: String,
}

fn selector(css: &str) -> CoreResult<Selector> {
    Selector::parse(css)
        .map_err(|_| CoreError::ScrapeParse(format!("invalid selector '{css}'")))
}

/// Extracts all gallery entries from the page HTML.
///
/// Media blocks without an `img` or without a `src` are skipped with a
/// warning; a missing caption block yields an empty description.
pub fn parse_gallery(html: &str) -> CoreResult<Vec<GalleryEntry>> {
    let document = Html::parse_document(html);
    let media_sel = selector(MEDIA_CLASS)?;
    let img_sel = selector("img")?;
    let content_sel = selector(CONTENT_CLASS)?;
    let desc_sel = selector(DESCRIPTION_CLASS)?;

    let mut entries = Vec::new();
    for media in document.select(&media_sel) {
        let Some(src) = media
            .select(&img_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
        else {
            log::warn!("Gallery media block without an image source, skipping");
            continue;
        };

        let description = media
            .value()
            .attr("data-slide-index")
            .map(|index| {
                document
                    .select(&content_sel)
                    .find(|content| content.value().attr("data-slide-index") == Some(index))
                    .map(|content| {
                        content
                            .select(&desc_sel)
                            .map(|d| d.text().collect::<String>().trim().to_string())
                            .collect::<Vec<_>>()
                            .join(";")
                    })
                    .unwrap_or_default()
            })
            .unwrap_or_default();

        entries.push(GalleryEntry {
            id: filename_stem(src),
            source: src.to_string(),
            description,
        });
    }

    Ok(entries)
}

/// Filename stem of a URL's last path segment, query/fragment stripped.
pub fn filename_stem(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or(url);
    let last = last.split(['?', '#']).next().unwrap_or(last);
    match last.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => last.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
<html><body>
  <div class="fish-of-the-week__media" data-slide-index="0">
    <img src="https://cdn.example.org/uploads/zeelt-2024.jpeg" />
  </div>
  <div class="fish-of-the-week__media" data-slide-index="1">
    <img src="https://cdn.example.org/uploads/snoek.jpeg" />
  </div>
  <div class="fish-of-the-week__media" data-slide-index="2"><p>no image here</p></div>
  <div class="fish-of-the-week__slide-content" data-slide-index="0">
    <p class="fish-of-the-week__description">A tench passing the doorbell</p>
    <p class="fish-of-the-week__description">Week 12</p>
  </div>
  <div class="fish-of-the-week__slide-content" data-slide-index="1"></div>
</body></html>
"#;

    #[test]
    fn parses_entries_with_joined_descriptions() {
        let entries = parse_gallery(FIXTURE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "zeelt-2024");
        assert_eq!(
            entries[0].source,
            "https://cdn.example.org/uploads/zeelt-2024.jpeg"
        );
        assert_eq!(
            entries[0].description,
            "A tench passing the doorbell;Week 12"
        );
    }

    #[test]
    fn entry_without_captions_has_empty_description() {
        let entries = parse_gallery(FIXTURE).unwrap();
        assert_eq!(entries[1].id, "snoek");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn media_without_image_is_skipped() {
        let entries = parse_gallery(FIXTURE).unwrap();
        assert!(entries.iter().all(|e| !e.source.is_empty()));
    }

    #[test]
    fn empty_page_yields_no_entries() {
        let entries = parse_gallery("<html><body></body></html>").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn filename_stem_strips_extension_and_query() {
        assert_eq!(filename_stem("https://x.org/a/b/zeelt.jpeg"), "zeelt");
        assert_eq!(filename_stem("https://x.org/a/b/zeelt.jpeg?w=800"), "zeelt");
        assert_eq!(filename_stem("plain"), "plain");
        assert_eq!(filename_stem("archive.tar.gz"), "archive.tar");
    }
}
