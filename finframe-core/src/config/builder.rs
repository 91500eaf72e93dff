//! Builder pattern for [`DatasetConfig`].

use std::path::PathBuf;

use super::{DatasetConfig, FrameSize, LabelledSource};

/// Builder for creating [`DatasetConfig`] instances.
///
/// # Examples
///
/// ```rust
/// use finframe_core::config::{DatasetConfigBuilder, LabelledSource, POSITIVE_LABEL, NEGATIVE_LABEL};
/// use std::path::PathBuf;
///
/// let config = DatasetConfigBuilder::new()
///     .source(LabelledSource::new("fish_frames.mp4", 1.0, POSITIVE_LABEL))
///     .source(LabelledSource::new("no_fish_frames.mp4", 4.0, NEGATIVE_LABEL))
///     .output_path(PathBuf::from("fish_frames.feather"))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetConfigBuilder {
    sources: Vec<LabelledSource>,
    target: Option<FrameSize>,
    output_path: Option<PathBuf>,
}

impl DatasetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labelled video source. Rows appear in the output in the
    /// order sources are added.
    pub fn source(mut self, source: LabelledSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Overrides the default target resolution.
    pub fn target(mut self, target: FrameSize) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the feather output path.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    /// Call [`DatasetConfig::validate`] before handing it to the pipeline.
    pub fn build(self) -> DatasetConfig {
        DatasetConfig {
            sources: self.sources,
            target: self.target.unwrap_or_default(),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from("fish_frames.feather")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POSITIVE_LABEL;

    #[test]
    fn builder_fills_defaults() {
        let config = DatasetConfigBuilder::new()
            .source(LabelledSource::new("a.mp4", 1.0, POSITIVE_LABEL))
            .build();
        assert_eq!(config.target, FrameSize::default());
        assert_eq!(config.output_path, PathBuf::from("fish_frames.feather"));
        assert!(config.validate().is_ok());
    }
}
