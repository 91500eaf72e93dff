//! File discovery for finding video files to sample.
//!
//! Scans the top level of a directory for common video container
//! extensions; subdirectories are not searched.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "mov", "webm"];

/// Checks whether the path looks like a video file the sampler can read.
#[must_use]
pub fn is_video_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            })
            .unwrap_or(false)
}

/// Finds video files in the top level of `input_dir`, sorted by name.
///
/// Returns `CoreError::NoFilesFound` when the directory contains none.
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            is_video_file(&path).then_some(path)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn finds_only_video_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.mp4", "b.MKV", "c.txt", "d.webm.bak"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let files = find_processable_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.mp4", "b.MKV"]);
    }

    #[test]
    fn empty_dir_is_no_files_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_processable_files(dir.path()),
            Err(CoreError::NoFilesFound)
        ));
    }
}
