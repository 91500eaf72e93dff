//! Thin wrapper around the `yt-dlp` binary for fetching source footage.
//!
//! Mirrors how ffmpeg/ffprobe are wrapped: dependency check first, run with
//! captured output, map a non-zero exit to a command failure. No retries
//! and no resumable state; a failed download is rerun from scratch.

use crate::config::DownloadConfig;
use crate::error::{command_failed_error, command_start_error, CoreResult};

use std::process::Command;

const YTDLP_BIN: &str = "yt-dlp";

/// Downloads `url` into `config.save_dir` using yt-dlp.
///
/// Blocks until the download completes or fails.
pub fn download_video(url: &str, config: &DownloadConfig) -> CoreResult<()> {
    super::check_dependency(YTDLP_BIN)?;
    std::fs::create_dir_all(&config.save_dir)?;

    let mut cmd = Command::new(YTDLP_BIN);
    if config.live_from_start {
        cmd.arg("--live-from-start");
    }
    if config.no_part {
        cmd.arg("--no-part");
    }
    cmd.arg("-P").arg(&config.save_dir).arg(url);

    log::debug!("Running {cmd:?}");
    let output = cmd
        .output()
        .map_err(|e| command_start_error(YTDLP_BIN, e))?;

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        if !line.trim().is_empty() {
            log::info!("yt-dlp: {line}");
        }
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(command_failed_error(YTDLP_BIN, output.status, stderr));
    }

    log::info!("Downloaded video: {url}");
    Ok(())
}
