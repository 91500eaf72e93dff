//! Interactions with external command-line tools.
//!
//! Everything that shells out lives here: media probing through the
//! `ffprobe` crate, frame decoding through `ffmpeg-sidecar`, and the
//! `yt-dlp` download wrapper. The rest of the crate never spawns a
//! process directly.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

pub mod ffmpeg_executor;
pub mod ffprobe_executor;
pub mod ytdlp_executor;

pub use ffmpeg_executor::{gray_frame_command, GrayFrameStream};
pub use ffprobe_executor::{get_video_properties, VideoProperties};
pub use ytdlp_executor::download_video;

/// Checks that a required external command exists and can be started.
///
/// Runs `<cmd> --version` with output discarded; only the spawn result
/// matters.
pub(crate) fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
