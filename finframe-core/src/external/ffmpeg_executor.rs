//! FFmpeg integration for sequential frame decoding.
//!
//! Decoding is delegated entirely to ffmpeg: the video's first stream is
//! piped out as raw single-channel luma frames and consumed through
//! ffmpeg-sidecar's event iterator. No seeking, no re-decoding; frames
//! arrive in presentation order.

use crate::error::{CoreError, CoreResult};
use crate::processing::frame::GrayFrame;

use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use ffmpeg_sidecar::iter::FfmpegIterator;

use std::path::Path;
use std::process::ExitStatus;

/// Builds the ffmpeg command that decodes the first video stream of
/// `input` to raw 8-bit luma frames on stdout.
pub fn gray_frame_command(input: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new();
    cmd.input(input.to_string_lossy())
        .args(["-map", "0:v:0"])
        .format("rawvideo")
        .pix_fmt("gray")
        .output("-");
    cmd
}

/// Iterator over decoded frames of a running ffmpeg process.
///
/// Yields frames until end-of-stream or the first decode failure; a failed
/// decode simply ends the iteration early with whatever ffmpeg produced.
pub struct GrayFrameStream {
    child: FfmpegChild,
    events: FfmpegIterator,
}

impl GrayFrameStream {
    /// Spawns ffmpeg for `input` and returns the frame iterator.
    pub fn open(input: &Path) -> CoreResult<Self> {
        log::debug!("Spawning ffmpeg frame decode for {}", input.display());
        let mut child = gray_frame_command(input).spawn().map_err(|e| {
            CoreError::Decode(format!(
                "failed to start ffmpeg for {}: {e}",
                input.display()
            ))
        })?;
        let events = child.iter().map_err(|e| {
            CoreError::Decode(format!(
                "failed to read ffmpeg events for {}: {e}",
                input.display()
            ))
        })?;
        Ok(Self { child, events })
    }

    /// Waits for the ffmpeg process to exit and returns its status.
    ///
    /// Call after draining the iterator; a non-success status means the
    /// decode stopped early and the yielded frames are a prefix of the
    /// video.
    pub fn finish(mut self) -> CoreResult<ExitStatus> {
        self.child
            .wait()
            .map_err(|e| crate::error::command_wait_error("ffmpeg", e))
    }
}

impl Iterator for GrayFrameStream {
    type Item = GrayFrame;

    fn next(&mut self) -> Option<GrayFrame> {
        for event in self.events.by_ref() {
            match event {
                FfmpegEvent::OutputFrame(frame) => {
                    match GrayFrame::from_raw(frame.width, frame.height, frame.data) {
                        Some(gray) => return Some(gray),
                        None => {
                            log::warn!(
                                "Skipping frame {} with unexpected buffer size",
                                frame.frame_num
                            );
                        }
                    }
                }
                FfmpegEvent::Error(msg) | FfmpegEvent::Log(LogLevel::Error, msg) => {
                    log::warn!("ffmpeg: {msg}");
                }
                _ => {}
            }
        }
        None
    }
}
