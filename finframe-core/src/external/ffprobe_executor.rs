//! FFprobe integration for media analysis.
//!
//! Reads the properties the sampler needs up front: dimensions, duration,
//! and the container-level frame rate. The frame rate is read once per file
//! and assumed constant for the whole video; variable-frame-rate sources
//! will drift from the nominal sampling interval.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use ffprobe::{ffprobe, FfProbeError};
use std::path::Path;

/// Video stream properties needed by the frame sampler.
#[derive(Debug, Clone)]
pub struct VideoProperties {
    /// Width of the video stream in pixels
    pub width: u32,
    /// Height of the video stream in pixels
    pub height: u32,
    /// Duration of the media in seconds
    pub duration_secs: f64,
    /// Average frames per second of the video stream
    pub fps: f64,
    /// Total number of frames, when the container reports it
    pub total_frames: Option<u64>,
}

/// Gets video properties for a given input file.
pub fn get_video_properties(input_path: &Path) -> CoreResult<VideoProperties> {
    log::debug!(
        "Running ffprobe (via crate) for video properties on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => {
            let duration_secs = metadata
                .format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok())
                .ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "Failed to parse duration from format for {}",
                        input_path.display()
                    ))
                })?;

            let video_stream = metadata
                .streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
                .ok_or_else(|| {
                    CoreError::VideoInfoError(format!(
                        "No video stream found in {}",
                        input_path.display()
                    ))
                })?;

            let width = video_stream.width.ok_or_else(|| {
                CoreError::VideoInfoError(format!(
                    "Video stream missing width in {}",
                    input_path.display()
                ))
            })?;
            let height = video_stream.height.ok_or_else(|| {
                CoreError::VideoInfoError(format!(
                    "Video stream missing height in {}",
                    input_path.display()
                ))
            })?;
            if width <= 0 || height <= 0 {
                return Err(CoreError::VideoInfoError(format!(
                    "Invalid dimensions found in {}: width={}, height={}",
                    input_path.display(),
                    width,
                    height
                )));
            }

            // avg_frame_rate can be "0/0" for some containers; fall back to
            // the raw stream rate before giving up.
            let fps = parse_rate(&video_stream.avg_frame_rate)
                .or_else(|| parse_rate(&video_stream.r_frame_rate))
                .ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "Failed to parse frame rate '{}' for {}",
                        video_stream.avg_frame_rate,
                        input_path.display()
                    ))
                })?;

            let total_frames = video_stream
                .nb_frames
                .as_deref()
                .and_then(|f| f.parse::<u64>().ok());

            Ok(VideoProperties {
                width: width as u32,
                height: height as u32,
                duration_secs,
                fps,
                total_frames,
            })
        }
        Err(err) => {
            log::error!(
                "ffprobe failed for video properties on {}: {:?}",
                input_path.display(),
                err
            );
            Err(map_ffprobe_error(err, "video properties"))
        }
    }
}

/// Parses an ffprobe rational rate string ("30000/1001" or "25") into
/// frames per second. Returns `None` for zero or malformed rates.
fn parse_rate(rate: &str) -> Option<f64> {
    let fps = match rate.split_once('/') {
        Some((num, den)) => {
            let num = num.trim().parse::<f64>().ok()?;
            let den = den.trim().parse::<f64>().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => rate.trim().parse::<f64>().ok()?,
    };
    (fps.is_finite() && fps > 0.0).then_some(fps)
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::FfprobeParse(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
