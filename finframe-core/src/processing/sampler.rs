//! Letterboxing-aware frame sampling.
//!
//! Turns a video into fixed-width dataset rows: decode sequentially, keep
//! every stride-th frame (uniform time-based subsampling, not
//! content-based), strip letterboxing, resize, flatten, label.

use crate::config::FrameSize;
use crate::dataset::FrameRecord;
use crate::error::CoreResult;
use crate::external::ffmpeg_executor::GrayFrameStream;
use crate::external::ffprobe_executor::VideoProperties;
use crate::processing::frame::GrayFrame;
use crate::processing::letterbox;

use std::path::Path;

/// Number of decoded frames between retained frames.
///
/// The frame rate is read once per video and assumed constant throughout;
/// intervals shorter than one frame period collapse to "keep every frame".
pub fn sample_stride(fps: f64, interval_secs: f64) -> u64 {
    ((interval_secs * fps).round() as u64).max(1)
}

/// Core sampling loop over an already-open frame iterator.
///
/// Keeps frames whose ordinal index is divisible by `stride` (index 0 is
/// always kept), applies letterbox removal and resizing, and attaches the
/// label. An iterator that yields nothing produces an empty vector.
pub fn sample_from_frames(
    frames: impl Iterator<Item = GrayFrame>,
    stride: u64,
    label: u8,
    target: FrameSize,
) -> Vec<FrameRecord> {
    let stride = stride.max(1);
    let mut records = Vec::new();
    for (index, frame) in frames.enumerate() {
        if index as u64 % stride != 0 {
            continue;
        }
        let content = letterbox::remove_letterbox(&frame);
        let pixels = content.resize_flatten(target);
        records.push(FrameRecord::new(pixels, label));
    }
    records
}

/// Samples labelled rows from a video file.
///
/// `props` must come from probing the same file; its frame rate fixes the
/// stride for the whole video. A decode failure mid-stream ends the
/// sequence early and returns whatever was accumulated.
pub fn sample_frames(
    video: &Path,
    props: &VideoProperties,
    interval_secs: f64,
    label: u8,
    target: FrameSize,
) -> CoreResult<Vec<FrameRecord>> {
    let stride = sample_stride(props.fps, interval_secs);
    log::debug!(
        "Sampling {} every {} frames ({} fps, {interval_secs}s interval)",
        video.display(),
        stride,
        props.fps
    );

    let mut stream = GrayFrameStream::open(video)?;
    let records = sample_from_frames(&mut stream, stride, label, target);

    match stream.finish() {
        Ok(status) if !status.success() => {
            log::warn!(
                "ffmpeg exited with {status} for {}; keeping {} sampled frames",
                video.display(),
                records.len()
            );
        }
        Ok(_) => {}
        Err(e) => log::warn!("Failed to collect ffmpeg exit status: {e}"),
    }

    log::info!(
        "Sampled {} frames from {} (label {label})",
        records.len(),
        video.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(count: usize, width: u32, height: u32) -> impl Iterator<Item = GrayFrame> {
        (0..count).map(move |i| {
            GrayFrame::from_raw(width, height, vec![(i % 256) as u8; (width * height) as usize])
                .unwrap()
        })
    }

    #[test]
    fn stride_rounds_to_whole_frames() {
        assert_eq!(sample_stride(25.0, 1.0), 25);
        assert_eq!(sample_stride(25.0, 4.0), 100);
        assert_eq!(sample_stride(29.97, 1.0), 30);
        // sub-frame intervals keep every frame
        assert_eq!(sample_stride(25.0, 0.01), 1);
    }

    #[test]
    fn keeps_ceil_of_n_over_stride() {
        let target = FrameSize::new(4, 4);
        for (n, stride, expected) in [(10, 3, 4), (9, 3, 3), (1, 5, 1), (100, 25, 4)] {
            let records = sample_from_frames(frames(n, 8, 8), stride, 1, target);
            assert_eq!(
                records.len(),
                expected,
                "{n} frames at stride {stride}"
            );
        }
    }

    #[test]
    fn empty_stream_yields_empty_sequence() {
        let records = sample_from_frames(frames(0, 8, 8), 10, 0, FrameSize::new(4, 4));
        assert!(records.is_empty());
    }

    #[test]
    fn rows_have_pixel_count_plus_label() {
        let target = FrameSize::new(6, 5);
        let records = sample_from_frames(frames(3, 12, 10), 1, 1, target);
        assert_eq!(records.len(), 3);
        for record in records {
            let row = record.into_row();
            assert_eq!(row.len(), target.pixel_count() + 1);
            assert_eq!(*row.last().unwrap(), 1);
        }
    }

    #[test]
    fn stride_one_keeps_every_frame() {
        let records = sample_from_frames(frames(7, 4, 4), 1, 0, FrameSize::new(2, 2));
        assert_eq!(records.len(), 7);
    }
}
