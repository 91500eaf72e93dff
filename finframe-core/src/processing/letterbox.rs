//! Letterbox (black bar) detection and removal.
//!
//! Works on a single decoded frame rather than sampling across the video:
//! sum the pixel intensities of each row, treat rows whose sum exceeds 10%
//! of the mean row sum as content, and crop to the first..last content row.
//! The threshold is relative so compression artifacts in the bars don't
//! count as content.

use crate::config::LETTERBOX_ROW_SUM_RATIO;
use crate::processing::frame::GrayFrame;

/// Per-row sum of pixel intensities, top to bottom.
pub fn row_sums(frame: &GrayFrame) -> Vec<u64> {
    (0..frame.height())
        .map(|y| frame.row(y).iter().map(|&p| u64::from(p)).sum())
        .collect()
}

/// Finds the content row range `[top, bottom)`, or `None` when no row
/// clears the brightness threshold (near-black frame).
pub fn detect_bounds(frame: &GrayFrame) -> Option<(u32, u32)> {
    let sums = row_sums(frame);
    if sums.is_empty() {
        return None;
    }

    let mean = sums.iter().sum::<u64>() as f64 / sums.len() as f64;
    let threshold = mean * LETTERBOX_ROW_SUM_RATIO;

    let mut content = sums
        .iter()
        .enumerate()
        .filter(|&(_, &sum)| sum as f64 > threshold);

    let first = content.next()?.0 as u32;
    let last = content.last().map_or(first, |(i, _)| i as u32);
    Some((first, last + 1))
}

/// Strips letterboxing from a frame.
///
/// Returns the frame unchanged when nothing clears the threshold or when
/// the detected content already spans the full height.
pub fn remove_letterbox(frame: &GrayFrame) -> GrayFrame {
    match detect_bounds(frame) {
        Some((top, bottom)) if top > 0 || bottom < frame.height() => {
            log::trace!(
                "Cropping letterbox: rows {top}..{bottom} of {}",
                frame.height()
            );
            frame.crop_rows(top, bottom)
        }
        _ => frame.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame with `black_top` black rows, then `content` rows of uniform
    /// brightness, then `black_bottom` black rows.
    fn letterboxed(width: u32, black_top: u32, content: u32, black_bottom: u32) -> GrayFrame {
        let height = black_top + content + black_bottom;
        let mut data = vec![0u8; (width * height) as usize];
        for y in black_top..black_top + content {
            for x in 0..width {
                data[(y * width + x) as usize] = 200;
            }
        }
        GrayFrame::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn crops_to_interior_rows() {
        let frame = letterboxed(8, 3, 10, 3);
        let cropped = remove_letterbox(&frame);
        assert_eq!(cropped.height(), 10);
        assert_eq!(cropped.width(), 8);
        assert!(cropped.data().iter().all(|&p| p == 200));
    }

    #[test]
    fn detect_bounds_finds_interior_range() {
        let frame = letterboxed(8, 2, 5, 4);
        assert_eq!(detect_bounds(&frame), Some((2, 7)));
    }

    #[test]
    fn all_black_frame_is_untouched() {
        let frame = GrayFrame::from_raw(8, 6, vec![0; 48]).unwrap();
        let out = remove_letterbox(&frame);
        assert_eq!(out, frame);
    }

    #[test]
    fn frame_without_bars_is_untouched() {
        let frame = letterboxed(8, 0, 6, 0);
        let out = remove_letterbox(&frame);
        assert_eq!(out, frame);
    }

    #[test]
    fn asymmetric_bars_are_cropped() {
        let frame = letterboxed(4, 5, 7, 0);
        let cropped = remove_letterbox(&frame);
        assert_eq!(cropped.height(), 7);
    }

    #[test]
    fn dim_rows_below_threshold_count_as_bars() {
        // interior at 200, bars at a brightness well under 10% of the mean
        let width = 10u32;
        let mut data = vec![2u8; (width * 10) as usize];
        for y in 2..8 {
            for x in 0..width {
                data[(y * width + x) as usize] = 200;
            }
        }
        let frame = GrayFrame::from_raw(width, 10, data).unwrap();
        assert_eq!(detect_bounds(&frame), Some((2, 8)));
    }
}
