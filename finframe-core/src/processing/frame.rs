//! Single-channel frame buffer shared by the decoder and the sampler.

use image::imageops::FilterType;
use image::{GrayImage, ImageBuffer};

use crate::config::FrameSize;

/// A single-channel intensity frame, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayFrame {
    /// Wraps a raw luma buffer. Returns `None` when the buffer length does
    /// not match `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Copies the row range `[top, bottom)` into a new frame of the same
    /// width.
    pub fn crop_rows(&self, top: u32, bottom: u32) -> Self {
        debug_assert!(top < bottom && bottom <= self.height);
        let w = self.width as usize;
        let data = self.data[top as usize * w..bottom as usize * w].to_vec();
        Self {
            width: self.width,
            height: bottom - top,
            data,
        }
    }

    /// Resizes to the target resolution with bilinear filtering and returns
    /// the flattened row-major pixels.
    pub fn resize_flatten(&self, target: FrameSize) -> Vec<u8> {
        let image: GrayImage =
            ImageBuffer::from_raw(self.width, self.height, self.data.clone())
                .expect("buffer length is validated at construction");
        let resized = image::imageops::resize(
            &image,
            target.width,
            target.height,
            FilterType::Triangle,
        );
        resized.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(GrayFrame::from_raw(4, 2, vec![0; 7]).is_none());
        assert!(GrayFrame::from_raw(4, 2, vec![0; 8]).is_some());
    }

    #[test]
    fn crop_rows_keeps_width() {
        let frame = GrayFrame::from_raw(2, 4, (0..8).collect()).unwrap();
        let cropped = frame.crop_rows(1, 3);
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.data(), &[2, 3, 4, 5]);
    }

    #[test]
    fn resize_flatten_has_target_len() {
        let frame = GrayFrame::from_raw(8, 6, vec![128; 48]).unwrap();
        let target = FrameSize::new(4, 3);
        let flat = frame.resize_flatten(target);
        assert_eq!(flat.len(), target.pixel_count());
        // uniform input stays uniform through bilinear resampling
        assert!(flat.iter().all(|&p| p == 128));
    }
}
