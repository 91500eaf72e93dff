//! Conversion from dataset rows to training tensors, plus the monitored
//! metrics.

use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};

use crate::config::FrameSize;
use crate::dataset::FrameRecord;
use crate::error::{CoreError, CoreResult};

/// A batch of frames ready for the network: normalized images and 0/1
/// targets.
#[derive(Debug, Clone)]
pub struct SupervisedBatch<B: Backend> {
    /// `[B, 1, H, W]`, intensities scaled to 0..1.
    pub images: Tensor<B, 4>,
    /// `[B, 1]` class labels as floats.
    pub targets: Tensor<B, 2>,
}

/// Collates records into a [`SupervisedBatch`].
pub fn to_supervised_batch<B: Backend>(
    records: &[FrameRecord],
    size: FrameSize,
    device: &B::Device,
) -> CoreResult<SupervisedBatch<B>> {
    if records.is_empty() {
        return Err(CoreError::DatasetShape(
            "cannot batch zero records".to_string(),
        ));
    }

    let pixel_count = size.pixel_count();
    let mut image_buf: Vec<f32> = Vec::with_capacity(records.len() * pixel_count);
    let mut target_buf: Vec<f32> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if record.pixels().len() != pixel_count {
            return Err(CoreError::DatasetShape(format!(
                "record {i} has {} pixels, expected {pixel_count}",
                record.pixels().len()
            )));
        }
        image_buf.extend(record.pixels().iter().map(|&p| f32::from(p) / 255.0));
        target_buf.push(f32::from(record.label()));
    }

    let batch = records.len();
    let images = Tensor::<B, 4>::from_data(
        TensorData::new(
            image_buf,
            [batch, 1, size.height as usize, size.width as usize],
        ),
        device,
    );
    let targets = Tensor::<B, 2>::from_data(TensorData::new(target_buf, [batch, 1]), device);

    Ok(SupervisedBatch { images, targets })
}

/// Fraction of predictions on the right side of 0.5.
pub fn accuracy(predictions: &[f32], targets: &[f32]) -> f32 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|(&p, &t)| (p > 0.5) == (t > 0.5))
        .count();
    correct as f32 / predictions.len() as f32
}

/// True-positive rate: of the positive targets, the fraction predicted
/// positive. Returns 0 when there are no positive targets.
pub fn recall(predictions: &[f32], targets: &[f32]) -> f32 {
    let positives = targets.iter().filter(|&&t| t > 0.5).count();
    if positives == 0 {
        return 0.0;
    }
    let true_positives = predictions
        .iter()
        .zip(targets)
        .filter(|(&p, &t)| t > 0.5 && p > 0.5)
        .count();
    true_positives as f32 / positives as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    #[test]
    fn batch_shapes_follow_frame_size() {
        let size = FrameSize::new(4, 3);
        let records = vec![
            FrameRecord::new(vec![255; 12], 1),
            FrameRecord::new(vec![0; 12], 0),
        ];
        let batch =
            to_supervised_batch::<DefaultBackend>(&records, size, &Default::default()).unwrap();
        assert_eq!(batch.images.dims(), [2, 1, 3, 4]);
        assert_eq!(batch.targets.dims(), [2, 1]);

        let pixels = batch.images.into_data().to_vec::<f32>().unwrap();
        assert!((pixels[0] - 1.0).abs() < 1e-6);
        assert!(pixels[12].abs() < 1e-6);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let result =
            to_supervised_batch::<DefaultBackend>(&[], FrameSize::new(4, 3), &Default::default());
        assert!(result.is_err());
    }

    #[test]
    fn accuracy_counts_both_classes() {
        let predictions = [0.9, 0.2, 0.6, 0.4];
        let targets = [1.0, 0.0, 0.0, 0.0];
        assert!((accuracy(&predictions, &targets) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn recall_ignores_negatives() {
        let predictions = [0.9, 0.1, 0.8, 0.2];
        let targets = [1.0, 1.0, 0.0, 0.0];
        assert!((recall(&predictions, &targets) - 0.5).abs() < 1e-6);
        assert_eq!(recall(&predictions, &[0.0; 4]), 0.0);
    }
}
