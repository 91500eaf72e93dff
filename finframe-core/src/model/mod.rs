//! CNN definitions for the binary fish classifier.
//!
//! These are declarative layer compositions handed to burn; all numerical
//! work (convolution, backprop, optimization) happens inside the
//! framework. Four variants share one topology and differ only in their
//! hidden stack, see [`FishCnnVariant`].

pub mod batch;
pub mod cnn;

pub use batch::{accuracy, recall, to_supervised_batch, SupervisedBatch};
pub use cnn::{FishCnn, FishCnnConfig, FishCnnVariant, HiddenActivation};

use burn::optim::{GradientsParams, Optimizer, SgdConfig};
use burn::tensor::backend::AutodiffBackend;
use burn::tensor::ElementConversion;

/// CPU backend the models run on by default.
pub type DefaultBackend = burn::backend::NdArray<f32>;

/// Autodiff-enabled backend for training.
pub type TrainBackend = burn::backend::Autodiff<DefaultBackend>;

/// The fixed optimizer every variant is compiled with.
pub fn sgd_config() -> SgdConfig {
    SgdConfig::new()
}

/// Runs one SGD step on a batch and returns the updated model together
/// with the batch loss.
pub fn train_step<B, O>(
    model: FishCnn<B>,
    optim: &mut O,
    batch: &SupervisedBatch<B>,
    learning_rate: f64,
) -> (FishCnn<B>, f32)
where
    B: AutodiffBackend,
    O: Optimizer<FishCnn<B>, B>,
{
    let predictions = model.forward(batch.images.clone());
    let loss = model.loss(predictions, batch.targets.clone());
    let loss_scalar = loss.clone().into_scalar().elem::<f32>();
    let grads = GradientsParams::from_grads(loss.backward(), &model);
    let model = optim.step(learning_rate, model, grads);
    (model, loss_scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameSize;
    use crate::dataset::FrameRecord;

    #[test]
    fn sgd_step_produces_finite_loss() {
        let device = Default::default();
        let size = FrameSize::new(8, 6);
        let model = FishCnn::<TrainBackend>::new(
            FishCnnConfig::new(FishCnnVariant::V3, size),
            &device,
        );
        let records = vec![
            FrameRecord::new(vec![200; size.pixel_count()], 1),
            FrameRecord::new(vec![10; size.pixel_count()], 0),
        ];
        let batch = to_supervised_batch::<TrainBackend>(&records, size, &device).unwrap();

        let mut optim = sgd_config().init();
        let (_model, loss) = train_step(model, &mut optim, &batch, 0.1);
        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }
}
