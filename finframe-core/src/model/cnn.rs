//! The classifier network and its interchangeable variants.
//!
//! Shapes:
//! - Input frames: `[B, 1, H, W]` (grayscale, normalized to 0..1)
//! - Output: `[B, 1]` fish probability

use burn::module::{Ignored, Module};
use burn::nn::conv::{Conv2d, Conv2dConfig};
use burn::nn::{Linear, LinearConfig, PaddingConfig2d};
use burn::tensor::activation::{relu, sigmoid};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::config::FrameSize;

/// Activation applied after a hidden layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenActivation {
    /// Pass-through (a purely linear layer).
    Identity,
    Relu,
    Sigmoid,
}

/// The interchangeable network variants. All share the same topology
/// (two 3x3 convolutions, flatten, fully-connected stack, sigmoid output)
/// and differ only in hidden widths, depth, and activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishCnnVariant {
    /// 1000 linear -> 500 relu
    V1,
    /// 1000 sigmoid -> 500 sigmoid
    V2,
    /// 1000 relu -> 500 relu
    V3,
    /// 1000 sigmoid -> 500 relu -> 250 relu
    V4,
}

impl FishCnnVariant {
    /// Hidden layer widths and activations, output side excluded.
    pub fn hidden_stack(self) -> Vec<(usize, HiddenActivation)> {
        use HiddenActivation::{Identity, Relu, Sigmoid};
        match self {
            Self::V1 => vec![(1000, Identity), (500, Relu)],
            Self::V2 => vec![(1000, Sigmoid), (500, Sigmoid)],
            Self::V3 => vec![(1000, Relu), (500, Relu)],
            Self::V4 => vec![(1000, Sigmoid), (500, Relu), (250, Relu)],
        }
    }

    /// Whether evaluation of this variant also tracks recall in addition
    /// to accuracy.
    pub fn monitors_recall(self) -> bool {
        matches!(self, Self::V4)
    }
}

/// Configuration for [`FishCnn`].
#[derive(Debug, Clone)]
pub struct FishCnnConfig {
    pub variant: FishCnnVariant,
    /// Resolution of the input frames.
    pub input: FrameSize,
}

impl FishCnnConfig {
    pub fn new(variant: FishCnnVariant, input: FrameSize) -> Self {
        Self { variant, input }
    }
}

#[derive(Module, Debug)]
pub struct FishCnn<B: Backend> {
    conv1: Conv2d<B>,
    conv2: Conv2d<B>,
    hidden: Vec<Linear<B>>,
    output: Linear<B>,
    config: Ignored<FishCnnConfig>,
}

impl<B: Backend> FishCnn<B> {
    pub fn new(config: FishCnnConfig, device: &B::Device) -> Self {
        debug_assert!(
            config.input.width >= 3 && config.input.height >= 3,
            "input must be at least 3x3 for the valid convolution"
        );
        let conv1 = Conv2dConfig::new([1, 1], [3, 3])
            .with_padding(PaddingConfig2d::Same)
            .init(device);
        let conv2 = Conv2dConfig::new([1, 1], [3, 3])
            .with_padding(PaddingConfig2d::Valid)
            .init(device);

        // the valid 3x3 convolution shrinks each spatial dim by 2
        let mut in_features =
            (config.input.height as usize - 2) * (config.input.width as usize - 2);
        let mut hidden = Vec::new();
        for (width, _) in config.variant.hidden_stack() {
            hidden.push(LinearConfig::new(in_features, width).init(device));
            in_features = width;
        }
        let output = LinearConfig::new(in_features, 1).init(device);

        Self {
            conv1,
            conv2,
            hidden,
            output,
            config: Ignored(config),
        }
    }

    /// Forward pass returning fish probabilities, shape `[B, 1]`.
    pub fn forward(&self, input: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.conv1.forward(input);
        let x = self.conv2.forward(x);
        let mut x: Tensor<B, 2> = x.flatten(1, 3);
        for (layer, (_, activation)) in
            self.hidden.iter().zip(self.config.0.variant.hidden_stack())
        {
            x = layer.forward(x);
            x = match activation {
                HiddenActivation::Identity => x,
                HiddenActivation::Relu => relu(x),
                HiddenActivation::Sigmoid => sigmoid(x),
            };
        }
        sigmoid(self.output.forward(x))
    }

    /// Binary cross-entropy of predicted probabilities against 0/1
    /// targets, averaged over the batch.
    pub fn loss(&self, predictions: Tensor<B, 2>, targets: Tensor<B, 2>) -> Tensor<B, 1> {
        let eps = 1e-6;
        let positive = targets.clone() * (predictions.clone() + eps).log();
        let negative = (targets.neg() + 1.0) * ((predictions.neg() + 1.0) + eps).log();
        (positive + negative).neg().mean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultBackend;

    fn device() -> <DefaultBackend as Backend>::Device {
        Default::default()
    }

    fn tiny_input(batch: usize, size: FrameSize) -> Tensor<DefaultBackend, 4> {
        Tensor::zeros(
            [batch, 1, size.height as usize, size.width as usize],
            &device(),
        )
    }

    #[test]
    fn forward_output_is_batch_by_one() {
        let size = FrameSize::new(16, 12);
        for variant in [
            FishCnnVariant::V1,
            FishCnnVariant::V2,
            FishCnnVariant::V3,
            FishCnnVariant::V4,
        ] {
            let model =
                FishCnn::<DefaultBackend>::new(FishCnnConfig::new(variant, size), &device());
            let out = model.forward(tiny_input(3, size));
            assert_eq!(out.dims(), [3, 1]);
        }
    }

    #[test]
    fn forward_outputs_probabilities() {
        let size = FrameSize::new(10, 8);
        let model = FishCnn::<DefaultBackend>::new(
            FishCnnConfig::new(FishCnnVariant::V3, size),
            &device(),
        );
        let out = model.forward(tiny_input(2, size));
        let values = out.into_data().to_vec::<f32>().unwrap();
        assert!(values.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn variant_stacks_match_their_widths() {
        assert_eq!(
            FishCnnVariant::V1
                .hidden_stack()
                .iter()
                .map(|&(w, _)| w)
                .collect::<Vec<_>>(),
            [1000, 500]
        );
        assert_eq!(FishCnnVariant::V4.hidden_stack().len(), 3);
        assert!(FishCnnVariant::V4.monitors_recall());
        assert!(!FishCnnVariant::V1.monitors_recall());
    }

    #[test]
    fn loss_is_low_for_confident_correct_predictions() {
        let size = FrameSize::new(8, 8);
        let model = FishCnn::<DefaultBackend>::new(
            FishCnnConfig::new(FishCnnVariant::V1, size),
            &device(),
        );
        let good: Tensor<DefaultBackend, 2> =
            Tensor::from_floats([[0.99], [0.01]], &device());
        let bad: Tensor<DefaultBackend, 2> =
            Tensor::from_floats([[0.01], [0.99]], &device());
        let targets: Tensor<DefaultBackend, 2> =
            Tensor::from_floats([[1.0], [0.0]], &device());

        let low = model
            .loss(good, targets.clone())
            .into_data()
            .to_vec::<f32>()
            .unwrap()[0];
        let high = model.loss(bad, targets).into_data().to_vec::<f32>().unwrap()[0];
        assert!(low < high);
        assert!(low < 0.1);
    }
}
