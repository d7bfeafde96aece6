// ============================================================
// Layer 4 — Bag-of-Words Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<BowSample>
// into tensors for the model forward pass.
//
// How batching works here:
//   Input:  Vec of N BowSamples, each with a vector of length V
//   Output: BowBatch with an input tensor of shape [N, V]
//           and a label tensor of shape [N]
//
//   We flatten all bags into one long Vec, then reshape:
//   [s1_t1, ..., s1_tV, s2_t1, ..., sN_tV] → [N, V]
//
// All bags already have the same length (the vocabulary size),
// so no padding is ever needed.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::BowSample;

// ─── BowBatch ─────────────────────────────────────────────────────────────────
/// A batch of encoded samples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. NdArray, Autodiff<NdArray>) —
/// generic so the same batcher works for training and inference.
#[derive(Debug, Clone)]
pub struct BowBatch<B: Backend> {
    /// Bag-of-words vectors — shape: [batch_size, vocab_size]
    pub inputs: Tensor<B, 2>,

    /// Intent indices — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── BowBatcher ───────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created in the right place.
#[derive(Clone, Debug)]
pub struct BowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> BowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<B, BowSample, BowBatch<B>> for BowBatcher<B> {
    /// Convert a Vec of BowSamples into a single BowBatch.
    fn batch(&self, items: Vec<BowSample>, _device: &B::Device) -> BowBatch<B> {
        let batch_size = items.len();
        // All bags have the same length (the vocabulary size)
        let vocab_size = items[0].bag.len();

        let input_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.bag.iter().copied())
            .collect();

        let targets_flat: Vec<i32> = items
            .iter()
            .map(|s| s.label as i32)
            .collect();

        let inputs = Tensor::<B, 1>::from_floats(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, vocab_size]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets_flat.as_slice(), &self.device
        );

        BowBatch { inputs, targets }
    }
}
