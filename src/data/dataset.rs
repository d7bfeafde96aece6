use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One encoded training sample: a bag-of-words vector and the
/// index of its intent in the persisted intent list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowSample {
    pub bag:   Vec<f32>,
    pub label: usize,
}

pub struct BowDataset {
    samples: Vec<BowSample>,
}

impl BowDataset {
    pub fn new(samples: Vec<BowSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<BowSample> for BowDataset {
    fn get(&self, index: usize) -> Option<BowSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
