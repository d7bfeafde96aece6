use burn::{
    nn::{
        loss::CrossEntropyLossConfig,
        BatchNorm, BatchNormConfig,
        Dropout, DropoutConfig,
        Linear, LinearConfig,
        Relu,
    },
    prelude::*,
};

// Hidden layer widths are fixed — the only variable dimensions are
// the vocabulary size (input) and the intent count (output).
const HIDDEN_1: usize = 512;
const HIDDEN_2: usize = 256;
const HIDDEN_3: usize = 128;
const HIDDEN_4: usize = 64;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct IntentModelConfig {
    pub input_size:  usize,
    pub output_size: usize,
    #[config(default = 0.3)]
    pub dropout:     f64,
}

impl IntentModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> IntentModel<B> {
        IntentModel {
            fc1: LinearConfig::new(self.input_size, HIDDEN_1).init(device),
            fc2: LinearConfig::new(HIDDEN_1, HIDDEN_2).init(device),
            fc3: LinearConfig::new(HIDDEN_2, HIDDEN_3).init(device),
            fc4: LinearConfig::new(HIDDEN_3, HIDDEN_4).init(device),
            fc5: LinearConfig::new(HIDDEN_4, self.output_size).init(device),
            bn1: BatchNormConfig::new(HIDDEN_1).init(device),
            bn2: BatchNormConfig::new(HIDDEN_2).init(device),
            bn3: BatchNormConfig::new(HIDDEN_3).init(device),
            dropout:    DropoutConfig::new(self.dropout).init(),
            activation: Relu::new(),
        }
    }
}

/// The fixed 5-layer feed-forward intent classifier.
///
/// The first three blocks are Linear → BatchNorm → ReLU → Dropout,
/// the fourth drops the batch norm, and the fifth produces raw
/// logits — softmax happens at the call site, matching how the
/// cross-entropy loss expects unnormalized logits during training.
#[derive(Module, Debug)]
pub struct IntentModel<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    fc3: Linear<B>,
    fc4: Linear<B>,
    fc5: Linear<B>,
    bn1: BatchNorm<B>,
    bn2: BatchNorm<B>,
    bn3: BatchNorm<B>,
    dropout:    Dropout,
    activation: Relu,
}

impl<B: Backend> IntentModel<B> {
    /// Forward pass: [batch, vocab_size] → [batch, intent_count] logits.
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.dropout.forward(self.activation.forward(self.bn1.forward(self.fc1.forward(x))));
        let x = self.dropout.forward(self.activation.forward(self.bn2.forward(self.fc2.forward(x))));
        let x = self.dropout.forward(self.activation.forward(self.bn3.forward(self.fc3.forward(x))));
        let x = self.dropout.forward(self.activation.forward(self.fc4.forward(x)));
        self.fc5.forward(x)
    }

    /// Forward pass plus cross-entropy loss against intent targets.
    /// Returns (loss, logits) so the trainer can log both.
    pub fn forward_loss(
        &self,
        inputs:  Tensor<B, 2>,
        targets: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(inputs);

        let loss = CrossEntropyLossConfig::new()
            .init(&logits.device())
            .forward(logits.clone(), targets);

        (loss, logits)
    }
}
