// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full training loop using Burn's DataLoader and Adam.
//
// There is no validation split: the dataset is a handful of
// example patterns per intent, so the loop follows the
// early-stopping-on-training-loss scheme instead — the best
// average epoch loss is tracked, weights are checkpointed only
// when it improves, and training stops after `patience` epochs
// without improvement.
//
// Training runs on Autodiff<NdArray>: the model is a tiny MLP
// over bag-of-words vectors, so CPU is plenty.
//
// The loader keeps the final incomplete batch, so BatchNorm may
// see a batch of one at the end of an epoch. Its variance epsilon
// keeps that pass numerically safe; the update is just noisier
// than a full batch's. Burn has no drop-last option to change this.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::DataLoaderBuilder,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::BowBatcher, dataset::BowDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{IntentModel, IntentModelConfig};

type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

pub fn run_training(
    cfg:          &TrainConfig,
    model_cfg:    &IntentModelConfig,
    dataset:      BowDataset,
    ckpt_manager: CheckpointManager,
    metrics:      MetricsLogger,
) -> Result<()> {
    let device = burn::backend::ndarray::NdArrayDevice::default();
    tracing::info!(
        "Training {}→{} classifier on {} samples",
        model_cfg.input_size,
        model_cfg.output_size,
        dataset.sample_count(),
    );

    // ── Build model ───────────────────────────────────────────────────────────
    let mut model: IntentModel<TrainBackend> = model_cfg.init(&device);

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Data loader (shuffled each epoch) ─────────────────────────────────────
    let batcher = BowBatcher::<TrainBackend>::new(device);
    let loader  = DataLoaderBuilder::new(batcher)
        .batch_size(cfg.batch_size)
        .shuffle(42)
        .num_workers(1)
        .build(dataset);

    // ── Early stopping state ──────────────────────────────────────────────────
    let mut best_loss         = f64::INFINITY;
    let mut epochs_no_improve = 0usize;

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum      = 0.0f64;
        let mut batches       = 0usize;
        let mut correct       = 0usize;
        let mut total_samples = 0usize;

        for batch in loader.iter() {
            let (loss, logits) = model.forward_loss(
                batch.inputs,
                batch.targets.clone(),
            );

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val;
            batches  += 1;

            // argmax(1) returns shape [batch, 1] — flatten to [batch]
            // before comparing with targets which is [batch]
            let predicted = logits.argmax(1).flatten::<1>(0, 1);
            total_samples += batch.targets.dims()[0];
            let batch_correct: i64 = predicted
                .equal(batch.targets)
                .int().sum().into_scalar().elem::<i64>();
            correct += batch_correct as usize;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };
        let accuracy = if total_samples > 0 {
            correct as f64 / total_samples as f64
        } else { 0.0 };

        println!(
            "Epoch {:>3}/{} | loss={:.4} | acc={:.1}%",
            epoch, cfg.epochs, avg_loss, accuracy * 100.0,
        );
        let row = EpochMetrics::new(epoch, avg_loss, accuracy);
        metrics.log(&row)?;

        // ── Early stopping on training-loss plateau ───────────────────────────
        // Checkpoint only improvements, so the saved weights are always
        // the best seen so far, not the last epoch's.
        if row.is_improvement(best_loss) {
            best_loss         = avg_loss;
            epochs_no_improve = 0;
            ckpt_manager.save_model(&model)?;
            tracing::debug!("Checkpoint saved at epoch {} (loss {:.4})", epoch, avg_loss);
        } else {
            epochs_no_improve += 1;
            if epochs_no_improve >= cfg.patience {
                println!(
                    "Early stopping at epoch {} with best loss {:.4}",
                    epoch, best_loss,
                );
                break;
            }
        }
    }

    tracing::info!("Training complete (best loss {:.4})", best_loss);
    Ok(())
}
