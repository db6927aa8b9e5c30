use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::metrics::confusion::ConfusionCounts;
use crate::pipeline::Stage;

pub struct Stage4Confusion;

impl Stage4Confusion {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Confusion {
    fn name(&self) -> &'static str {
        "stage4_confusion"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let ground = ctx
            .ground_truth
            .as_ref()
            .context("ground-truth stack missing")?;
        let reference = ground.binarize();

        for (method, stack) in &ctx.method_stacks {
            let predicted = stack.binarize();
            let counts = ConfusionCounts::from_vectors(&reference, &predicted)
                .with_context(|| format!("confusion counts failed for method '{method}'"))?;
            info!(
                method = %method,
                tp = counts.true_pos,
                tn = counts.true_neg,
                fp = counts.false_pos,
                fn_ = counts.false_neg,
                "confusion_counts"
            );
            ctx.confusion.insert(method.clone(), counts);
        }

        Ok(())
    }
}
