use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::engine::script;
use crate::pipeline::Stage;
use crate::stack::write_stack_tiff;

/// Stage duplicated stacks into the scratch area as multi-page TIFFs, the
/// engine's required input format. The in-memory stacks stay un-duplicated;
/// only the persisted copies carry the doubled frame count.
pub struct Stage3Scratch;

impl Stage3Scratch {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Scratch {
    fn name(&self) -> &'static str {
        "stage3_scratch"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let ground = ctx
            .ground_truth
            .as_ref()
            .context("ground-truth stack missing")?;

        let ground_path = ctx.scratch_dir.join(script::GROUND_STACK);
        let doubled = ground.duplicate();
        write_stack_tiff(&doubled, &ground_path)?;
        info!(path = %ground_path.display(), frames = doubled.frames(), "ground_staged");
        ctx.ground_tif = Some(ground_path);

        for (method, stack) in &ctx.method_stacks {
            let path = ctx.scratch_dir.join(script::method_stack(method));
            let doubled = stack.duplicate();
            write_stack_tiff(&doubled, &path)
                .with_context(|| format!("failed to stage stack for method '{method}'"))?;
            info!(method = %method, path = %path.display(), "method_staged");
            ctx.staged.push((method.clone(), path));
        }

        Ok(())
    }
}
