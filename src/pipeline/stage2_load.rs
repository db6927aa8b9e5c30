use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::error::EvalError;
use crate::pipeline::Stage;
use crate::stack::load_stack;

pub struct Stage2Load;

impl Stage2Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Load {
    fn name(&self) -> &'static str {
        "stage2_load"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut ground = load_stack(&ctx.ground_truth_dir, &ctx.ext)
            .with_context(|| "failed to load ground-truth stack".to_string())?;
        ground.normalize();
        info!(
            frames = ground.frames(),
            height = ground.height(),
            width = ground.width(),
            "ground_truth_loaded"
        );

        for method in &ctx.methods {
            let dir = ctx.results_dir.join(method);
            let mut stack = load_stack(&dir, &ctx.ext)
                .with_context(|| format!("failed to load stack for method '{method}'"))?;
            stack.normalize();

            // Per-frame alignment needs matching geometry across the board.
            if stack.frames() != ground.frames() {
                return Err(EvalError::FrameCountMismatch {
                    method: method.clone(),
                    want: ground.frames(),
                    got: stack.frames(),
                }
                .into());
            }
            if !stack.same_shape(&ground) {
                return Err(EvalError::ShapeMismatch {
                    path: dir,
                    want_w: ground.width(),
                    want_h: ground.height(),
                    got_w: stack.width(),
                    got_h: stack.height(),
                }
                .into());
            }

            info!(method = %method, frames = stack.frames(), "method_stack_loaded");
            ctx.method_stacks.push((method.clone(), stack));
        }

        ctx.ground_truth = Some(ground);
        Ok(())
    }
}
