use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage0Scaffold;

impl Stage0Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Scaffold {
    fn name(&self) -> &'static str {
        "stage0_scaffold"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        fs::create_dir_all(&ctx.output.out_dir)?;

        // The scratch area is owned by exactly one run: clear any prior
        // contents before staging.
        if ctx.scratch_dir.exists() {
            fs::remove_dir_all(&ctx.scratch_dir).with_context(|| {
                format!("failed to clear scratch {}", ctx.scratch_dir.display())
            })?;
        }
        fs::create_dir_all(&ctx.scratch_dir)?;
        // Engine scripts need absolute paths.
        ctx.scratch_dir = fs::canonicalize(&ctx.scratch_dir)?;

        info!(
            out_dir = %ctx.output.out_dir.display(),
            scratch = %ctx.scratch_dir.display(),
            "scaffold_ready"
        );
        Ok(())
    }
}
