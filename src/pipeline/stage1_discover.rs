use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::error::EvalError;
use crate::pipeline::Stage;

pub struct Stage1Discover;

impl Stage1Discover {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Discover {
    fn name(&self) -> &'static str {
        "stage1_discover"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.ground_truth_dir.is_dir() {
            return Err(EvalError::InputNotFound(ctx.ground_truth_dir.clone()).into());
        }
        if !ctx.results_dir.is_dir() {
            return Err(EvalError::InputNotFound(ctx.results_dir.clone()).into());
        }

        // One method per subdirectory; directory-name uniqueness is the
        // method-name uniqueness guarantee. Sorted so runs are reproducible
        // regardless of filesystem enumeration order.
        let mut methods: Vec<String> = std::fs::read_dir(&ctx.results_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();
        methods.sort();

        if methods.is_empty() {
            return Err(EvalError::EmptyInput {
                dir: ctx.results_dir.clone(),
                ext: ctx.ext.clone(),
            }
            .into());
        }

        info!(n_methods = methods.len(), "methods_discovered");
        ctx.methods = methods;
        Ok(())
    }
}
