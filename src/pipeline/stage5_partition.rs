use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::engine::script;
use crate::error::EvalError;
use crate::metrics::PartitionScores;
use crate::pipeline::Stage;

/// Obtain the maximal-Rand and maximal-variation-of-information scores per
/// method from the external engine, one synchronous script call per metric.
/// The engine is a single stateful session, so calls stay strictly serial.
pub struct Stage5Partition;

impl Stage5Partition {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Partition {
    fn name(&self) -> &'static str {
        "stage5_partition"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut engine = ctx.engine.take().context("script engine not configured")?;
        let ground_tif = ctx.ground_tif.as_ref().context("ground stack not staged")?;
        let ground = script::engine_path(ground_tif, ctx.windows);

        let result = (|| -> Result<()> {
            for (method, path) in &ctx.staged {
                let proposed = script::engine_path(path, ctx.windows);

                let vrand = run_metric(
                    engine.as_mut(),
                    method,
                    script::VRAND_OUTPUT,
                    &script::rand_error_script(&ground, &proposed),
                )?;
                let vinfo = run_metric(
                    engine.as_mut(),
                    method,
                    script::VINFO_OUTPUT,
                    &script::variation_of_information_script(&ground, &proposed),
                )?;

                info!(method = %method, vrand, vinfo, "partition_scores");
                ctx.partition
                    .insert(method.clone(), PartitionScores { vrand, vinfo });
            }
            Ok(())
        })();

        ctx.engine = Some(engine);
        result
    }
}

fn run_metric(
    engine: &mut dyn crate::engine::ScriptEngine,
    method: &str,
    output_name: &str,
    body: &str,
) -> Result<f64> {
    let invocation_error = |reason: String| EvalError::EngineInvocation {
        method: method.to_string(),
        metric: output_name.to_string(),
        reason,
    };

    let output = engine
        .run_script(script::LANGUAGE, body)
        .map_err(|err| invocation_error(format!("{err:#}")))?;
    let text = output
        .output(output_name)
        .ok_or_else(|| invocation_error(format!("output variable '{output_name}' missing")))?;
    let value: f64 = text
        .parse()
        .map_err(|_| invocation_error(format!("unparsable output '{text}'")))?;
    Ok(value)
}
