use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use maskbench::cli::{Cli, Commands, RunArgs, ValidateArgs};
use maskbench::ctx::Ctx;
use maskbench::engine::imagej::HeadlessImageJ;
use maskbench::pipeline::Pipeline;
use maskbench::pipeline::stage0_scaffold::Stage0Scaffold;
use maskbench::pipeline::stage1_discover::Stage1Discover;
use maskbench::pipeline::stage2_load::Stage2Load;
use maskbench::pipeline::stage3_scratch::Stage3Scratch;
use maskbench::pipeline::stage4_confusion::Stage4Confusion;
use maskbench::pipeline::stage5_partition::Stage5Partition;
use maskbench::pipeline::stage6_aggregate::Stage6Aggregate;
use maskbench::pipeline::stage7_report::Stage7Report;
use maskbench::report::summary::format_summary;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Validate(args) => validate(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.results_dir,
        args.ground_truth_dir,
        args.out,
        args.windows,
        args.ext,
        args.json,
        args.tsv,
    );

    // Pre-flight: a missing engine installation must fail before any input
    // directory is touched.
    let engine = HeadlessImageJ::locate(&args.engine_dir, &ctx.scratch_dir)
        .context("engine root pre-flight check failed")?;
    ctx.engine = Some(Box::new(engine));

    let pipeline = Pipeline::new(vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Discover::new()),
        Box::new(Stage2Load::new()),
        Box::new(Stage3Scratch::new()),
        Box::new(Stage4Confusion::new()),
        Box::new(Stage5Partition::new()),
        Box::new(Stage6Aggregate::new()),
        Box::new(Stage7Report::new()),
    ]);
    pipeline.run(&mut ctx)?;

    let table = ctx.table.as_ref().context("report table missing")?;
    print!("{}", format_summary(table));
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.results_dir,
        args.ground_truth_dir,
        std::env::temp_dir().join("maskbench-validate"),
        false,
        args.ext,
        false,
        false,
    );

    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Discover::new()),
        Box::new(Stage2Load::new()),
    ]);
    pipeline.run(&mut ctx)?;

    println!("maskbench validate ok");
    println!("methods: {}", ctx.methods.len());
    if let Some(ground) = &ctx.ground_truth {
        println!(
            "ground truth: {} frames of {}x{}",
            ground.frames(),
            ground.width(),
            ground.height()
        );
    }
    Ok(())
}
