use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "maskbench", version, about = "Segmentation mask benchmarking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        long,
        help = "Root of the Fiji.app installation hosting the partition engine"
    )]
    pub engine_dir: PathBuf,

    #[arg(
        long,
        help = "Results root: one subdirectory of predicted masks per method"
    )]
    pub results_dir: PathBuf,

    #[arg(long, help = "Ground-truth binary mask directory")]
    pub ground_truth_dir: PathBuf,

    #[arg(long, default_value = ".", help = "Output directory for report artifacts")]
    pub out: PathBuf,

    #[arg(
        long,
        default_value_t = false,
        help = "Normalize path separators for a Windows engine"
    )]
    pub windows: bool,

    #[arg(long, default_value = "png", help = "Mask image file extension")]
    pub ext: String,

    #[arg(long, default_value_t = false, help = "Also write metrics.json")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Also write metrics.tsv")]
    pub tsv: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(
        long,
        help = "Results root: one subdirectory of predicted masks per method"
    )]
    pub results_dir: PathBuf,

    #[arg(long, help = "Ground-truth binary mask directory")]
    pub ground_truth_dir: PathBuf,

    #[arg(long, default_value = "png", help = "Mask image file extension")]
    pub ext: String,
}
