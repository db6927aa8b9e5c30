use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::engine::ScriptEngine;
use crate::metrics::PartitionScores;
use crate::metrics::confusion::ConfusionCounts;
use crate::stack::ImageStack;
use crate::table::ReportTable;

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub html_path: PathBuf,
    pub heatmap_path: PathBuf,
    pub tsv_path: PathBuf,
    pub json_path: PathBuf,
}

/// All state threaded through the pipeline stages for one run.
#[derive(Debug)]
pub struct Ctx {
    pub results_dir: PathBuf,
    pub ground_truth_dir: PathBuf,
    pub windows: bool,
    pub ext: String,
    pub write_json: bool,
    pub write_tsv: bool,

    /// Scratch area owned by this run, recreated fresh at scaffold time and
    /// canonicalized so staged paths survive into engine scripts.
    pub scratch_dir: PathBuf,

    /// Method names in discovery order; also the processing order.
    pub methods: Vec<String>,
    pub ground_truth: Option<ImageStack>,
    pub method_stacks: Vec<(String, ImageStack)>,

    /// Staged duplicated stacks: ground truth plus one file per method,
    /// keyed on disk by method name.
    pub ground_tif: Option<PathBuf>,
    pub staged: Vec<(String, PathBuf)>,

    pub confusion: BTreeMap<String, ConfusionCounts>,
    pub partition: BTreeMap<String, PartitionScores>,
    pub table: Option<ReportTable>,

    pub engine: Option<Box<dyn ScriptEngine>>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        results_dir: PathBuf,
        ground_truth_dir: PathBuf,
        out_dir: PathBuf,
        windows: bool,
        ext: String,
        write_json: bool,
        write_tsv: bool,
    ) -> Self {
        let output = OutputPaths {
            html_path: out_dir.join("Dataframe_output.html"),
            heatmap_path: out_dir.join("Heatmap_output.png"),
            tsv_path: out_dir.join("metrics.tsv"),
            json_path: out_dir.join("metrics.json"),
            out_dir: out_dir.clone(),
        };
        Self {
            results_dir,
            ground_truth_dir,
            windows,
            ext,
            write_json,
            write_tsv,
            scratch_dir: out_dir.join("scratch"),
            methods: Vec::new(),
            ground_truth: None,
            method_stacks: Vec::new(),
            ground_tif: None,
            staged: Vec::new(),
            confusion: BTreeMap::new(),
            partition: BTreeMap::new(),
            table: None,
            engine: None,
            warnings: Vec::new(),
            output,
        }
    }
}
