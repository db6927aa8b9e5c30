use std::path::PathBuf;

use thiserror::Error;

/// Failures that corrupt the report's completeness or alignment guarantees.
///
/// All variants are fatal for the run. Undefined metric values (a zero
/// denominator in a confusion ratio) are deliberately not represented here:
/// they propagate as `None` into the report table and render as `nan`.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("no .{ext} images found in {dir}")]
    EmptyInput { dir: PathBuf, ext: String },

    #[error("{path}: frame is {got_w}x{got_h}, expected {want_w}x{want_h}")]
    ShapeMismatch {
        path: PathBuf,
        want_w: u32,
        want_h: u32,
        got_w: u32,
        got_h: u32,
    },

    #[error("method '{method}' has {got} frames, ground truth has {want}")]
    FrameCountMismatch {
        method: String,
        want: usize,
        got: usize,
    },

    #[error("engine invocation failed for method '{method}' metric '{metric}': {reason}")]
    EngineInvocation {
        method: String,
        metric: String,
        reason: String,
    },

    #[error("method '{method}' missing from {source_table} metrics")]
    Join {
        method: String,
        source_table: &'static str,
    },
}
