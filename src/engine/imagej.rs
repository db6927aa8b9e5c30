//! Headless ImageJ/Fiji launcher bridge.
//!
//! Scripts are written to the scratch directory and handed to the launcher
//! one at a time; output bindings are read back from the console stream.
//! Calls are expensive but idempotent, so the core never retries; a caller
//! may wrap the trait with its own retry policy.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use crate::engine::{ScriptEngine, ScriptOutput};
use crate::error::EvalError;

const LAUNCHER_NAMES: [&str; 5] = [
    "ImageJ-linux64",
    "ImageJ-linux32",
    "ImageJ-macosx",
    "ImageJ-win64.exe",
    "ImageJ-win32.exe",
];

#[derive(Debug)]
pub struct HeadlessImageJ {
    launcher: PathBuf,
    script_dir: PathBuf,
    calls: usize,
}

impl HeadlessImageJ {
    /// Locate the platform launcher under the engine's root installation.
    ///
    /// This is the pre-flight check: a missing root or launcher fails before
    /// any pipeline work begins. `script_dir` may not exist yet; it only has
    /// to exist by the time scripts run.
    pub fn locate(engine_dir: &Path, script_dir: &Path) -> Result<Self, EvalError> {
        if !engine_dir.is_dir() {
            return Err(EvalError::InputNotFound(engine_dir.to_path_buf()));
        }
        let launcher = LAUNCHER_NAMES
            .iter()
            .map(|name| engine_dir.join(name))
            .find(|p| p.is_file())
            .ok_or_else(|| EvalError::InputNotFound(engine_dir.join(LAUNCHER_NAMES[0])))?;
        Ok(Self {
            launcher,
            script_dir: script_dir.to_path_buf(),
            calls: 0,
        })
    }

    pub fn launcher(&self) -> &Path {
        &self.launcher
    }

    fn script_extension(language: &str) -> &'static str {
        match language {
            "BeanShell" => "bsh",
            "Groovy" => "groovy",
            "JavaScript" => "js",
            _ => "script",
        }
    }
}

impl ScriptEngine for HeadlessImageJ {
    fn run_script(&mut self, language: &str, script: &str) -> Result<ScriptOutput> {
        let path = self.script_dir.join(format!(
            "job_{:03}.{}",
            self.calls,
            Self::script_extension(language)
        ));
        self.calls += 1;
        std::fs::write(&path, script)
            .with_context(|| format!("failed to write script {}", path.display()))?;

        debug!(script = %path.display(), language, "engine call started");
        let output = Command::new(&self.launcher)
            .arg("--ij2")
            .arg("--headless")
            .arg("--console")
            .arg("--run")
            .arg(&path)
            .output()
            .with_context(|| format!("failed to spawn {}", self.launcher.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "engine exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(ScriptOutput::from_console(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }
}
