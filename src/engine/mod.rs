//! Scripting bridge to the external partition-comparison engine.
//!
//! The engine is a single stateful session reachable only through script
//! submission: one synchronous call takes a script-language identifier plus
//! script text and yields named output variables as text. The trait is the
//! substitution seam for alternate engines and for in-process mocks in tests.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;

pub mod imagej;
pub mod script;

pub trait ScriptEngine: fmt::Debug {
    /// Submit one script and block until the engine returns.
    fn run_script(&mut self, language: &str, script: &str) -> Result<ScriptOutput>;
}

/// Named output variables extracted from one engine invocation.
#[derive(Debug, Clone, Default)]
pub struct ScriptOutput {
    outputs: BTreeMap<String, String>,
}

impl ScriptOutput {
    pub fn new(outputs: BTreeMap<String, String>) -> Self {
        Self { outputs }
    }

    /// Parse `name = value` lines from engine console output.
    ///
    /// Only lines whose left side is a single bare identifier count as output
    /// bindings; everything else is engine log noise.
    pub fn from_console(text: &str) -> Self {
        let mut outputs = BTreeMap::new();
        for line in text.lines() {
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                continue;
            }
            outputs.insert(name.to_string(), value.trim().to_string());
        }
        Self { outputs }
    }

    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }
}
