//! Extraction orchestrator: source the vars file, parse, validate.

use crate::mapping::{DEFAULT_ENV_MODE, DEFAULT_VARS_FILE, PLACEHOLDER_FULL_NAME, REQUIRED_FACTS};
use crate::parser::parse_shell_vars;
use crate::runner::CommandRunner;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during variable extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Variables file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to source {file}")]
    SourceFailed {
        file: String,
        stderr: String,
        cmd: String,
    },

    #[error("Error parsing variables: {source}")]
    Spawn { cmd: String, source: io::Error },

    #[error("Required variables missing: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("my-vars.env not configured properly. myFullName cannot be 'fName lName'")]
    Placeholder,
}

/// Successfully extracted facts, ready for the consuming automation runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facts {
    /// Always false: extraction is read-only fact gathering.
    pub changed: bool,
    /// Canonical fact name to cleaned value.
    pub facts: BTreeMap<String, String>,
    /// Number of variables loaded.
    pub loaded: usize,
    /// Human-readable status line.
    pub message: String,
}

/// One extraction request: which file to source and in which mode.
#[derive(Debug, Clone)]
pub struct Extractor {
    /// Path to the vars file, checked for existence before execution.
    pub vars_file: PathBuf,
    /// Mode string handed to the sourced script as its first argument.
    /// Interpreted entirely by that script (e.g. TEST vs LIVE).
    pub env_mode: String,
    /// Working directory for the sourcing command. Defaults to the
    /// directory containing the current executable, so the vars file
    /// resolves the same way regardless of caller context.
    pub base_dir: Option<PathBuf>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            vars_file: PathBuf::from(DEFAULT_VARS_FILE),
            env_mode: DEFAULT_ENV_MODE.to_string(),
            base_dir: None,
        }
    }
}

impl Extractor {
    /// The literal command line handed to the shell.
    pub fn command(&self) -> String {
        format!(
            "cd .. && source {} {} && env | grep -E '^(my|export)'",
            self.vars_file.display(),
            self.env_mode
        )
    }

    /// Source the vars file and return the validated fact mapping.
    ///
    /// Runs the linear pipeline: existence check, shell execution, parse,
    /// required-key check, placeholder check. Any failing step terminates
    /// the run with no partial result.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<Facts, ExtractError> {
        if !self.vars_file.exists() {
            return Err(ExtractError::FileNotFound(self.vars_file.clone()));
        }

        let cmd = self.command();
        let cwd = match self.base_dir {
            Some(ref dir) => dir.clone(),
            None => exe_dir().map_err(|source| ExtractError::Spawn {
                cmd: cmd.clone(),
                source,
            })?,
        };

        let output = runner
            .run(&cmd, &cwd)
            .map_err(|source| ExtractError::Spawn {
                cmd: cmd.clone(),
                source,
            })?;

        if !output.success {
            return Err(ExtractError::SourceFailed {
                file: self.vars_file.display().to_string(),
                stderr: output.stderr,
                cmd,
            });
        }

        let facts = parse_shell_vars(&output.stdout);

        let missing: Vec<String> = REQUIRED_FACTS
            .iter()
            .filter(|fact| !facts.contains_key(**fact))
            .map(|fact| fact.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ExtractError::MissingRequired(missing));
        }

        // Only the full name carries a known template sentinel; the other
        // fields have no reliable unconfigured marker to check against.
        if facts.get("my_full_name").map(String::as_str) == Some(PLACEHOLDER_FULL_NAME) {
            return Err(ExtractError::Placeholder);
        }

        let loaded = facts.len();
        let message = format!(
            "Successfully loaded {} variables from {}",
            loaded,
            self.vars_file.display()
        );

        Ok(Facts {
            changed: false,
            facts,
            loaded,
            message,
        })
    }
}

/// Directory containing the current executable.
fn exe_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "executable has no parent directory")
    })?;
    Ok(dir.to_path_buf())
}
