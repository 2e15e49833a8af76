//! JSON report rendering for the consuming automation runtime.
//!
//! Success and failure both produce one machine-readable document on
//! stdout, so the caller never has to scrape free-form text.

use crate::extract::{ExtractError, Facts};
use anyhow::Result;
use serde::Serialize;

/// Failure document: a message plus, for execution failures, the captured
/// stderr and the literal command that was attempted.
#[derive(Debug, Serialize)]
struct FailureReport<'a> {
    failed: bool,
    msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stderr: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cmd: Option<&'a str>,
}

/// Render a successful extraction as pretty-printed JSON.
pub fn render_facts(facts: &Facts) -> Result<String> {
    Ok(serde_json::to_string_pretty(facts)?)
}

/// Render an extraction failure as pretty-printed JSON.
pub fn render_failure(err: &ExtractError) -> Result<String> {
    let (stderr, cmd) = match err {
        ExtractError::SourceFailed { stderr, cmd, .. } => {
            (Some(stderr.as_str()), Some(cmd.as_str()))
        }
        ExtractError::Spawn { cmd, .. } => (None, Some(cmd.as_str())),
        _ => (None, None),
    };

    let report = FailureReport {
        failed: true,
        msg: err.to_string(),
        stderr,
        cmd,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
