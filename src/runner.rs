//! External process execution behind a narrow, test-substitutable interface.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Captured standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Captured standard error, decoded lossily as UTF-8.
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
}

/// Runs a shell command line in a working directory and captures its output.
///
/// The extraction pipeline touches the outside world only through this
/// trait, so tests can substitute canned output for a real shell.
pub trait CommandRunner {
    /// Run `command` through a shell with `cwd` as working directory,
    /// blocking until it exits. No timeout is applied.
    fn run(&self, command: &str, cwd: &Path) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `bash -c`.
///
/// `bash` rather than `sh` because the vars file is loaded with `source`,
/// which POSIX `sh` implementations may not provide.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> io::Result<CommandOutput> {
        let output = Command::new("bash")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .output()?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
