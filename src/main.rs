//! vars-env - Source a shell vars file and expose its variables as facts.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use vars_env::{render_facts, render_failure, Extractor, ShellRunner};

/// Source a shell vars file and print its variables as JSON facts.
#[derive(Parser, Debug)]
#[command(name = "vars-env", version, about)]
struct Cli {
    /// Path to the variables file
    #[arg(long, default_value = vars_env::DEFAULT_VARS_FILE)]
    vars_file: PathBuf,

    /// Environment mode to pass to the sourced script (e.g. TEST or LIVE)
    #[arg(long, env = "ENV_MODE", default_value = vars_env::DEFAULT_ENV_MODE)]
    env_mode: String,

    /// Working directory for the sourcing command (defaults to the
    /// directory containing this executable)
    #[arg(long)]
    base_dir: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let extractor = Extractor {
        vars_file: cli.vars_file,
        env_mode: cli.env_mode,
        base_dir: cli.base_dir,
    };

    match extractor.run(&ShellRunner) {
        Ok(facts) => {
            let json = render_facts(&facts).context("failed to render facts report")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let json = render_failure(&err).context("failed to render failure report")?;
            println!("{}", json);
            Ok(ExitCode::FAILURE)
        }
    }
}
