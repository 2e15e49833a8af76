//! vars-env - Source a shell vars file and expose its variables as facts.
//!
//! This library sources a `my-vars.env`-style shell script, captures the
//! resulting environment, maps a fixed set of variable names to canonical
//! fact names, validates the required subset, and renders the result as a
//! JSON report for a consuming automation runtime.

pub mod extract;
pub mod mapping;
pub mod parser;
pub mod report;
pub mod runner;

pub use extract::{ExtractError, Extractor, Facts};
pub use mapping::{DEFAULT_ENV_MODE, DEFAULT_VARS_FILE, REQUIRED_FACTS, VAR_MAPPINGS};
pub use parser::{clean_value, parse_shell_vars};
pub use report::{render_facts, render_failure};
pub use runner::{CommandOutput, CommandRunner, ShellRunner};
