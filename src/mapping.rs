//! Static variable vocabulary: the shell-to-fact name mapping table,
//! the required-key set, and the placeholder sentinel.

/// Default name of the vars file to source.
pub const DEFAULT_VARS_FILE: &str = "my-vars.env";
/// Default environment mode passed to the sourced script.
pub const DEFAULT_ENV_MODE: &str = "LIVE";

/// Template value that indicates the vars file was never customized.
pub const PLACEHOLDER_FULL_NAME: &str = "fName lName";

/// Fact names that must be present after parsing.
pub const REQUIRED_FACTS: &[&str] = &["my_full_name", "my_email_add", "admin_dir"];

/// Mapping from shell variable names to fact names.
///
/// Acts as an allow-list: assignments to names not in this table are
/// dropped. Fixed at build time, never mutated.
pub const VAR_MAPPINGS: &[(&str, &str)] = &[
    ("myFullName", "my_full_name"),
    ("myEmailAdd", "my_email_add"),
    ("myMBPisFor", "my_mbp_is_for"),
    ("myHostName", "my_host_name"),
    // "myDomaiName" matches the vars file's own spelling.
    ("myDomaiName", "my_domain_name"),
    ("dataRestore", "data_restore"),
    ("myBackups", "my_backups"),
    ("sysBackups", "sys_backups"),
    ("myCode", "my_code"),
    ("myDocs", "my_docs"),
    ("myDownloads", "my_downloads"),
    ("adminDir", "admin_dir"),
    ("backupDir", "backup_dir"),
    ("knownHosts", "known_hosts"),
    ("hostRemote", "host_remote"),
    ("solarizedGitRepo", "solarized_git_repo"),
    ("termStuff", "term_stuff"),
];

/// Look up the fact name for a shell variable name.
///
/// Returns `None` for names outside the allow-list.
pub fn fact_name(shell_name: &str) -> Option<&'static str> {
    VAR_MAPPINGS
        .iter()
        .find(|(shell, _)| *shell == shell_name)
        .map(|(_, fact)| *fact)
}
