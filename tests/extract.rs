//! End-to-end extraction tests against a real shell.
//!
//! The sourcing command filters `env` output to lines starting with `my`
//! or `export`, so a variable like `adminDir` only reaches the captured
//! output if the sourced script prints the assignment itself. The test
//! vars files do exactly that, like the deployed vars file.

#![cfg(unix)]

use std::path::PathBuf;
use vars_env::{ExtractError, Extractor, ShellRunner};

/// Lay out a tempdir like the deployed tool: a `library/` subdirectory to
/// run from, with the vars file one level up.
fn setup(vars_content: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let library = dir.path().join("library");
    std::fs::create_dir(&library).unwrap();

    let vars_file = dir.path().join("my-vars.env");
    std::fs::write(&vars_file, vars_content).unwrap();

    (dir, library, vars_file)
}

fn extractor(vars_file: PathBuf, env_mode: &str, base_dir: PathBuf) -> Extractor {
    Extractor {
        vars_file,
        env_mode: env_mode.to_string(),
        base_dir: Some(base_dir),
    }
}

#[test]
fn test_real_shell_extraction() {
    let (_dir, library, vars_file) = setup(
        "export myFullName='Todd Thomas'\n\
         export myEmailAdd=\"todd@example.com\"\n\
         export myDownloads=/home/todd/Downloads\n\
         echo \"adminDir='/srv/admin'\"\n",
    );

    let facts = extractor(vars_file, "LIVE", library).run(&ShellRunner).unwrap();
    assert!(!facts.changed);
    assert_eq!(facts.loaded, 4);
    assert_eq!(facts.facts.get("my_full_name").unwrap(), "Todd Thomas");
    assert_eq!(facts.facts.get("my_email_add").unwrap(), "todd@example.com");
    assert_eq!(facts.facts.get("admin_dir").unwrap(), "/srv/admin");
    assert_eq!(facts.facts.get("my_downloads").unwrap(), "/home/todd/Downloads");
}

#[test]
fn test_env_mode_reaches_the_script() {
    let (_dir, library, vars_file) = setup(
        "export myFullName='Todd Thomas'\n\
         export myEmailAdd=todd@example.com\n\
         export myHostName=\"host-$1\"\n\
         echo adminDir=/srv/admin\n",
    );

    let facts = extractor(vars_file, "TEST", library).run(&ShellRunner).unwrap();
    assert_eq!(facts.facts.get("my_host_name").unwrap(), "host-TEST");
}

#[test]
fn test_exported_admin_dir_alone_is_filtered_out() {
    // adminDir neither starts with "my" nor "export" in `env` output, so
    // an export with no accompanying echo never survives the grep filter.
    let (_dir, library, vars_file) = setup(
        "export myFullName='Todd Thomas'\n\
         export myEmailAdd=todd@example.com\n\
         export adminDir=/srv/admin\n",
    );

    match extractor(vars_file, "LIVE", library).run(&ShellRunner) {
        Err(ExtractError::MissingRequired(missing)) => {
            assert_eq!(missing, vec!["admin_dir"]);
        }
        other => panic!("expected MissingRequired, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_failing_script_surfaces_stderr() {
    let (_dir, library, vars_file) = setup("echo 'not configured yet' >&2\nfalse\n");

    match extractor(vars_file, "LIVE", library).run(&ShellRunner) {
        Err(ExtractError::SourceFailed { stderr, cmd, .. }) => {
            assert!(stderr.contains("not configured yet"));
            assert!(cmd.contains("source"));
            assert!(cmd.ends_with("env | grep -E '^(my|export)'"));
        }
        other => panic!("expected SourceFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_placeholder_template_rejected_end_to_end() {
    let (_dir, library, vars_file) = setup(
        "export myFullName='fName lName'\n\
         export myEmailAdd=todd@example.com\n\
         echo adminDir=/srv/admin\n",
    );

    match extractor(vars_file, "LIVE", library).run(&ShellRunner) {
        Err(ExtractError::Placeholder) => {}
        other => panic!("expected Placeholder, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_unrelated_exports_are_dropped() {
    let (_dir, library, vars_file) = setup(
        "export myFullName='Todd Thomas'\n\
         export myEmailAdd=todd@example.com\n\
         export mySecretThing=hidden\n\
         echo adminDir=/srv/admin\n",
    );

    let facts = extractor(vars_file, "LIVE", library).run(&ShellRunner).unwrap();
    assert_eq!(facts.loaded, 3);
    assert!(!facts.facts.values().any(|v| v == "hidden"));
}
