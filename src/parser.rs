//! Parsing of sourced-environment output into a fact mapping.

use crate::mapping::fact_name;
use std::collections::BTreeMap;

/// Remove one layer of matching surrounding quotes and trailing whitespace.
///
/// Handles a single pass of `'value'` or `"value"`; nested or mismatched
/// quotes pass through as-is. This is deliberately not a shell-quoting
/// implementation.
pub fn clean_value(value: &str) -> String {
    let trimmed = value.trim_end();

    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }

    trimmed.to_string()
}

/// Parse captured shell environment output into a fact mapping.
///
/// Each line of the form `KEY=VALUE` whose key is in the mapping table
/// contributes one entry, renamed to its fact name with the value cleaned
/// via [`clean_value`]. Comment lines, lines without `=`, and assignments
/// to unmapped names are skipped silently.
pub fn parse_shell_vars(stdout_text: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for line in stdout_text.lines() {
        let line = line.trim();
        if !line.contains('=') || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        if let Some(fact) = fact_name(key.trim()) {
            vars.insert(fact.to_string(), clean_value(value));
        }
    }

    vars
}
