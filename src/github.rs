// src/github.rs

//! GitHub Actions workflow-command layer.
//!
//! The runner interprets specially formatted lines on stdout:
//!
//! - `::group::<name>` / `::endgroup::` fold log output into a collapsible
//!   section.
//! - `::error::<message>` records an error annotation and marks the step
//!   red.
//!
//! Action inputs arrive as `INPUT_<NAME>` environment variables.

use std::io::{self, Write};

/// Open a collapsible group in the workflow log.
pub fn start_group(name: &str) {
    issue("group", name);
}

/// Close the most recently opened group.
pub fn end_group() {
    issue("endgroup", "");
}

/// Report an error annotation, failing the action.
///
/// The caller is responsible for terminating with a non-zero exit code; this
/// only emits the annotation the runner records.
pub fn set_failed(message: &str) {
    issue("error", message);
}

/// Write one workflow command line to stdout.
fn issue(command: &str, data: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "::{command}::{}", escape_data(data));
    let _ = out.flush();
}

/// Escape payload characters that would terminate the command line early.
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Read an action input from the environment.
///
/// The runner exposes inputs as `INPUT_<NAME>` with spaces mapped to
/// underscores and the name uppercased. Values are trimmed; an empty value
/// counts as unset.
pub fn get_input(name: &str) -> Option<String> {
    input_from(name, |key| std::env::var(key).ok())
}

fn input_from(name: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
    lookup(&key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn escape_data_handles_command_terminators() {
        assert_eq!(escape_data("plain"), "plain");
        assert_eq!(escape_data("50% done"), "50%25 done");
        assert_eq!(escape_data("line1\nline2"), "line1%0Aline2");
        assert_eq!(escape_data("line1\r\nline2"), "line1%0D%0Aline2");
    }

    #[test]
    fn escape_data_escapes_percent_first() {
        // "%0A" in the input must not collide with an escaped newline.
        assert_eq!(escape_data("%0A"), "%250A");
    }

    #[test]
    fn input_key_mangles_name_like_the_runner() {
        let lookup = |key: &str| {
            (key == "INPUT_WORKING-DIRECTORY").then(|| "  app/  ".to_string())
        };
        assert_eq!(
            input_from("working-directory", lookup),
            Some("app/".to_string())
        );
    }

    #[test]
    fn input_with_spaces_uses_underscores() {
        let lookup =
            |key: &str| (key == "INPUT_SOME_NAME").then(|| "value".to_string());
        assert_eq!(input_from("some name", lookup), Some("value".to_string()));
    }

    #[test]
    fn empty_or_missing_input_is_none() {
        assert_eq!(input_from("anything", |_| None), None);
        assert_eq!(input_from("anything", |_| Some("   ".to_string())), None);
    }

    proptest! {
        #[test]
        fn escaped_data_never_contains_raw_terminators(data in "(?s).*") {
            let escaped = escape_data(&data);
            prop_assert!(!escaped.contains('\n'));
            prop_assert!(!escaped.contains('\r'));
        }

        #[test]
        fn escaping_is_reversible(data in "(?s).*") {
            let unescaped = escape_data(&data)
                .replace("%0D", "\r")
                .replace("%0A", "\n")
                .replace("%25", "%");
            prop_assert_eq!(unescaped, data);
        }
    }
}
