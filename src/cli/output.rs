/// Output formatting: text lines or JSON envelopes.
use std::io::Write;

use serde::Serialize;

use super::args::OutputFormat;
use crate::commands::{CommandError, CommandOutput};
use crate::types::{EntryOutput, ErrorOutput};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Render a successful command result as the text written to stdout.
#[must_use]
pub fn render_output(output: &CommandOutput, format: OutputFormat) -> String {
    let entry = match output {
        CommandOutput::Created(entry) | CommandOutput::Found(entry) => entry,
    };
    match format {
        OutputFormat::Json => to_json_pretty(entry),
        OutputFormat::Compact => to_json_compact(entry),
        OutputFormat::Text => render_text(output),
    }
}

fn render_text(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Created(EntryOutput { name, .. }) => format!("Created entry for {name}"),
        CommandOutput::Found(EntryOutput { name, .. }) => name.clone(),
    }
}

/// Render a command failure as the text written to stderr.
#[must_use]
pub fn render_error(err: &CommandError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json_pretty(&ErrorOutput::from_command_error(err)),
        OutputFormat::Compact => to_json_compact(&ErrorOutput::from_command_error(err)),
        OutputFormat::Text => err.to_string(),
    }
}

/// Write a successful command result to stdout.
pub fn write_output(output: &CommandOutput, format: OutputFormat) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{}", render_output(output, format));
}

/// Write a command failure to stderr.
pub fn write_error(err: &CommandError, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "{}", render_error(err, format));
}

// --- Generic JSON helpers ---

fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("JSON serialization error: {e}"))
}

fn to_json_compact<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("JSON serialization error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Text, true), OutputFormat::Json);
        assert_eq!(
            resolve_format(OutputFormat::Compact, false),
            OutputFormat::Compact
        );
    }

    #[test]
    fn test_text_output() {
        let created = CommandOutput::Created(EntryOutput::new("u123", "Ada Lovelace"));
        assert_eq!(
            render_output(&created, OutputFormat::Text),
            "Created entry for Ada Lovelace"
        );

        let found = CommandOutput::Found(EntryOutput::new("u456", r#"John "Johnny" Doe"#));
        assert_eq!(
            render_output(&found, OutputFormat::Text),
            r#"John "Johnny" Doe"#
        );
    }

    #[test]
    fn test_compact_output() {
        let found = CommandOutput::Found(EntryOutput::new("u1", "Ada"));
        assert_eq!(
            render_output(&found, OutputFormat::Compact),
            r#"{"ok":true,"id":"u1","name":"Ada"}"#
        );
    }

    #[test]
    fn test_text_error() {
        let err = CommandError::NotFound { id: "u999".to_owned() };
        assert_eq!(
            render_error(&err, OutputFormat::Text),
            "No entry found for id: u999"
        );
    }

    #[test]
    fn test_json_error_parses() {
        let err = CommandError::NotFound { id: "u999".to_owned() };
        let rendered = render_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "not_found");
    }
}
