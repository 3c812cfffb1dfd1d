/// Shared serializable output types for all commands.
///
/// These are what `--output json` writes. Text output renders the same
/// values as plain lines.
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;

/// A record as reported by `create` and `find`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutput {
    /// Always `true`.
    pub ok: bool,
    /// The record id.
    pub id: String,
    /// The record name, verbatim.
    pub name: String,
}

impl EntryOutput {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message, identical to the text-mode line.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CommandError`.
    #[must_use]
    pub fn from_command_error(err: &CommandError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_string(&EntryOutput::new("u1", "Doe, \"J\"")).unwrap();
        assert_eq!(json, r#"{"ok":true,"id":"u1","name":"Doe, \"J\""}"#);
    }

    #[test]
    fn test_error_envelope() {
        let err = CommandError::NotFound { id: "u999".to_owned() };
        let out = ErrorOutput::from_command_error(&err);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(
            json,
            r#"{"ok":false,"error":{"code":"not_found","message":"No entry found for id: u999"}}"#
        );
    }
}
