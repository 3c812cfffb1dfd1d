//! Line encoding for store records.
//!
//! One record per line: the id, a comma, then the name. Only the first comma
//! separates fields, so names may contain commas freely. Ids are not checked
//! for commas; an id containing one will not be found again.

/// A single id/name pair as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Lookup key (everything before the first comma).
    pub id: String,
    /// Associated value (everything after the first comma, verbatim).
    pub name: String,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Encode as `"<id>,<name>\n"`, the exact bytes appended to the store.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.id.len() + self.name.len() + 2);
        line.push_str(&self.id);
        line.push(',');
        line.push_str(&self.name);
        line.push('\n');
        line
    }
}

/// Split one store line (without its terminator) into `(id, name)`.
///
/// Returns `None` for lines that are blank after trimming. A line with no
/// comma yields the whole line as id and an empty name.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() {
        return None;
    }
    Some(line.split_once(',').unwrap_or((line, "")))
}
