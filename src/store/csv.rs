/// File-backed repository: one `id,name` line per record, appended in place.
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::StoreError;
use super::record::{Record, split_line};
use super::repository::{KeyValueRepository, Lookup};

/// Handle to a CSV store file.
///
/// Holds only the path. Every operation opens the file, does its work and
/// closes it again; the file is created by the first `create`.
#[derive(Debug, Clone)]
pub struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl KeyValueRepository for CsvRepository {
    fn create(&self, id: &str, name: &str) -> Result<(), StoreError> {
        let line = Record::new(id, name).to_line();
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        // One write call so small appends stay atomic on POSIX filesystems.
        file.write_all(line.as_bytes()).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), id, bytes = line.len(), "appended record");
        Ok(())
    }

    fn lookup(&self, id: &str) -> Lookup {
        let contents = match self.read_contents() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "store file absent");
                return Lookup::NotFound;
            }
            Err(err) => return Lookup::Unreadable(err),
        };

        let found = contents
            .split('\n')
            .filter_map(split_line)
            .find(|(line_id, _)| *line_id == id)
            .map(|(_, name)| name.to_owned());

        match found {
            Some(name) => Lookup::Found(name),
            None => Lookup::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(contents: &str) -> (tempfile::TempDir, CsvRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, CsvRepository::new(path))
    }

    fn empty_store() -> (tempfile::TempDir, CsvRepository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvRepository::new(dir.path().join("data.csv"));
        (dir, repo)
    }

    #[test]
    fn test_create_appends_exact_line() {
        let (_dir, repo) = store_with("");
        repo.create("u123", "Ada Lovelace").unwrap();
        repo.create("u456", r#"John "Johnny" Doe"#).unwrap();

        let contents = std::fs::read_to_string(repo.path()).unwrap();
        assert_eq!(contents, "u123,Ada Lovelace\nu456,John \"Johnny\" Doe\n");
    }

    #[test]
    fn test_create_makes_missing_file() {
        let (_dir, repo) = empty_store();
        assert!(!repo.path().exists());
        repo.create("u1", "Ada").unwrap();
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), "u1,Ada\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvRepository::new(dir.path().join("nope").join("data.csv"));
        let err = repo.create("u1", "Ada").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(err.path(), repo.path());
    }

    #[test]
    fn test_find_existing_id() {
        let (_dir, repo) = store_with("u123,Ada Lovelace\nu456,John Doe\nu789,Jane Smith\n");
        assert_eq!(repo.find("u456").unwrap().as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_find_missing_id() {
        let (_dir, repo) = store_with("u123,Ada Lovelace\nu456,John Doe\n");
        assert_eq!(repo.find("u999").unwrap(), None);
    }

    #[test]
    fn test_round_trip_preserves_commas_and_quotes() {
        let (_dir, repo) = empty_store();
        repo.create("u1", "Doe, John").unwrap();
        repo.create("u2", r#"John "Johnny" Doe"#).unwrap();
        assert_eq!(repo.find("u1").unwrap().as_deref(), Some("Doe, John"));
        assert_eq!(
            repo.find("u2").unwrap().as_deref(),
            Some(r#"John "Johnny" Doe"#)
        );
    }

    #[test]
    fn test_first_match_wins() {
        let (_dir, repo) = empty_store();
        repo.create("u123", "Ada Lovelace").unwrap();
        repo.create("u123", "Ada Updated").unwrap();
        assert_eq!(repo.find("u123").unwrap().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_empty_stores_find_nothing() {
        let (_dir, repo) = store_with("");
        assert_eq!(repo.find("u123").unwrap(), None);

        let (_dir, repo) = store_with("\n\n  \n");
        assert_eq!(repo.find("u123").unwrap(), None);
        assert_eq!(repo.find("").unwrap(), None);

        let (_dir, repo) = empty_store();
        assert!(matches!(repo.lookup("u123"), Lookup::NotFound));
    }

    #[test]
    fn test_blank_lines_between_records() {
        let (_dir, repo) = store_with("\nu1,Ada\n\n   \nu2,Grace\n\n");
        assert_eq!(repo.find("u1").unwrap().as_deref(), Some("Ada"));
        assert_eq!(repo.find("u2").unwrap().as_deref(), Some("Grace"));
        assert_eq!(repo.find("").unwrap(), None);
    }

    #[test]
    fn test_id_match_is_exact() {
        let (_dir, repo) = store_with("u1,Ada\nU1,Grace\n u1,Barbara\n");
        assert_eq!(repo.find("u1").unwrap().as_deref(), Some("Ada"));
        assert_eq!(repo.find("U1").unwrap().as_deref(), Some("Grace"));
        assert_eq!(repo.find("u").unwrap(), None);
    }

    #[test]
    fn test_line_without_comma_has_empty_name() {
        let (_dir, repo) = store_with("orphan\n");
        assert_eq!(repo.find("orphan").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_unreadable_store_reads_as_absent() {
        // Invalid UTF-8 cannot be read as text.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, [b'u', b'1', b',', 0xff, 0xfe, b'\n']).unwrap();
        let repo = CsvRepository::new(path);

        assert_eq!(repo.find("u1").unwrap(), None);
        match repo.lookup("u1") {
            Lookup::Unreadable(StoreError::Read { .. }) => {}
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_as_store_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let repo = CsvRepository::new(dir.path());
        assert!(matches!(repo.lookup("u1"), Lookup::Unreadable(_)));
        assert!(matches!(
            repo.create("u1", "Ada"),
            Err(StoreError::Write { .. })
        ));
    }
}
