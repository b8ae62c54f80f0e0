//! Loading records for a screen.

use std::fs;
use std::path::{Path, PathBuf};

use datatable::{JsonRecord, TableError};
use log::info;
use thiserror::Error;

use crate::sample;
use crate::screens::Screen;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("bad records in {path}: {source}")]
    Records { path: PathBuf, source: TableError },
    #[error("bad sample records: {0}")]
    Sample(#[from] TableError),
}

/// Records from `path`, or the built-in sample for `screen`.
pub fn load_records(screen: Screen, path: Option<&Path>) -> Result<Vec<JsonRecord>, LoadError> {
    let Some(path) = path else {
        let records = JsonRecord::from_values(sample::records(screen))?;
        info!("loaded {} sample records for {:?}", records.len(), screen);
        return Ok(records);
    };

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = JsonRecord::parse_array(&text).map_err(|source| LoadError::Records {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leave.json");
        fs::write(&path, r#"[{"id": 1, "status": "Pending"}, {"id": 2}]"#).unwrap();

        let records = load_records(Screen::Leave, Some(&path)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(Screen::Leave, Some(&dir.path().join("nope.json")));
        assert!(matches!(err, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_duplicate_ids_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        fs::write(&path, r#"[{"id": 1}, {"id": 1}]"#).unwrap();

        let err = load_records(Screen::Leave, Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Records {
                source: TableError::DuplicateRecordId { index: 1, .. },
                ..
            }
        ));
    }
}
