use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::errors::AppError;
use crate::models::employee::EmployeeRecord;

/// Name of the single slot all submissions are kept under.
pub const DEFAULT_SLOT: &str = "employees";

/// Append-only list of submitted records. `append` returns the updated full
/// list; there is no update, delete or deduplication.
pub trait EmployeeStore {
    fn load(&self) -> Result<Vec<EmployeeRecord>, AppError>;
    fn append(&mut self, record: EmployeeRecord) -> Result<Vec<EmployeeRecord>, AppError>;
}

/// File-backed store: one JSON document holding the whole ordered list,
/// read whole on load and rewritten whole on each append.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Store under `dir` using the default slot name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        JsonFileStore::new(dir.as_ref().join(format!("{}.json", DEFAULT_SLOT)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EmployeeStore for JsonFileStore {
    fn load(&self) -> Result<Vec<EmployeeRecord>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Nothing stored yet.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                error!("Failed to read store slot {:?}: {:?}", self.path, err);
                return Err(AppError::Storage(err.to_string()));
            }
        };

        serde_json::from_str(&raw).map_err(|err| {
            error!("Corrupt store slot {:?}: {:?}", self.path, err);
            AppError::Serialization(err.to_string())
        })
    }

    fn append(&mut self, record: EmployeeRecord) -> Result<Vec<EmployeeRecord>, AppError> {
        let mut records = self.load()?;
        records.push(record);

        let raw = serde_json::to_string(&records)
            .map_err(|err| AppError::Serialization(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| {
            error!("Failed to write store slot {:?}: {:?}", self.path, err);
            AppError::Storage(err.to_string())
        })?;

        debug!("Appended record to {:?}, {} stored", self.path, records.len());
        Ok(records)
    }
}

/// In-process store, used as the injectable test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<EmployeeRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl EmployeeStore for MemoryStore {
    fn load(&self) -> Result<Vec<EmployeeRecord>, AppError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: EmployeeRecord) -> Result<Vec<EmployeeRecord>, AppError> {
        self.records.push(record);
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> EmployeeRecord {
        let mut record = EmployeeRecord::default();
        record.employee_name = name.to_string();
        record
    }

    #[test]
    fn test_memory_store_appends_in_order() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        let after_first = store.append(record("first")).unwrap();
        assert_eq!(after_first.len(), 1);

        let after_second = store.append(record("second")).unwrap();
        assert_eq!(after_second.len(), 2);
        assert_eq!(after_second[0].employee_name, "first");
        assert_eq!(after_second[1].employee_name, "second");
    }

    #[test]
    fn test_file_store_missing_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_append_rewrites_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(dir.path());

        store.append(record("first")).unwrap();
        let updated = store.append(record("second")).unwrap();
        assert_eq!(updated.len(), 2);

        // Earlier entries survive the rewrite untouched.
        let reloaded = JsonFileStore::new(store.path()).load().unwrap();
        assert_eq!(reloaded, updated);
        assert_eq!(reloaded[0].employee_name, "first");
    }

    #[test]
    fn test_file_store_slot_uses_form_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(dir.path());
        store.append(record("first")).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"employeeName\":\"first\""));
        assert!(raw.contains("\"emergencyContactPhone\""));
    }

    #[test]
    fn test_file_store_corrupt_slot_reports_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        std::fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load(), Err(AppError::Serialization(_))));
    }
}
