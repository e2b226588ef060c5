use crate::core::traits::RecordStore;
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// A collection persisted as a single JSON array in one file.
///
/// A missing file is the first-run state and loads as an empty collection;
/// only [`RecordStore::save`] creates the file. Saves overwrite the whole
/// file without locking, so concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T> RecordStore<T> for JsonStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> AppResult<Vec<T>> {
        if !self.path.exists() {
            log::debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", self.path.display(), e)))?;

        let records: Vec<T> = serde_json::from_str(&content)
            .map_err(|e| AppError::Parse(format!("{}: {}", self.path.display(), e)))?;

        log::debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save(&self, records: &[T]) -> AppResult<()> {
        let content = serde_json::to_string(records)
            .map_err(|e| AppError::Serialize(format!("{}: {}", self.path.display(), e)))?;

        std::fs::write(&self.path, content)
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", self.path.display(), e)))?;

        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store for command tests; counts saves so tests can assert that
/// a command left storage untouched.
#[cfg(test)]
pub(crate) struct MemoryStore<T> {
    records: std::cell::RefCell<Vec<T>>,
    saves: std::cell::Cell<usize>,
}

#[cfg(test)]
impl<T: Clone> MemoryStore<T> {
    pub(crate) fn with(records: Vec<T>) -> Self {
        Self {
            records: std::cell::RefCell::new(records),
            saves: std::cell::Cell::new(0),
        }
    }

    pub(crate) fn records(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.get()
    }
}

#[cfg(test)]
impl<T: Clone> RecordStore<T> for MemoryStore<T> {
    fn load(&self) -> AppResult<Vec<T>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[T]) -> AppResult<()> {
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Contact;

    #[test]
    fn test_missing_file_loads_empty_without_creating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo_list.json");
        let store = JsonStore::new(&path);

        let items: Vec<String> = store.load().unwrap();
        assert!(items.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("todo_list.json"));

        let items = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        store.save(items.as_slice()).unwrap();
        let loaded: Vec<String> = store.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("todo_list.json"));

        let first = vec!["one".to_string(), "two".to_string()];
        let second = vec!["three".to_string()];
        store.save(first.as_slice()).unwrap();
        store.save(second.as_slice()).unwrap();
        let loaded: Vec<String> = store.load().unwrap();
        assert_eq!(loaded, vec!["three"]);
    }

    #[test]
    fn test_file_is_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        let store = JsonStore::new(&path);

        let contacts = vec![Contact::new(Some("Bob".to_string()), None, Some("b@x".to_string()))];
        store.save(contacts.as_slice()).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{ "name": "Bob", "phone": null, "email": "b@x" }])
        );
    }

    #[test]
    fn test_reads_files_written_by_other_tools() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(
            &path,
            r#"[{"name": "Ann", "phone": "5", "email": null}, {"name": null}]"#,
        )
        .unwrap();

        let contacts: Vec<Contact> = JsonStore::new(&path).load().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].phone.as_deref(), Some("5"));
        assert_eq!(contacts[1], Contact::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo_list.json");
        std::fs::write(&path, "{not json").unwrap();

        let result: AppResult<Vec<String>> = JsonStore::new(&path).load();
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_non_array_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo_list.json");
        std::fs::write(&path, r#"{"items": []}"#).unwrap();

        let result: AppResult<Vec<String>> = JsonStore::new(&path).load();
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
