//! JSON file storage.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::entities::TaskStore;
use crate::errors::{TasksError, TasksResult};
use crate::storage::Storage;

/// Persists the task store to a single pretty-printed JSON file.
///
/// Writes are whole-file overwrites; the design assumes exactly one
/// process owns the file for the duration of the session.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage backed by the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path unreadable files are moved to
    fn backup_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(".bak");
        PathBuf::from(os)
    }

    /// Write a fresh empty store so the file exists on disk
    async fn initialize(&self) -> TasksResult<TaskStore> {
        let store = TaskStore::new();
        self.save(&store).await?;
        Ok(store)
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> TasksResult<TaskStore> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return self.initialize().await;
            }
            Err(e) => {
                return Err(TasksError::FileReadError {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        if bytes.is_empty() {
            return self.initialize().await;
        }

        match serde_json::from_slice(&bytes) {
            Ok(store) => Ok(store),
            Err(e) => {
                // Corrupted file: move it aside so the user can recover it
                // manually, then start over with an empty store.
                let backup = self.backup_path();
                fs::rename(&self.path, &backup).await?;
                warn!(
                    backup = %backup.display(),
                    error = %e,
                    "tasks file is unreadable, a backup was created"
                );
                self.initialize().await
            }
        }
    }

    async fn save(&self, store: &TaskStore) -> TasksResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| TasksError::FileWriteError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileStorage {
        FileStorage::new(dir.path().join("data/tasks.json"))
    }

    #[tokio::test]
    async fn test_load_missing_file_initializes_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let store = storage.load().await.unwrap();
        assert!(store.tasks().is_empty());
        assert_eq!(store.next_id(), 1);

        // A fresh file was written
        let content = std::fs::read_to_string(storage.path()).unwrap();
        let reloaded: TaskStore = serde_json::from_str(&content).unwrap();
        assert!(reloaded.tasks().is_empty());
        assert_eq!(reloaded.next_id(), 1);
    }

    #[tokio::test]
    async fn test_load_empty_file_initializes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        std::fs::write(storage.path(), "").unwrap();

        let store = storage.load().await.unwrap();
        assert!(store.tasks().is_empty());
        assert_eq!(store.next_id(), 1);
        assert!(std::fs::metadata(storage.path()).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let mut store = TaskStore::new();
        store.add("Buy milk", "errands", "P1");
        store.add("Walk dog", "", "");
        store.complete(1).unwrap();
        storage.save(&store).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded.next_id(), store.next_id());
        assert_eq!(loaded.tasks(), store.tasks());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_backed_up_and_reinitialized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        std::fs::write(storage.path(), "{not valid json").unwrap();

        let store = storage.load().await.unwrap();
        assert!(store.tasks().is_empty());
        assert_eq!(store.next_id(), 1);

        // The original bytes survive in the backup
        let backup = std::fs::read_to_string(storage.backup_path()).unwrap();
        assert_eq!(backup, "{not valid json");

        // The file itself was reinitialized
        let reloaded: TaskStore =
            serde_json::from_str(&std::fs::read_to_string(storage.path()).unwrap()).unwrap();
        assert!(reloaded.tasks().is_empty());
    }

    #[tokio::test]
    async fn test_second_corruption_overwrites_previous_backup() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        std::fs::write(storage.path(), "first garbage").unwrap();
        storage.load().await.unwrap();

        std::fs::write(storage.path(), "second garbage").unwrap();
        storage.load().await.unwrap();

        let backup = std::fs::read_to_string(storage.backup_path()).unwrap();
        assert_eq!(backup, "second garbage");
    }

    #[tokio::test]
    async fn test_saved_file_uses_wire_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let mut store = TaskStore::new();
        store.add("Buy milk", "", "");
        storage.save(&store).await.unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert!(content.contains("\"next_id\""));
        assert!(content.contains("\"createdAt\""));
        assert!(content.contains("\"emoji\""));
        // Pretty-printed with stable indentation
        assert!(content.contains("\n  \"tasks\""));
    }
}
