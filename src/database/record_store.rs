//! Record store
//!
//! Raw whole-table persistence. A store knows nothing about the shape of
//! the rows: it only checks, creates, reads and replaces `<table>.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::StorageError;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// True iff the backing file for `table` exists.
    async fn exists(&self, table: &str) -> bool;

    /// Create an empty backing file and return its path.
    async fn create_empty(&self, table: &str) -> Result<PathBuf, StorageError>;

    /// Raw serialized contents of the whole table.
    async fn load_all(&self, table: &str) -> Result<Vec<u8>, StorageError>;

    /// Replace the whole table with `contents`.
    async fn save_all(&self, table: &str, contents: Vec<u8>) -> Result<(), StorageError>;
}

/// Store backed by a directory with one JSON file per table.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{}.json", table))
    }

    async fn ensure_root(&self, table: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| io_error(table, source))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn exists(&self, table: &str) -> bool {
        fs::try_exists(self.table_path(table)).await.unwrap_or(false)
    }

    async fn create_empty(&self, table: &str) -> Result<PathBuf, StorageError> {
        self.ensure_root(table).await?;

        // Never truncates: a file that appeared in the meantime keeps its rows.
        let path = self.table_path(table);
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .open(&path)
            .await
            .map_err(|source| io_error(table, source))?;

        debug!("Created empty table file {}", path.display());
        Ok(path)
    }

    async fn load_all(&self, table: &str) -> Result<Vec<u8>, StorageError> {
        fs::read(self.table_path(table))
            .await
            .map_err(|source| io_error(table, source))
    }

    async fn save_all(&self, table: &str, contents: Vec<u8>) -> Result<(), StorageError> {
        self.ensure_root(table).await?;

        // Staged write then rename: readers see the old or the new table,
        // never a partial one.
        let path = self.table_path(table);
        let staging = self.root.join(format!(".{}.json.tmp", table));
        fs::write(&staging, &contents)
            .await
            .map_err(|source| io_error(table, source))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|source| io_error(table, source))?;

        debug!("Saved {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

fn io_error(table: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        table: table.to_string(),
        source,
    }
}
