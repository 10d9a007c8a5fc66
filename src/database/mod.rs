//! Storage module
//!
//! File-backed tables: every table is one JSON document holding the whole
//! collection, read and rewritten in full on each operation.

pub mod locks;
pub mod record_store;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use locks::{TableGuards, TableLocks};
pub use record_store::{FileRecordStore, RecordStore};

/// Errors raised while reading or writing a table.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on table '{table}': {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in table '{table}': {source}")]
    Serialization {
        table: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A record type persisted as a whole table.
pub trait Table: Serialize + DeserializeOwned + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Load every row of `T`, creating the backing file first if it is missing.
pub async fn load_table<T: Table>(store: &dyn RecordStore) -> Result<Vec<T>, StorageError> {
    if !store.exists(T::NAME).await {
        store.create_empty(T::NAME).await?;
        return Ok(Vec::new());
    }

    let bytes = store.load_all(T::NAME).await?;
    decode_rows(T::NAME, &bytes)
}

/// Serialize the whole collection and replace the backing file.
pub async fn save_table<T: Table>(store: &dyn RecordStore, rows: &[T]) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(rows).map_err(|source| StorageError::Serialization {
        table: T::NAME.to_string(),
        source,
    })?;
    store.save_all(T::NAME, bytes).await
}

/// A freshly created table file is empty and reads as no rows.
pub fn decode_rows<T: DeserializeOwned>(table: &str, bytes: &[u8]) -> Result<Vec<T>, StorageError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(bytes).map_err(|source| StorageError::Serialization {
        table: table.to_string(),
        source,
    })
}
