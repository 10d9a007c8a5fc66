//! Advisory table locks
//!
//! One async mutex per table name. Operations that load, modify and save a
//! table hold its lock for the whole sequence so two requests in the same
//! process cannot overwrite each other's version of the file. Nothing here
//! protects against other processes writing the same directory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
pub struct TableLocks {
    locks: Arc<Mutex<HashMap<&'static str, Arc<AsyncMutex<()>>>>>,
}

/// Guards held for a set of tables; released on drop.
#[derive(Debug)]
pub struct TableGuards {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl TableLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, table: &'static str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(table).or_default().clone()
    }

    /// Lock every table in `tables`. Tables are always acquired in name
    /// order, whatever order the caller lists them in.
    pub async fn acquire(&self, tables: &[&'static str]) -> TableGuards {
        let mut ordered = tables.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        let mut guards = Vec::with_capacity(ordered.len());
        for table in ordered {
            guards.push(self.lock_for(table).lock_owned().await);
        }

        TableGuards { _guards: guards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_table_is_exclusive() {
        let locks = TableLocks::new();
        let held = locks.acquire(&["parking_lot"]).await;

        let waiting = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(&["parking_lot", "vehicle"]),
        )
        .await;
        assert!(waiting.is_err());

        drop(held);
        let acquired = tokio::time::timeout(
            Duration::from_millis(50),
            locks.acquire(&["vehicle", "parking_lot"]),
        )
        .await;
        assert!(acquired.is_ok());
    }

    #[tokio::test]
    async fn test_distinct_tables_do_not_block() {
        let locks = TableLocks::new();
        let _lots = locks.acquire(&["parking_lot"]).await;

        let other = tokio::time::timeout(Duration::from_millis(50), locks.acquire(&["vehicle"])).await;
        assert!(other.is_ok());
    }
}
