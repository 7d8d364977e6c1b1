// Order persistence
//
// The order list lives under a single key as one serialized JSON array:
// load() returns the whole list (empty when nothing was ever stored), save()
// atomically replaces it. There are no partial writes of an order.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::orders::models::Order;

/// Key-value collaborator holding the order list
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Full order list; empty when the key is absent
    async fn load(&self) -> Result<Vec<Order>>;

    /// Atomic full replace of the order list
    async fn save(&self, orders: &[Order]) -> Result<()>;
}

/// File-backed store: one JSON document on disk.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous document intact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OrderStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Order>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn save(&self, orders: &[Order]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::storage(format!(
                        "failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_vec_pretty(orders)?;
        let tmp = self.path.with_extension("tmp");

        tokio::fs::write(&tmp, &json).await.map_err(|e| {
            AppError::storage(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::storage(format!(
                "failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct InMemoryStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn save(&self, orders: &[Order]) -> Result<()> {
        *self.orders.write().await = orders.to_vec();
        Ok(())
    }
}
