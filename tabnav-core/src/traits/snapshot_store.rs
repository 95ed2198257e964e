//! Snapshot persistence abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::NavigationResult;

/// Saved-state store for encoded navigation snapshots.
///
/// Keys identify the UI surface that owns a controller (one per window or
/// activity). Values are the JSON produced by
/// [`NavigationSnapshot::to_json`](crate::types::NavigationSnapshot::to_json).
///
/// Provides a default memory implementation of `InMemorySnapshotStore`.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Save an encoded snapshot, replacing any previous one
    ///
    /// # Arguments
    /// * `key` - Surface key
    /// * `encoded` - Encoded snapshot
    async fn save(&self, key: &str, encoded: String) -> NavigationResult<()>;

    /// Load the encoded snapshot for a surface
    ///
    /// # Arguments
    /// * `key` - Surface key
    async fn load(&self, key: &str) -> NavigationResult<Option<String>>;

    /// Discard the snapshot for a surface
    ///
    /// # Arguments
    /// * `key` - Surface key
    async fn remove(&self, key: &str) -> NavigationResult<()>;
}

/// In-memory snapshot store
///
/// Process-local; snapshots live as long as the store does.
#[derive(Clone, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Create a new memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Whether no snapshot is stored
    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, key: &str, encoded: String) -> NavigationResult<()> {
        self.snapshots.write().await.insert(key.to_string(), encoded);
        Ok(())
    }

    async fn load(&self, key: &str) -> NavigationResult<Option<String>> {
        Ok(self.snapshots.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> NavigationResult<()> {
        self.snapshots.write().await.remove(key);
        Ok(())
    }
}
