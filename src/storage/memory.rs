/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! In-memory storage backend
//!
//! Behaves like browser local storage: a flat map of strings with an optional
//! size quota. Contents are lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::PersistenceError;
use crate::storage::traits::KeyValueStorage;

/// In-memory storage backend
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,

    /// Upper bound on the bytes of all keys and values together
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create an empty store without a quota
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes beyond `quota` bytes
    pub fn with_quota(quota: usize) -> Self {
        MemoryStorage {
            items: Arc::default(),
            quota: Some(quota),
        }
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    fn storage_id(&self) -> &str {
        "memory-storage"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut items = self.items.write().await;

        if let Some(quota) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > quota {
                tracing::warn!(
                    "Refusing write of {} bytes to '{}': quota of {} bytes",
                    value.len(),
                    key,
                    quota
                );
                return Err(PersistenceError::QuotaExceeded { requested, quota });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
