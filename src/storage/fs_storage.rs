/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Filesystem storage backend
//!
//! Stores each key as one file:
//! ```text
//! data_path/
//!   admin_pages.json
//!   admin_settings.json
//! ```

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::error::PersistenceError;
use crate::storage::traits::KeyValueStorage;

/// Filesystem storage backend
pub struct FsStorage {
    /// Directory holding one file per key
    data_path: PathBuf,
}

impl FsStorage {
    /// Create a new FsStorage rooted at `data_path`
    pub fn new(data_path: PathBuf) -> Self {
        FsStorage { data_path }
    }

    /// Create the data directory if it does not exist yet
    pub async fn init(&self) -> Result<(), PersistenceError> {
        if fs::metadata(&self.data_path).await.is_ok() {
            return Ok(());
        }

        fs::create_dir_all(&self.data_path).await?;
        tracing::info!("Created storage directory at {}", self.data_path.display());

        Ok(())
    }

    /// Get the path to the file backing `key`
    fn key_path(&self, key: &str) -> PathBuf {
        self.data_path.join(format!("{}.json", Self::file_stem(key)))
    }

    /// Keep keys from escaping the data directory
    fn file_stem(key: &str) -> String {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if stem.is_empty() {
            "_".to_string()
        } else {
            stem
        }
    }
}

#[async_trait]
impl KeyValueStorage for FsStorage {
    fn storage_id(&self) -> &str {
        "fs-storage"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.data_path).await?;
        fs::write(self.key_path(key), value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        assert_eq!(storage.get_item("admin_pages").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_returns_the_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("nested"));
        assert_ok!(storage.init().await);

        assert_ok!(storage.set_item("admin_pages", "[1,2]").await);
        assert_eq!(
            storage.get_item("admin_pages").await.unwrap().as_deref(),
            Some("[1,2]")
        );
        assert!(dir.path().join("nested/admin_pages.json").exists());
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("data"));

        assert_ok!(storage.set_item("../outside", "x").await);
        assert!(!dir.path().join("outside.json").exists());
        assert_eq!(
            storage.get_item("../outside").await.unwrap().as_deref(),
            Some("x")
        );
    }

    #[tokio::test]
    async fn overwrite_replaces_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(dir.path().to_path_buf());

        assert_ok!(storage.set_item("k", "a much longer first value").await);
        assert_ok!(storage.set_item("k", "v").await);
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("v"));
    }
}
