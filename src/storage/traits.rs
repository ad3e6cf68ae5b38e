/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Storage trait definitions

use async_trait::async_trait;

use crate::error::PersistenceError;

/// A string-keyed store of text values
///
/// Implementations might store data on:
/// - Local filesystem (FsStorage)
/// - Process memory (MemoryStorage)
///
/// Writes replace the whole value of a key.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Unique identifier for this backend (e.g., "fs-storage")
    fn storage_id(&self) -> &str;

    /// Read the value stored under `key`, `None` if absent
    async fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}
