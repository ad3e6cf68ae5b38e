/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Configuration for the page builder server
//!
//! Loads settings from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::storage::DEFAULT_PAGES_KEY;

/// Where the page document is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// One file per key under `data_path`
    Fs,
    /// Process memory, lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fs" | "file" | "filesystem" => Ok(StorageBackend::Fs),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL where the server is accessible (e.g., "http://localhost:6810")
    pub url: String,

    /// Port to listen on
    pub port: u16,

    /// Storage backend for the page document
    pub storage_backend: StorageBackend,

    /// Directory used by the filesystem backend
    pub data_path: PathBuf,

    /// Key the page list is stored under
    pub storage_key: String,

    /// Byte quota for the memory backend
    pub storage_quota: Option<usize>,

    /// Mock admin account
    pub admin_email: String,
    pub admin_password: String,

    /// JSON hotel catalog; the built-in catalog when `None`
    pub hotels_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - PAGE_BUILDER_URL: Base URL (default: "http://localhost:6810")
    /// - PAGE_BUILDER_PORT: Port number (default: 6810)
    /// - PAGE_BUILDER_STORAGE: "fs" or "memory" (default: "fs")
    /// - PAGE_BUILDER_DATA_PATH: Storage directory (default: "./page-builder/storage")
    /// - PAGE_BUILDER_STORAGE_KEY: Key of the page list (default: "admin_pages")
    /// - PAGE_BUILDER_STORAGE_QUOTA: Byte quota of the memory backend
    /// - PAGE_BUILDER_ADMIN_EMAIL / PAGE_BUILDER_ADMIN_PASSWORD: Mock admin login
    /// - PAGE_BUILDER_HOTELS_PATH: JSON hotel catalog
    pub fn from_env() -> Self {
        // Try to load .env file, but don't fail if it doesn't exist
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let port = env::var("PAGE_BUILDER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let url = env::var("PAGE_BUILDER_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        let storage_backend = match env::var("PAGE_BUILDER_STORAGE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using filesystem storage", e);
                StorageBackend::Fs
            }),
            Err(_) => defaults.storage_backend,
        };

        let data_path = env::var("PAGE_BUILDER_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let storage_key = env::var("PAGE_BUILDER_STORAGE_KEY").unwrap_or(defaults.storage_key);

        let storage_quota = env::var("PAGE_BUILDER_STORAGE_QUOTA")
            .ok()
            .and_then(|q| q.parse().ok());

        let admin_email = env::var("PAGE_BUILDER_ADMIN_EMAIL").unwrap_or(defaults.admin_email);
        let admin_password =
            env::var("PAGE_BUILDER_ADMIN_PASSWORD").unwrap_or(defaults.admin_password);

        let hotels_path = env::var("PAGE_BUILDER_HOTELS_PATH").ok().map(PathBuf::from);

        Config {
            url,
            port,
            storage_backend,
            data_path,
            storage_key,
            storage_quota,
            admin_email,
            admin_password,
            hotels_path,
        }
    }

    /// Get the full server URL including port
    pub fn server_url(&self) -> &str {
        &self.url
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: "http://localhost:6810".to_string(),
            port: 6810,
            storage_backend: StorageBackend::Fs,
            data_path: PathBuf::from("./page-builder/storage"),
            storage_key: DEFAULT_PAGES_KEY.to_string(),
            storage_quota: None,
            admin_email: "admin@example.com".to_string(),
            admin_password: "admin123".to_string(),
            hotels_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_names() {
        assert_eq!("fs".parse::<StorageBackend>(), Ok(StorageBackend::Fs));
        assert_eq!(" Memory ".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn defaults_use_the_admin_pages_key() {
        let config = Config::default();
        assert_eq!(config.storage_key, "admin_pages");
        assert_eq!(config.server_url(), "http://localhost:6810");
    }
}
