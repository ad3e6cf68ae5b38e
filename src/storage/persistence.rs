/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Page list persistence
//!
//! The full page list is one JSON array under a single key. There is no
//! version field: the stored layout is exactly `[{id, name, slug, components}]`.

use std::sync::Arc;

use crate::error::PersistenceError;
use crate::models::Page;
use crate::storage::traits::KeyValueStorage;

/// Key used by the admin panel when none is configured
pub const DEFAULT_PAGES_KEY: &str = "admin_pages";

/// Serializes the page list to, and from, one storage key
#[derive(Clone)]
pub struct PagePersistence {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl PagePersistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        PagePersistence {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the whole page list, replacing what was stored
    pub async fn save(&self, pages: &[Page]) -> Result<(), PersistenceError> {
        let content = serde_json::to_string(pages)?;
        self.storage.set_item(&self.key, &content).await?;

        tracing::debug!(
            "Saved {} page(s) to '{}' on {}",
            pages.len(),
            self.key,
            self.storage.storage_id()
        );
        Ok(())
    }

    /// Read the page list back
    ///
    /// `Ok(None)` when nothing was ever saved. Text that does not parse, or
    /// whose component configs do not fit their types, is a `Json` error.
    pub async fn load(&self) -> Result<Option<Vec<Page>>, PersistenceError> {
        let Some(content) = self.storage.get_item(&self.key).await? else {
            return Ok(None);
        };

        let pages: Vec<Page> = serde_json::from_str(&content)?;
        Ok(Some(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentConfig, HeroSectionConfig, TestimonialsConfig};
    use crate::storage::MemoryStorage;
    use tokio_test::assert_ok;

    fn persistence(storage: MemoryStorage) -> PagePersistence {
        PagePersistence::new(Arc::new(storage), DEFAULT_PAGES_KEY)
    }

    fn sample_pages() -> Vec<Page> {
        let mut home = Page::new("Home".into(), "home".into());
        home.append_component(ComponentConfig::HeroSection(HeroSectionConfig {
            headline: Some("Live like a local".into()),
            sponsor_hotel_ids: vec![2],
            ..Default::default()
        }))
        .unwrap();
        let hidden = home
            .append_component(ComponentConfig::Testimonials(
                TestimonialsConfig::default(),
            ))
            .unwrap();
        if let Some(c) = home.component_mut(&hidden) {
            c.is_visible = false;
            c.order = 7;
        }

        vec![home, Page::new("About".into(), "about".into())]
    }

    #[tokio::test]
    async fn load_without_save_is_none() {
        let persistence = persistence(MemoryStorage::new());
        assert_eq!(persistence.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn load_reproduces_saved_pages() {
        let persistence = persistence(MemoryStorage::new());
        let pages = sample_pages();

        assert_ok!(persistence.save(&pages).await);
        assert_eq!(persistence.load().await.unwrap(), Some(pages));
    }

    #[tokio::test]
    async fn stored_layout_is_a_bare_array() {
        let storage = MemoryStorage::new();
        let persistence = persistence(storage.clone());
        assert_ok!(persistence.save(&sample_pages()).await);

        let raw = storage.get_item(DEFAULT_PAGES_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert!(value.is_array());
        assert_eq!(first["slug"], "home");
        assert_eq!(first["components"][0]["type"], "HeroSection");
        assert!(first.get("version").is_none());
    }

    #[tokio::test]
    async fn garbage_is_a_json_error() {
        let storage = MemoryStorage::new();
        assert_ok!(storage.set_item(DEFAULT_PAGES_KEY, "{not json").await);

        let err = persistence(storage).load().await.unwrap_err();
        assert!(matches!(err, PersistenceError::Json(_)));
    }

    #[tokio::test]
    async fn quota_failures_are_reported() {
        let persistence = persistence(MemoryStorage::with_quota(16));
        let err = persistence.save(&sample_pages()).await.unwrap_err();
        assert!(matches!(err, PersistenceError::QuotaExceeded { .. }));
    }
}
