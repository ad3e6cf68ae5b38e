/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Page document store
//!
//! Owns the in-memory page list and mirrors every successful mutation to the
//! persistence slot. Mutations run on a copy of the document which is only
//! committed once the save went through, so a failed write leaves the store
//! exactly as it was.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{BuilderError, BuilderResult};
use crate::models::{
    normalize_slug, ComponentConfig, ComponentId, ComponentInstance, ComponentType, Direction,
    Page, PageId,
};
use crate::services::ComponentRegistry;
use crate::storage::PagePersistence;

/// Component types on the default Home page, top to bottom
const DEFAULT_HOME_COMPONENTS: [ComponentType; 5] = [
    ComponentType::HeroSection,
    ComponentType::ShuffleHero,
    ComponentType::HotelShowcase,
    ComponentType::Testimonials,
    ComponentType::Footer,
];

#[derive(Debug, Clone)]
struct StoreState {
    pages: Vec<Page>,

    /// Page currently open in the builder; never persisted
    selected_page_id: PageId,
}

impl StoreState {
    fn new(pages: Vec<Page>) -> Self {
        let selected_page_id = pages.first().map(|p| p.id.clone()).unwrap_or_default();
        StoreState {
            pages,
            selected_page_id,
        }
    }

    fn page(&self, page_id: &str) -> BuilderResult<&Page> {
        self.pages
            .iter()
            .find(|p| p.id == page_id)
            .ok_or_else(|| page_not_found(page_id))
    }

    fn page_mut(&mut self, page_id: &str) -> BuilderResult<&mut Page> {
        self.pages
            .iter_mut()
            .find(|p| p.id == page_id)
            .ok_or_else(|| page_not_found(page_id))
    }

    /// Fail if another page (other than `except`) already uses `slug`
    fn ensure_unique_slug(&self, slug: &str, except: Option<&str>) -> BuilderResult<()> {
        let taken = self
            .pages
            .iter()
            .any(|p| Some(p.id.as_str()) != except && normalize_slug(&p.slug) == slug);
        if taken {
            return Err(BuilderError::DuplicateSlug(slug.to_string()));
        }
        Ok(())
    }
}

fn page_not_found(page_id: &str) -> BuilderError {
    BuilderError::NotFound(format!("Page '{}'", page_id))
}

fn component_not_found(page_id: &str, component_id: &str) -> BuilderError {
    BuilderError::NotFound(format!(
        "Component '{}' on page '{}'",
        component_id, page_id
    ))
}

/// Validate a page name and derive the normalized slug
fn page_identity(name: &str, slug: &str) -> BuilderResult<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BuilderError::InvalidInput("Page name is required".to_string()));
    }

    let mut slug = normalize_slug(slug);
    if slug.is_empty() {
        slug = normalize_slug(name);
    }

    Ok((name.to_string(), slug))
}

/// Explicitly owned page document with persistence
pub struct PageStore {
    state: Mutex<StoreState>,
    persistence: PagePersistence,
    registry: Arc<ComponentRegistry>,
}

impl PageStore {
    /// Open the store from the persistence slot
    ///
    /// A missing, empty or unreadable document falls back to the default
    /// Home page. Read failures are logged, not returned.
    pub async fn open(persistence: PagePersistence, registry: Arc<ComponentRegistry>) -> Self {
        let pages = match persistence.load().await {
            Ok(Some(pages)) if !pages.is_empty() => {
                tracing::info!("Loaded {} page(s) from '{}'", pages.len(), persistence.key());
                pages
            }
            Ok(_) => {
                tracing::info!(
                    "No saved pages under '{}', starting from the default Home page",
                    persistence.key()
                );
                Self::default_pages(&registry)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not load pages from '{}', falling back to defaults: {}",
                    persistence.key(),
                    e
                );
                Self::default_pages(&registry)
            }
        };

        PageStore {
            state: Mutex::new(StoreState::new(pages)),
            persistence,
            registry,
        }
    }

    /// The built-in single Home page
    pub fn default_pages(registry: &ComponentRegistry) -> Vec<Page> {
        let mut home = Page::new("Home".to_string(), "home".to_string());
        home.components = DEFAULT_HOME_COMPONENTS
            .iter()
            .filter_map(|component_type| registry.get_type(*component_type))
            .zip(0..)
            .map(|(definition, order)| {
                ComponentInstance::new(definition.default_config.clone(), order)
            })
            .collect();
        vec![home]
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Snapshot of all pages
    pub async fn pages(&self) -> Vec<Page> {
        self.state.lock().await.pages.clone()
    }

    pub async fn page(&self, page_id: &str) -> BuilderResult<Page> {
        self.state.lock().await.page(page_id).cloned()
    }

    /// Find a page by slug, normalizing the lookup
    pub async fn page_by_slug(&self, slug: &str) -> Option<Page> {
        let slug = normalize_slug(slug);
        let state = self.state.lock().await;
        state
            .pages
            .iter()
            .find(|p| normalize_slug(&p.slug) == slug)
            .cloned()
    }

    pub async fn selected_page_id(&self) -> PageId {
        self.state.lock().await.selected_page_id.clone()
    }

    /// Change the page open in the builder
    pub async fn select_page(&self, page_id: &str) -> BuilderResult<()> {
        let mut state = self.state.lock().await;
        state.page(page_id)?;
        state.selected_page_id = page_id.to_string();
        Ok(())
    }

    /// Create an empty page and return its id
    pub async fn add_page(&self, name: &str, slug: &str) -> BuilderResult<PageId> {
        let (name, slug) = page_identity(name, slug)?;

        let page_id = self
            .mutate(|state| {
                state.ensure_unique_slug(&slug, None)?;
                let page = Page::new(name, slug.clone());
                let page_id = page.id.clone();
                state.pages.push(page);
                Ok(page_id)
            })
            .await?;

        tracing::info!("Added page '{}' ({})", slug, page_id);
        Ok(page_id)
    }

    /// Change a page's name and slug
    pub async fn rename_page(&self, page_id: &str, name: &str, slug: &str) -> BuilderResult<()> {
        let (name, slug) = page_identity(name, slug)?;

        self.mutate(|state| {
            state.page(page_id)?;
            state.ensure_unique_slug(&slug, Some(page_id))?;
            let page = state.page_mut(page_id)?;
            page.name = name;
            page.slug = slug;
            Ok(())
        })
        .await
    }

    /// Delete a page; the last remaining page cannot be deleted
    pub async fn delete_page(&self, page_id: &str) -> BuilderResult<()> {
        self.mutate(|state| {
            state.page(page_id)?;
            if state.pages.len() <= 1 {
                return Err(BuilderError::LastPage);
            }

            state.pages.retain(|p| p.id != page_id);
            if state.selected_page_id == page_id {
                state.selected_page_id = state.pages[0].id.clone();
            }
            Ok(())
        })
        .await?;

        tracing::info!("Deleted page {}", page_id);
        Ok(())
    }

    /// Append an instance of `type_tag` with its registered default config
    pub async fn add_component(&self, page_id: &str, type_tag: &str) -> BuilderResult<ComponentId> {
        self.mutate(|state| {
            let page = state.page_mut(page_id)?;
            let definition = self.registry.get(type_tag)?;
            page.append_component(definition.default_config.clone())
        })
        .await
    }

    /// Swap a component with its neighbour; no-op at either end or on a tie
    pub async fn move_component(
        &self,
        page_id: &str,
        component_id: &str,
        direction: Direction,
    ) -> BuilderResult<()> {
        self.mutate(|state| {
            let page = state.page_mut(page_id)?;
            page.move_component(component_id, direction)
                .ok_or_else(|| component_not_found(page_id, component_id))?;
            Ok(())
        })
        .await
    }

    /// Flip visibility and return the new value
    pub async fn toggle_visibility(&self, page_id: &str, component_id: &str) -> BuilderResult<bool> {
        self.mutate(|state| {
            let component = state
                .page_mut(page_id)?
                .component_mut(component_id)
                .ok_or_else(|| component_not_found(page_id, component_id))?;
            component.is_visible = !component.is_visible;
            Ok(component.is_visible)
        })
        .await
    }

    /// Clone a component to the end of its page and return the copy's id
    pub async fn duplicate_component(
        &self,
        page_id: &str,
        component_id: &str,
    ) -> BuilderResult<ComponentId> {
        self.mutate(|state| {
            state.page_mut(page_id)?.duplicate_component(component_id)
        })
        .await
    }

    /// Remove a component permanently
    pub async fn delete_component(&self, page_id: &str, component_id: &str) -> BuilderResult<()> {
        self.mutate(|state| {
            state
                .page_mut(page_id)?
                .remove_component(component_id)
                .ok_or_else(|| component_not_found(page_id, component_id))?;
            Ok(())
        })
        .await
    }

    /// Replace a component's configuration
    ///
    /// The payload is parsed as the configuration of the component's own
    /// type; anything that does not fit is `InvalidConfig`.
    pub async fn update_component_config(
        &self,
        page_id: &str,
        component_id: &str,
        config: serde_json::Value,
    ) -> BuilderResult<()> {
        self.mutate(|state| {
            let component = state
                .page_mut(page_id)?
                .component_mut(component_id)
                .ok_or_else(|| component_not_found(page_id, component_id))?;
            component.config = ComponentConfig::from_value(component.component_type(), config)
                .map_err(BuilderError::InvalidConfig)?;
            Ok(())
        })
        .await
    }

    /// Apply `operation` to a copy of the state, persist it, then commit
    async fn mutate<T>(
        &self,
        operation: impl FnOnce(&mut StoreState) -> BuilderResult<T>,
    ) -> BuilderResult<T> {
        let mut state = self.state.lock().await;
        let mut draft = state.clone();

        let output = operation(&mut draft)?;
        self.persistence.save(&draft.pages).await?;

        *state = draft;
        Ok(output)
    }
}
