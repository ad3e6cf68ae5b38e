/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Hotel Page Builder Library
//!
//! Page document store for the hotel marketing site: component registry,
//! persistence adapter, preview renderer and the admin HTTP API around them.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

// Re-export commonly used types for convenience
pub use config::{Config, StorageBackend};
pub use error::{BuilderError, PersistenceError};
pub use models::{ComponentInstance, ComponentType, Page};
pub use services::{ComponentRegistry, HotelCatalog, MockAuth, PageStore, PreviewRenderer};
pub use storage::{FsStorage, KeyValueStorage, MemoryStorage, PagePersistence};

use routes::AppState;

/// Build the application router
///
/// Opens the configured storage, loads the page document and wires the
/// admin API and public site routes. Returns the router and the port to
/// listen on.
pub async fn build_app(config: Config) -> anyhow::Result<(Router, u16)> {
    let storage: Arc<dyn KeyValueStorage> = match config.storage_backend {
        StorageBackend::Fs => {
            let storage = FsStorage::new(config.data_path.clone());
            storage.init().await?;
            Arc::new(storage)
        }
        StorageBackend::Memory => match config.storage_quota {
            Some(quota) => Arc::new(MemoryStorage::with_quota(quota)),
            None => Arc::new(MemoryStorage::new()),
        },
    };
    tracing::info!("Using {} for page storage", storage.storage_id());

    let registry = Arc::new(ComponentRegistry::builtin());
    let persistence = PagePersistence::new(storage, config.storage_key.clone());
    let store = PageStore::open(persistence, registry).await;

    let catalog = match &config.hotels_path {
        Some(path) => HotelCatalog::from_file(path).await?,
        None => HotelCatalog::builtin(),
    };

    let auth = MockAuth::new(config.admin_email.clone(), config.admin_password.clone());
    let port = config.port;

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        catalog: Arc::new(catalog),
        auth: Arc::new(auth),
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::site_routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok((app, port))
}
