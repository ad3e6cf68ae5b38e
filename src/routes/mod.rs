/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! HTTP routes for the page builder
//!
//! `api_routes` is the admin JSON API, mounted under `/api`.
//! `site_routes` renders the public pages.

mod auth;
mod components;
mod hotels;
mod pages;
mod site;

use std::sync::Arc;

use axum::extract::{FromRequest, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_sessions::Session;

use crate::config::Config;
use crate::error::{BuilderError, BuilderResult};
use crate::models::AdminUser;
use crate::services::{HotelCatalog, MockAuth, PageStore};

/// Session key holding the logged-in `AdminUser`
pub const ADMIN_SESSION_KEY: &str = "admin";

/// Shared application state
///
/// This state is available to all route handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,

    /// The page document
    pub store: Arc<PageStore>,

    /// Static hotel list for the sponsor picker and previews
    pub catalog: Arc<HotelCatalog>,

    /// Admin credential check
    pub auth: Arc<MockAuth>,
}

/// Build the admin API router
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth::routes())
        .nest("/components", components::routes())
        .nest("/hotels", hotels::routes())
        .nest("/pages", pages::routes())
}

/// Build the public site router
pub fn site_routes() -> Router<AppState> {
    site::routes()
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "hotel-page-builder",
        "version": env!("CARGO_PKG_VERSION"),
        "url": state.config.server_url(),
        "storageKey": state.config.storage_key
    }))
}

/// JSON body extractor that rejects with the API error body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BuilderError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

/// Get the logged-in admin, or fail with `NotAuthenticated`
async fn require_admin(session: &Session) -> BuilderResult<AdminUser> {
    session
        .get::<AdminUser>(ADMIN_SESSION_KEY)
        .await?
        .ok_or(BuilderError::NotAuthenticated)
}
