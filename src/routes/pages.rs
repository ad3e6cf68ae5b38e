/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Page builder API routes
//!
//! Routes:
//! - GET /api/pages - List pages and the selected page id
//! - PUT /api/pages - Create a page
//! - GET /api/pages/:page_id - Read a page
//! - POST /api/pages/:page_id - Rename a page
//! - DELETE /api/pages/:page_id - Delete a page
//! - POST /api/pages/:page_id/select - Open a page in the builder
//! - GET /api/pages/:page_id/preview - HTML preview of the visible components
//! - PUT /api/pages/:page_id/components - Append a component
//! - DELETE /api/pages/:page_id/components/:component_id - Delete a component
//! - POST /api/pages/:page_id/components/:component_id/move - Move up or down
//! - POST /api/pages/:page_id/components/:component_id/visibility - Toggle visibility
//! - POST /api/pages/:page_id/components/:component_id/duplicate - Duplicate
//! - POST /api/pages/:page_id/components/:component_id/config - Replace configuration

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::BuilderResult;
use crate::models::{ComponentId, Direction, Page, PageId};
use crate::routes::{require_admin, ApiJson, AppState, MessageResponse};
use crate::services::PreviewRenderer;

/// Build page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pages).put(add_page))
        .route(
            "/:page_id",
            get(read_page).post(rename_page).delete(delete_page),
        )
        .route("/:page_id/select", post(select_page))
        .route("/:page_id/preview", get(preview_page))
        .route("/:page_id/components", put(add_component))
        .route(
            "/:page_id/components/:component_id",
            delete(delete_component),
        )
        .route(
            "/:page_id/components/:component_id/move",
            post(move_component),
        )
        .route(
            "/:page_id/components/:component_id/visibility",
            post(toggle_visibility),
        )
        .route(
            "/:page_id/components/:component_id/duplicate",
            post(duplicate_component),
        )
        .route(
            "/:page_id/components/:component_id/config",
            post(update_config),
        )
}

// ==================
// Request types
// ==================

#[derive(Debug, Deserialize)]
pub struct PageInput {
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct AddComponentInput {
    #[serde(rename = "type")]
    pub component_type: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveInput {
    pub direction: Direction,
}

// ==================
// Response types
// ==================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesResponse {
    pub pages: Vec<Page>,
    pub selected_page_id: PageId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageResponse {
    pub page_id: PageId,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResponse {
    pub component_id: ComponentId,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityResponse {
    pub is_visible: bool,
}

// ==================
// Page handlers
// ==================

/// GET /api/pages
async fn list_pages(
    State(state): State<AppState>,
    session: Session,
) -> BuilderResult<Json<PagesResponse>> {
    require_admin(&session).await?;

    Ok(Json(PagesResponse {
        pages: state.store.pages().await,
        selected_page_id: state.store.selected_page_id().await,
    }))
}

/// PUT /api/pages
async fn add_page(
    State(state): State<AppState>,
    session: Session,
    ApiJson(input): ApiJson<PageInput>,
) -> BuilderResult<Json<CreatePageResponse>> {
    require_admin(&session).await?;

    let page_id = state.store.add_page(&input.name, &input.slug).await?;
    Ok(Json(CreatePageResponse {
        message: format!("Page created with ID: {}", page_id),
        page_id,
    }))
}

/// GET /api/pages/:page_id
async fn read_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
) -> BuilderResult<Json<Page>> {
    require_admin(&session).await?;
    Ok(Json(state.store.page(&page_id).await?))
}

/// POST /api/pages/:page_id
async fn rename_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
    ApiJson(input): ApiJson<PageInput>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state
        .store
        .rename_page(&page_id, &input.name, &input.slug)
        .await?;
    Ok(Json(MessageResponse::new("Page saved")))
}

/// DELETE /api/pages/:page_id
async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state.store.delete_page(&page_id).await?;
    Ok(Json(MessageResponse::new("Page deleted")))
}

/// POST /api/pages/:page_id/select
async fn select_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state.store.select_page(&page_id).await?;
    Ok(Json(MessageResponse::new("Page selected")))
}

/// GET /api/pages/:page_id/preview
async fn preview_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
) -> BuilderResult<Html<String>> {
    require_admin(&session).await?;

    let page = state.store.page(&page_id).await?;
    let markup = PreviewRenderer::new(&state.catalog).render_page(&page);
    Ok(Html(markup.into_string()))
}

// ==================
// Component handlers
// ==================

/// PUT /api/pages/:page_id/components
async fn add_component(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<PageId>,
    ApiJson(input): ApiJson<AddComponentInput>,
) -> BuilderResult<Json<ComponentResponse>> {
    require_admin(&session).await?;

    let component_id = state
        .store
        .add_component(&page_id, &input.component_type)
        .await?;
    Ok(Json(ComponentResponse {
        message: format!("{} added", input.component_type),
        component_id,
    }))
}

/// DELETE /api/pages/:page_id/components/:component_id
async fn delete_component(
    State(state): State<AppState>,
    session: Session,
    Path((page_id, component_id)): Path<(PageId, ComponentId)>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state.store.delete_component(&page_id, &component_id).await?;
    Ok(Json(MessageResponse::new("Component deleted")))
}

/// POST /api/pages/:page_id/components/:component_id/move
async fn move_component(
    State(state): State<AppState>,
    session: Session,
    Path((page_id, component_id)): Path<(PageId, ComponentId)>,
    ApiJson(input): ApiJson<MoveInput>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state
        .store
        .move_component(&page_id, &component_id, input.direction)
        .await?;
    Ok(Json(MessageResponse::new("Component moved")))
}

/// POST /api/pages/:page_id/components/:component_id/visibility
async fn toggle_visibility(
    State(state): State<AppState>,
    session: Session,
    Path((page_id, component_id)): Path<(PageId, ComponentId)>,
) -> BuilderResult<Json<VisibilityResponse>> {
    require_admin(&session).await?;

    let is_visible = state
        .store
        .toggle_visibility(&page_id, &component_id)
        .await?;
    Ok(Json(VisibilityResponse { is_visible }))
}

/// POST /api/pages/:page_id/components/:component_id/duplicate
async fn duplicate_component(
    State(state): State<AppState>,
    session: Session,
    Path((page_id, component_id)): Path<(PageId, ComponentId)>,
) -> BuilderResult<Json<ComponentResponse>> {
    require_admin(&session).await?;

    let new_id = state
        .store
        .duplicate_component(&page_id, &component_id)
        .await?;
    Ok(Json(ComponentResponse {
        message: format!("Component duplicated with ID: {}", new_id),
        component_id: new_id,
    }))
}

/// POST /api/pages/:page_id/components/:component_id/config
///
/// The body is the new configuration object for the component's type.
async fn update_config(
    State(state): State<AppState>,
    session: Session,
    Path((page_id, component_id)): Path<(PageId, ComponentId)>,
    ApiJson(config): ApiJson<serde_json::Value>,
) -> BuilderResult<Json<MessageResponse>> {
    require_admin(&session).await?;

    state
        .store
        .update_component_config(&page_id, &component_id, config)
        .await?;
    Ok(Json(MessageResponse::new("Component saved")))
}
