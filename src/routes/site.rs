/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Public site routes
//!
//! - GET / - The `home` page, or the first page if none has that slug
//! - GET /site/:slug - A page by slug

use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::{BuilderError, BuilderResult};
use crate::models::Page;
use crate::routes::AppState;
use crate::services::PreviewRenderer;

const HOME_SLUG: &str = "home";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/site/:slug", get(page_by_slug))
}

async fn home(State(state): State<AppState>) -> BuilderResult<Html<String>> {
    let page = match state.store.page_by_slug(HOME_SLUG).await {
        Some(page) => page,
        None => state
            .store
            .pages()
            .await
            .into_iter()
            .next()
            .ok_or_else(|| BuilderError::NotFound("No pages".to_string()))?,
    };
    Ok(render(&state, &page))
}

async fn page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> BuilderResult<Html<String>> {
    let page = state
        .store
        .page_by_slug(&slug)
        .await
        .ok_or_else(|| BuilderError::NotFound(format!("Page '{}'", slug)))?;
    Ok(render(&state, &page))
}

fn render(state: &AppState, page: &Page) -> Html<String> {
    Html(PreviewRenderer::new(&state.catalog).render_page(page).into_string())
}
