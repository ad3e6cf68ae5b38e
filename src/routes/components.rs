/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Component palette route
//!
//! - GET /api/components - Registered component types with their defaults

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tower_sessions::Session;

use crate::error::BuilderResult;
use crate::routes::{require_admin, AppState};
use crate::services::ComponentDefinition;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_components))
}

async fn list_components(
    State(state): State<AppState>,
    session: Session,
) -> BuilderResult<Json<Vec<ComponentDefinition>>> {
    require_admin(&session).await?;
    Ok(Json(state.store.registry().definitions().to_vec()))
}
