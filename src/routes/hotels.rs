/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Sponsor-hotel picker route
//!
//! - GET /api/hotels - `{id, label}` options from the hotel catalog

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tower_sessions::Session;

use crate::error::BuilderResult;
use crate::models::HotelOption;
use crate::routes::{require_admin, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_hotels))
}

async fn list_hotels(
    State(state): State<AppState>,
    session: Session,
) -> BuilderResult<Json<Vec<HotelOption>>> {
    require_admin(&session).await?;
    Ok(Json(state.catalog.picker_options()))
}
