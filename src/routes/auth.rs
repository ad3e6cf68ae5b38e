/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Admin authentication routes
//!
//! Routes:
//! - POST /api/auth/login - Check credentials and open an admin session
//! - POST /api/auth/logout - Close the admin session
//! - GET /api/auth/me - Current admin, 401 if logged out

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_sessions::Session;

use crate::error::{BuilderError, BuilderResult};
use crate::models::{AdminUser, Credentials};
use crate::routes::{require_admin, ApiJson, AppState, MessageResponse, ADMIN_SESSION_KEY};

/// Build auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(credentials): ApiJson<Credentials>,
) -> BuilderResult<Json<AdminUser>> {
    if !state.auth.login(&credentials.email, &credentials.password) {
        tracing::warn!("Rejected admin login for '{}'", credentials.email.trim());
        return Err(BuilderError::InvalidCredentials);
    }

    let user = state.auth.admin_user();
    session.insert(ADMIN_SESSION_KEY, user.clone()).await?;
    tracing::info!("Admin '{}' logged in", user.email);

    Ok(Json(user))
}

/// POST /api/auth/logout
async fn logout(session: Session) -> BuilderResult<Json<MessageResponse>> {
    session.remove::<AdminUser>(ADMIN_SESSION_KEY).await?;
    Ok(Json(MessageResponse::new("Logged out")))
}

/// GET /api/auth/me
async fn me(session: Session) -> BuilderResult<Json<AdminUser>> {
    Ok(Json(require_admin(&session).await?))
}
