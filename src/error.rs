/*
 * Silex website builder, free/libre no-code tool for makers.
 * Copyright (c) 2023 lexoyo and Silex Labs foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or any later version.
 */

//! Error types for the page builder
//!
//! `BuilderError` is what the page store and the HTTP layer surface to callers.
//! `PersistenceError` covers the storage slot underneath; it is never swallowed,
//! the store wraps it and hands it back.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures while reading or writing the durable storage slot
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored text could not be parsed, or the document could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The storage backend refused the write because it would exceed its quota
    #[error("Storage quota exceeded: {requested} bytes requested, quota is {quota} bytes")]
    QuotaExceeded { requested: usize, quota: usize },
}

/// Errors surfaced by page builder operations
///
/// Each variant maps to a specific HTTP status code for API responses.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Another page already uses this slug (HTTP 409)
    #[error("A page with slug '{0}' already exists")]
    DuplicateSlug(String),

    /// Page or component id does not resolve (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Component type is not registered (HTTP 400)
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    /// Refused to delete the only remaining page (HTTP 409)
    #[error("Cannot delete the last remaining page")]
    LastPage,

    /// Configuration does not fit the component type (HTTP 422)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed request data (HTTP 400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Admin session required (HTTP 401)
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Login rejected (HTTP 401)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Hotel catalog file could not be read or parsed (HTTP 500)
    #[error("Hotel catalog error: {0}")]
    Catalog(String),

    /// Storage slot could not be read or written (HTTP 500)
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Session store failure (HTTP 500)
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl BuilderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BuilderError::DuplicateSlug(_) => StatusCode::CONFLICT,
            BuilderError::NotFound(_) => StatusCode::NOT_FOUND,
            BuilderError::UnknownType(_) => StatusCode::BAD_REQUEST,
            BuilderError::LastPage => StatusCode::CONFLICT,
            BuilderError::InvalidConfig(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BuilderError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BuilderError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            BuilderError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            BuilderError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BuilderError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BuilderError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for BuilderError {
    fn from(rejection: JsonRejection) -> Self {
        BuilderError::InvalidInput(rejection.body_text())
    }
}

/// Convert BuilderError into an HTTP response
///
/// Route handlers return `BuilderResult` and Axum turns the error
/// into a JSON body.
impl IntoResponse for BuilderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Server error: {}", message);
        }

        let body = Json(json!({
            "error": true,
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for page builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;
