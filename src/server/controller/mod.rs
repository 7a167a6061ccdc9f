//! HTTP request handlers.
//!
//! One handler per route. Handlers extract path and body input, delegate to the service
//! layer, and convert the resulting domain models into DTOs. Every failure is returned
//! as an `AppError` and rendered by its `IntoResponse` implementation.

pub mod doc;
pub mod favorite;
pub mod param;
pub mod people;
pub mod planet;
pub mod user;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::ErrorDto, server::error::AppError};

/// Answers requests to routes that do not exist.
pub async fn fallback() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Answers requests to an existing route with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto {
            error: "Method not allowed".to_string(),
        }),
    )
}

#[cfg(test)]
mod test;
