//! Custom extractors shared by the handlers.
//!
//! Both extractors reject with `AppError` so malformed input is answered with the
//! same JSON error body as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;

use crate::{model::favorite::FavoriteRequestDto, server::error::AppError};

/// Integer `{id}` path segment.
///
/// Segments that are not integers never match a resource, so they are answered with
/// 404 rather than a plain-text 400.
pub struct IdParam(pub i32);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Resource not found".to_string()))?;

        Ok(Self(id))
    }
}

/// JSON body of the favorite endpoints, `{"user_id": <int>}`.
///
/// # Rejections
/// - Absent, non-JSON or `null` body: `You must send a JSON body with user_id`
/// - Missing `user_id` field: `The 'user_id' field is required`
/// - Non-integer `user_id`: `The 'user_id' field must be an integer`
pub struct FavoriteBody(pub FavoriteRequestDto);

impl<S> FromRequest<S> for FavoriteBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let missing_body =
            || AppError::BadRequest("You must send a JSON body with user_id".to_string());

        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|_| missing_body())?;
        if body.is_null() {
            return Err(missing_body());
        }

        let user_id = body
            .get("user_id")
            .ok_or_else(|| AppError::BadRequest("The 'user_id' field is required".to_string()))?
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .ok_or_else(|| {
                AppError::BadRequest("The 'user_id' field must be an integer".to_string())
            })?;

        Ok(Self(FavoriteRequestDto { user_id }))
    }
}
