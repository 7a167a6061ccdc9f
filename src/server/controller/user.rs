use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto, user::UserDto},
    server::{
        controller::param::IdParam, error::AppError, service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /users - List every user
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/{id}/favorites - List the favorites of a user
///
/// # Path Parameters
/// - `id`: User ID (i32)
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteDto belonging to the user
/// - `404 Not Found`: User does not exist
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdParam(user_id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let favorites = UserService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    let favorites_dto: Vec<_> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
