//! Favorite mutation handlers.
//!
//! Planet and people routes share the same flow and differ only in the favorite
//! target they build from the path ID.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCreatedDto, FavoriteRequestDto},
    },
    server::{
        controller::param::{FavoriteBody, IdParam},
        error::AppError,
        model::favorite::{AddFavoriteParam, FavoriteTarget, RemoveFavoriteParam},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// POST /favorite/planet/{id} - Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoriteCreatedDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Planet already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdParam(planet_id): IdParam,
    FavoriteBody(payload): FavoriteBody,
) -> Result<(StatusCode, Json<FavoriteCreatedDto>), AppError> {
    add_favorite(&state, payload, FavoriteTarget::Planet(planet_id)).await
}

/// POST /favorite/people/{id} - Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 201, description = "Person added to favorites", body = FavoriteCreatedDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 409, description = "Person already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    IdParam(person_id): IdParam,
    FavoriteBody(payload): FavoriteBody,
) -> Result<(StatusCode, Json<FavoriteCreatedDto>), AppError> {
    add_favorite(&state, payload, FavoriteTarget::Person(person_id)).await
}

/// DELETE /favorite/planet/{id} - Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "Favorite planet not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    IdParam(planet_id): IdParam,
    FavoriteBody(payload): FavoriteBody,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    remove_favorite(&state, payload, FavoriteTarget::Planet(planet_id)).await
}

/// DELETE /favorite/people/{id} - Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequestDto,
    responses(
        (status = 200, description = "Favorite person deleted", body = MessageDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 404, description = "Favorite person not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    IdParam(person_id): IdParam,
    FavoriteBody(payload): FavoriteBody,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    remove_favorite(&state, payload, FavoriteTarget::Person(person_id)).await
}

async fn add_favorite(
    state: &AppState,
    payload: FavoriteRequestDto,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<FavoriteCreatedDto>), AppError> {
    let favorite = FavoriteService::new(&state.db)
        .add(AddFavoriteParam {
            user_id: payload.user_id,
            target,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedDto {
            msg: format!("{} added to favorites successfully!", target.label()),
            favorite_id: favorite.id,
        }),
    ))
}

async fn remove_favorite(
    state: &AppState,
    payload: FavoriteRequestDto,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    FavoriteService::new(&state.db)
        .remove(RemoveFavoriteParam {
            user_id: payload.user_id,
            target,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!(
                "Favorite {} deleted successfully!",
                target.label().to_lowercase()
            ),
        }),
    ))
}
