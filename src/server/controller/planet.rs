use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        controller::param::IdParam, error::AppError, service::planet::PlanetService,
        state::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let planets_dto: Vec<_> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
