use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, people::PersonDto},
    server::{
        controller::param::IdParam, error::AppError, service::people::PeopleService,
        state::AppState,
    },
};

pub static PEOPLE_TAG: &str = "people";

/// GET /people - List every person in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PeopleService::new(&state.db).get_all().await?;

    let people_dto: Vec<_> = people.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(people_dto)))
}

/// GET /people/{id} - Get a single person
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let person = PeopleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(person.into_dto())))
}
