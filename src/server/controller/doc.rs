//! API self-description: the OpenAPI document and the endpoint sitemap.

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::{openapi::path::Operation, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SitemapDto},
        favorite::{FavoriteCreatedDto, FavoriteDto, FavoriteKindDto, FavoriteRequestDto},
        people::PersonDto,
        planet::PlanetDto,
        user::UserDto,
    },
    server::controller::{favorite, people, planet, user},
};

pub static DOC_TAG: &str = "doc";

#[derive(OpenApi)]
#[openapi(
    info(title = "Holonet API", description = "Star Wars catalog with per-user favorites"),
    paths(
        sitemap,
        openapi,
        people::get_all_people,
        people::get_person,
        planet::get_all_planets,
        planet::get_planet,
        user::get_all_users,
        user::get_user_favorites,
        favorite::add_favorite_planet,
        favorite::add_favorite_person,
        favorite::delete_favorite_planet,
        favorite::delete_favorite_person,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        SitemapDto,
        PersonDto,
        PlanetDto,
        UserDto,
        FavoriteDto,
        FavoriteKindDto,
        FavoriteRequestDto,
        FavoriteCreatedDto,
    ))
)]
pub struct ApiDoc;

/// GET / - List every endpoint as `"METHOD /path"`
#[utoipa::path(
    get,
    path = "/",
    tag = DOC_TAG,
    responses(
        (status = 200, description = "Endpoint listing", body = SitemapDto)
    ),
)]
pub async fn sitemap() -> impl IntoResponse {
    (StatusCode::OK, Json(SitemapDto { endpoints: endpoints() }))
}

/// GET /openapi.json - OpenAPI document of the API
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = DOC_TAG,
    responses(
        (status = 200, description = "OpenAPI document")
    ),
)]
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Endpoints documented on `ApiDoc`, sorted by path.
pub fn endpoints() -> Vec<String> {
    let doc = ApiDoc::openapi();

    doc.paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            let methods: [(&str, &Option<Operation>); 3] = [
                ("GET", &item.get),
                ("POST", &item.post),
                ("DELETE", &item.delete),
            ];

            methods
                .into_iter()
                .filter(|(_, operation)| operation.is_some())
                .map(move |(method, _)| format!("{method} {path}"))
        })
        .collect()
}
