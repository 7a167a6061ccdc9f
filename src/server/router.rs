use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath};

use crate::server::{
    controller::{
        doc::{openapi, sitemap},
        favorite::{
            add_favorite_person, add_favorite_planet, delete_favorite_person,
            delete_favorite_planet,
        },
        fallback, method_not_allowed,
        people::{get_all_people, get_person},
        planet::{get_all_planets, get_planet},
        user::{get_all_users, get_user_favorites},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap))
        .route("/openapi.json", get(openapi))
        .route("/people", get(get_all_people))
        .route("/people/{id}", get(get_person))
        .route("/planet", get(get_all_planets))
        .route("/planet/{id}", get(get_planet))
        .route("/users", get(get_all_users))
        .route("/users/{id}/favorites", get(get_user_favorites))
        .route(
            "/favorite/planet/{id}",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(add_favorite_person).delete(delete_favorite_person),
        )
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Router wrapped so trailing slashes are trimmed before route matching.
pub type App = NormalizePath<Router>;

/// Builds the complete application with state and CORS applied.
///
/// Every origin is allowed, matching the public read-mostly nature of the API.
/// `/people/` and `/people` reach the same handler.
pub fn app(state: AppState) -> App {
    NormalizePath::trim_trailing_slash(router().with_state(state).layer(CorsLayer::permissive()))
}
