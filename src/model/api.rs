use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation message returned by mutating endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// Listing of every route exposed by the API, formatted as `"METHOD /path"`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub endpoints: Vec<String>,
}
