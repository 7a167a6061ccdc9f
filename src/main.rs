mod model;
mod server;

use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState::new(db));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
