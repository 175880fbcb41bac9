use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{self, AppConfig, CorsConfig},
    database::{self, PgStore, Store},
    error::{AppError, Result},
    routes,
    services::MediaGateway,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub media: Arc<dyn MediaGateway>,
    pub media_folder: String,
    pub bcrypt_cost: u32,
}

/// Opens the database and media clients described by `config`.
pub async fn init_state(config: &AppConfig) -> Result<AppState> {
    let pool = database::create_pool(&config.database).await?;
    let media = config::load_cloudinary_client(&config.cloudinary)?;

    Ok(AppState {
        store: Arc::new(PgStore::new(pool)),
        media: Arc::new(media),
        media_folder: config.media.folder.clone(),
        bcrypt_cost: config.bcrypt_cost,
    })
}

pub fn build(config: &AppConfig, state: AppState) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(cors.allow_origin(allowed_origins))
}
