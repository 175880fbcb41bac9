use crate::{
    config::CloudinaryConfig,
    error::{AppError, Result},
    services::cloudinary_service::CloudinaryClient,
};

pub fn load_cloudinary_client(config: &CloudinaryConfig) -> Result<CloudinaryClient> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

    let client = CloudinaryClient::new(
        http,
        &config.cloud_name,
        &config.api_key,
        &config.api_secret,
    );

    tracing::info!("Cloudinary client initialized for cloud {}", config.cloud_name);

    Ok(client)
}
