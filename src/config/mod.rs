mod app_config;
mod cloudinary_config;

pub use app_config::{
    AppConfig, CloudinaryConfig, CorsConfig, DatabaseConfig, MediaConfig, ServerConfig,
};
pub use cloudinary_config::*;
