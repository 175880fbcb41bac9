pub mod cloudinary_service;
pub mod media_gateway;

pub use cloudinary_service::CloudinaryClient;
pub use media_gateway::{MediaGateway, UploadedMedia};
