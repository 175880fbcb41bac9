use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::{
    error::{AppError, Result},
    services::media_gateway::{MediaGateway, UploadedMedia},
};

const CLOUDINARY_API_URL: &str = "https://api.cloudinary.com/v1_1";

/// Signs request parameters the way the Cloudinary upload API expects:
/// `key=value` pairs sorted by key, joined with `&`, secret appended, SHA-1 hex.
pub fn generate_signature(api_secret: &str, params: &BTreeMap<&str, String>) -> String {
    let joined = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    pub fn new(http: reqwest::Client, cloud_name: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            http,
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{}", CLOUDINARY_API_URL, self.cloud_name, action)
    }

    fn signed_form(&self, mut params: BTreeMap<&str, String>) -> Vec<(String, String)> {
        params.insert("timestamp", chrono::Utc::now().timestamp().to_string());
        let signature = generate_signature(&self.api_secret, &params);

        let mut form: Vec<(String, String)> = params
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        form.push(("api_key".to_string(), self.api_key.clone()));
        form.push(("signature".to_string(), signature));
        form
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
        form: &[(String, String)],
    ) -> Result<T> {
        let response = self
            .http
            .post(self.endpoint(action))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                AppError::MediaError(format!("Cloudinary {} request failed: {}", action, e))
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());

            return Err(AppError::MediaError(format!(
                "Cloudinary {} failed with {}: {}",
                action, status, message
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| {
                AppError::MediaError(format!("Failed to parse Cloudinary response: {}", e))
            })
    }
}

#[async_trait]
impl MediaGateway for CloudinaryClient {
    async fn upload(&self, payload: &str, folder: &str) -> Result<UploadedMedia> {
        let mut params = BTreeMap::new();
        params.insert("folder", folder.to_string());

        // `file` is not part of the signature.
        let mut form = self.signed_form(params);
        form.push(("file".to_string(), payload.to_string()));

        let uploaded: UploadResponse = self.post("upload", &form).await?;

        tracing::info!("Uploaded image {} to {}", uploaded.public_id, uploaded.secure_url);

        Ok(UploadedMedia {
            url: uploaded.secure_url,
            external_id: uploaded.public_id,
        })
    }

    async fn delete(&self, external_id: &str) -> Result<()> {
        let mut params = BTreeMap::new();
        params.insert("public_id", external_id.to_string());

        let form = self.signed_form(params);
        let destroyed: DestroyResponse = self.post("destroy", &form).await?;

        if destroyed.result != "ok" {
            tracing::warn!(
                "Cloudinary destroy for {} returned {}",
                external_id,
                destroyed.result
            );
        } else {
            tracing::info!("Deleted image {} from Cloudinary", external_id);
        }

        Ok(())
    }
}
