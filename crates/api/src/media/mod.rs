//! Media Relay: uploads admin-submitted images to the hosted media service
//! (Cloudinary REST API) and best-effort deletes replaced or removed assets.
//!
//! Every mutation on an image-bearing resource goes through this client:
//! create uploads before the insert, update uploads the new asset before
//! pointing the record at it, delete tears the remote asset down before the
//! row is removed. Upload failures fail the whole operation; delete
//! failures are logged and swallowed so a cleanup problem never blocks a
//! database mutation the admin asked for.

use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Media host credentials, loaded once at startup and passed into
/// [`MediaStore::new`].
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl MediaConfig {
    /// Load media host credentials from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`, or
    /// `CLOUDINARY_API_SECRET` is missing.
    pub fn from_env() -> Self {
        Self {
            cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
                .expect("CLOUDINARY_CLOUD_NAME must be set in the environment"),
            api_key: std::env::var("CLOUDINARY_API_KEY")
                .expect("CLOUDINARY_API_KEY must be set in the environment"),
            api_secret: std::env::var("CLOUDINARY_API_SECRET")
                .expect("CLOUDINARY_API_SECRET must be set in the environment"),
        }
    }
}

/// Errors from the media host layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host returned a non-2xx status code.
    #[error("media host error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Successful upload response; only the stable URL is consumed.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// HTTP client for the hosted media service.
pub struct MediaStore {
    client: reqwest::Client,
    config: MediaConfig,
    api_base: String,
}

impl MediaStore {
    /// Create a new client from explicit credentials.
    pub fn new(config: MediaConfig) -> Self {
        let api_base = format!("https://api.cloudinary.com/v1_1/{}", config.cloud_name);
        Self {
            client: reqwest::Client::new(),
            config,
            api_base,
        }
    }

    /// Upload an in-memory image under the given folder, returning the
    /// stable secure URL.
    ///
    /// Sends a signed `POST {api_base}/image/upload` multipart request. Any
    /// transport or remote failure fails the caller's whole operation.
    pub async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<String, MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_request(
            &format!("folder={folder}&timestamp={timestamp}"),
            &self.config.api_secret,
        );

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name("upload"),
            )
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", folder.to_string())
            .text("signature", signature);

        let response = self
            .client
            .post(format!("{}/image/upload", self.api_base))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Api { status, body });
        }

        let upload: UploadResponse = response.json().await?;
        tracing::debug!(folder, url = %upload.secure_url, "Image uploaded to media host");
        Ok(upload.secure_url)
    }

    /// Upload a replacement image and retire the old asset.
    ///
    /// Returns the new URL when bytes are supplied, `None` otherwise. The
    /// upload happens first so a failed upload leaves the record and its
    /// current asset intact; the old asset's delete is best-effort.
    pub async fn replace(
        &self,
        old_url: &str,
        bytes: Option<Vec<u8>>,
        folder: &str,
    ) -> Result<Option<String>, MediaError> {
        let Some(bytes) = bytes else {
            return Ok(None);
        };
        let new_url = self.upload(bytes, folder).await?;
        self.delete(old_url, folder).await;
        Ok(Some(new_url))
    }

    /// Best-effort delete of a previously uploaded asset, identified by the
    /// URL stored on the record.
    ///
    /// Failures (including an underivable public id) are logged and
    /// swallowed; callers never observe them.
    pub async fn delete(&self, url: &str, folder: &str) {
        let Some(public_id) = public_id_from_url(url, folder) else {
            tracing::warn!(url, "Could not derive media public id, skipping delete");
            return;
        };

        if let Err(err) = self.destroy(&public_id).await {
            tracing::warn!(url, %public_id, error = %err, "Failed to delete media asset");
        }
    }

    /// Issue a signed `destroy` call for the given public id.
    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = sign_request(
            &format!("public_id={public_id}&timestamp={timestamp}"),
            &self.config.api_secret,
        );

        let form = reqwest::multipart::Form::new()
            .text("public_id", public_id.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature);

        let response = self
            .client
            .post(format!("{}/image/destroy", self.api_base))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MediaError::Api { status, body });
        }

        Ok(())
    }
}

/// Compute the hex SHA-256 request signature over the canonical parameter
/// string plus the API secret, per the media host's signing scheme.
fn sign_request(params: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(params.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Derive the remote public id (`folder/name`) from a delivery URL.
///
/// Takes the trailing path segment minus its first extension. A query
/// string is stripped first; our own upload URLs never carry one, but a
/// hand-edited record should not make delete target a garbage id.
/// Multi-dot filenames still truncate at the first dot.
fn public_id_from_url(url: &str, folder: &str) -> Option<String> {
    let path = url.split('?').next().unwrap_or(url);
    let segment = path.rsplit('/').next()?;
    let name = segment.split('.').next()?;
    if name.is_empty() {
        return None;
    }
    Some(format!("{folder}/{name}"))
}
