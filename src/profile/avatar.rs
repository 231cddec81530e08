use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::error::AppResult;

pub const DEFAULT_AVATAR_TIMEOUT_SECS: u64 = 10;
pub const MAX_AVATAR_BYTES: u64 = 10 * 1024 * 1024;

/// Decides whether a URL points at a usable image.
#[async_trait]
pub trait ImageVerifier: Send + Sync {
    async fn verify(&self, url: &Url) -> bool;
}

#[async_trait]
impl<T: ImageVerifier + ?Sized> ImageVerifier for &T {
    async fn verify(&self, url: &Url) -> bool {
        (**self).verify(url).await
    }
}

/// Downloads the URL and requires the body to decode as a raster image.
#[derive(Debug, Clone)]
pub struct HttpImageVerifier {
    http: Client,
}

#[derive(Debug, Error)]
enum AvatarFault {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("body exceeds {MAX_AVATAR_BYTES} bytes")]
    TooLarge,
    #[error("body is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decoder task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl HttpImageVerifier {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http))
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    async fn fetch_image(&self, url: &Url) -> Result<(u32, u32), AvatarFault> {
        let mut response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AvatarFault::Status(status));
        }

        if response
            .content_length()
            .is_some_and(|length| length > MAX_AVATAR_BYTES)
        {
            return Err(AvatarFault::TooLarge);
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if (body.len() + chunk.len()) as u64 > MAX_AVATAR_BYTES {
                return Err(AvatarFault::TooLarge);
            }
            body.extend_from_slice(&chunk);
        }

        let decoded =
            tokio::task::spawn_blocking(move || image::load_from_memory(&body)).await??;
        Ok((decoded.width(), decoded.height()))
    }
}

#[async_trait]
impl ImageVerifier for HttpImageVerifier {
    async fn verify(&self, url: &Url) -> bool {
        match self.fetch_image(url).await {
            Ok((width, height)) => {
                tracing::debug!(%url, width, height, "avatar decoded");
                true
            }
            Err(err) => {
                tracing::debug!(%url, error = %err, "avatar check failed");
                false
            }
        }
    }
}
