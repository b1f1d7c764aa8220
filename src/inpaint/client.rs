//! Thin HTTP client for the upstream inpainting service.
//!
//! - `inpaint` posts `{originalImage, productImage, maskImage}` as JSON and
//!   returns the `output` reference from the response.
use reqwest::Client;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};
use crate::inpaint::types::{extract_output, InpaintRequest};

#[derive(Clone)]
pub struct InpaintClient {
    client: Client,
    config: UpstreamConfig,
}

impl InpaintClient {
    pub fn new(config: UpstreamConfig) -> Self {
        InpaintClient { client: Client::new(), config }
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Send one inpainting request upstream.
    ///
    /// The bearer header is only attached when a credential is configured.
    /// Non-2xx responses become [`AppError::Upstream`] with the body text;
    /// a 2xx body without a non-empty `output` string is [`AppError::NoOutput`].
    pub async fn inpaint(&self, request: &InpaintRequest) -> AppResult<String> {
        tracing::info!("Sending inpainting request to {}", self.config.url);
        tracing::debug!(
            original_len = request.original_image.len(),
            product_len = request.product_image.as_ref().map(|p| p.len()).unwrap_or(0),
            mask_len = request.mask_image.len(),
            "Inpainting payload"
        );

        let mut builder = self.client.post(&self.config.url).json(request);
        if let Some(key) = &self.config.credential {
            builder = builder.bearer_auth(key);
        }
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }

        // reqwest's Display embeds the request URL; callers only get the cause
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if response.status().is_success() {
            let data: Value = response
                .json()
                .await
                .map_err(|e| AppError::HttpClient(e.without_url()))?;
            let output = extract_output(&data)?;
            tracing::info!("Inpainting succeeded: {}", output);
            Ok(output)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            Err(AppError::Upstream { status, body })
        }
    }
}
