//! Client for the Veo long-running video generation API.
//!
//! A generation job is submitted with `models/{model}:predictLongRunning`
//! and identified by the opaque operation name the service hands back.
//! The client re-queries that operation at a fixed interval until the
//! service reports `done`, then maps the terminal payload to a playable
//! URL or a classified failure. Nothing is cached between calls.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sreel_models::AspectRatio;

use crate::config::VeoConfig;
use crate::credentials::CredentialStore;
use crate::error::{classify_failure, VeoError, VeoResult};

/// Veo API client.
#[derive(Debug, Clone)]
pub struct VeoClient {
    config: VeoConfig,
    credentials: CredentialStore,
    client: Client,
}

/// Job submission request.
#[derive(Debug, Serialize)]
struct GenerateVideosRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Debug, Serialize)]
struct Instance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    number_of_videos: u32,
    resolution: String,
    aspect_ratio: String,
}

/// Long-running operation snapshot.
///
/// Replaced wholesale on every poll; the previous snapshot is discarded.
#[derive(Debug, Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<OperationError>,
    response: Option<OperationResponse>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVideoResponse {
    #[serde(default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    video: Option<VideoHandle>,
}

#[derive(Debug, Deserialize)]
struct VideoHandle {
    uri: Option<String>,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: OperationError,
}

impl VeoClient {
    /// Create a new Veo client.
    pub fn new(config: VeoConfig, credentials: CredentialStore) -> Self {
        Self {
            config,
            credentials,
            client: Client::new(),
        }
    }

    /// Generate one video for the given prompt and aspect ratio.
    ///
    /// Submits the job, then polls at `poll_interval` until the remote
    /// side reports a terminal state. There is no internal retry and no
    /// deadline; see [`VeoConfig`]. On success the returned URL already
    /// carries the `key` query parameter the storage endpoint requires.
    pub async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> VeoResult<String> {
        let key = self
            .credentials
            .get()
            .await
            .ok_or(VeoError::CredentialMissing)?;

        info!(%aspect_ratio, "Starting video generation for prompt: \"{}\"", prompt);

        let mut operation = self.submit(&key, prompt, aspect_ratio).await?;
        debug!(operation = %operation.name, "Generation operation created");

        while !operation.done {
            tokio::time::sleep(self.config.poll_interval).await;
            debug!(operation = %operation.name, "Polling video generation status");
            operation = self.get_operation(&key, &operation.name).await?;
        }

        if let Some(err) = operation.error {
            warn!(
                code = err.code,
                status = err.status.as_deref().unwrap_or("-"),
                "Video generation failed: {}",
                err.message
            );
            let kind = classify_failure(err.code, err.status.as_deref(), &err.message);
            return Err(VeoError::generation_failed(kind, err.message));
        }

        let uri = operation
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .and_then(|s| s.video)
            .and_then(|v| v.uri)
            .ok_or(VeoError::NoResultReturned)?;

        // The storage endpoint requires the API key to fetch the video
        let final_url = format!("{}&key={}", uri, key);
        info!("Video generated successfully");
        Ok(final_url)
    }

    /// Submit a generation job, returning the initial operation snapshot.
    async fn submit(
        &self,
        key: &str,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> VeoResult<Operation> {
        let url = format!(
            "{}/v1beta/models/{}:predictLongRunning",
            self.config.base_url, self.config.model
        );

        let request = GenerateVideosRequest {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Parameters {
                number_of_videos: 1,
                resolution: self.config.resolution.clone(),
                aspect_ratio: aspect_ratio.as_api_value().to_string(),
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await?;

        Self::parse_operation(response).await
    }

    /// Re-query a pending operation by name.
    async fn get_operation(&self, key: &str, name: &str) -> VeoResult<Operation> {
        let url = format!("{}/v1beta/{}", self.config.base_url, name);

        let response = self
            .client
            .get(&url)
            .query(&[("key", key)])
            .send()
            .await?;

        Self::parse_operation(response).await
    }

    /// Decode an operation snapshot, turning structured error bodies on
    /// non-2xx responses into classified failures.
    async fn parse_operation(response: reqwest::Response) -> VeoResult<Operation> {
        if response.status().is_success() {
            return Ok(response.json::<Operation>().await?);
        }

        let http_error = response.error_for_status_ref().err();
        if let Ok(body) = response.json::<GoogleErrorBody>().await {
            let kind =
                classify_failure(body.error.code, body.error.status.as_deref(), &body.error.message);
            return Err(VeoError::generation_failed(kind, body.error.message));
        }

        // Body was not the structured error shape; propagate as transport
        match http_error {
            Some(e) => Err(VeoError::Transport(e)),
            None => Err(VeoError::generation_failed(
                crate::error::FailureKind::Unknown,
                "Unexpected response from generation service",
            )),
        }
    }
}
