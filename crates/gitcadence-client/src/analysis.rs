//! Analysis backend connector
//!
//! One connector instance owns a pooled HTTP client and the backend base URL.
//! `analyze_repository` is the only call whose caller needs to distinguish
//! failure reasons; `check_health` and `service_info` are probes whose only
//! useful signal is a boolean/presence, so they degrade to a safe default.

use crate::{
    ClientError, Result,
    client::{HttpClientConfig, create_client},
};
use gitcadence_core::{AnalysisRequest, AnalysisResult, ApiResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Connector configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis backend (e.g. `http://localhost:8080/api`)
    pub base_url: String,

    /// HTTP client configuration
    pub client_config: HttpClientConfig,
}

impl ClientConfig {
    /// Create a configuration for the given backend base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_config: HttpClientConfig::default(),
        }
    }

    /// Override the HTTP client configuration
    pub fn with_client_config(mut self, client_config: HttpClientConfig) -> Self {
        self.client_config = client_config;
        self
    }
}

/// Client for the remote analysis backend
pub struct AnalysisClient {
    config: ClientConfig,
    client: Client,
}

impl AnalysisClient {
    /// Create a new connector
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = create_client(&config.client_config)?;
        Ok(Self { config, client })
    }

    /// Submit a repository for analysis and wait for the result.
    ///
    /// Suspends until the backend responds. No retries, no caching;
    /// overlapping calls are independent in-flight requests and a superseding
    /// call does not cancel a prior one.
    ///
    /// # Errors
    /// - `ClientError::Transport` if the call itself fails or comes back with
    ///   a non-success HTTP status (the message includes the status code)
    /// - `ClientError::Application` if the envelope's `code != 200`; the
    ///   message is the envelope's `message`, or "Analysis failed" when empty
    pub async fn analyze_repository(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        debug!("Submitting analysis request for {}", request.git_url);

        let result = self.send_analyze(request).await;
        if let Err(e) = &result {
            error!("Analysis failed for {}: {}", request.git_url, e);
        }
        result
    }

    async fn send_analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let response = self
            .client
            .post(format!("{}/analyze", self.config.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Transport(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )));
        }

        let envelope: ApiResponse<AnalysisResult> = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("Invalid response body: {}", e)))?;

        if !envelope.is_success() {
            return Err(ClientError::Application(fallback_if_empty(
                envelope.message,
            )));
        }

        // A success envelope without a payload is a contract violation the
        // caller can only treat as a failed analysis.
        envelope
            .data
            .ok_or_else(|| ClientError::Application("Analysis failed".to_string()))
    }

    /// Best-effort health probe.
    ///
    /// Never errors: any transport or application failure is reported as
    /// `false`. Success is envelope `code == 200`; the payload body is
    /// ignored.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/analyze/health", self.config.base_url);
        // Only the envelope code matters; the payload body is ignored.
        match self.fetch_envelope::<serde_json::Value>(&url).await {
            Ok(envelope) => envelope.is_success(),
            Err(e) => {
                warn!("Health check failed: {}", e);
                false
            }
        }
    }

    /// Best-effort service metadata probe.
    ///
    /// Never errors: any failure yields `None`; on success the envelope's
    /// `data` is returned as-is.
    pub async fn service_info(&self) -> Option<serde_json::Value> {
        let url = format!("{}/analyze/info", self.config.base_url);
        match self.fetch_envelope::<serde_json::Value>(&url).await {
            Ok(envelope) => envelope.data,
            Err(e) => {
                warn!("Failed to get service info: {}", e);
                None
            }
        }
    }

    async fn fetch_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<ApiResponse<T>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("Invalid response body: {}", e)))
    }
}

fn fallback_if_empty(message: String) -> String {
    if message.is_empty() {
        "Analysis failed".to_string()
    } else {
        message
    }
}
