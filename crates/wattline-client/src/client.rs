//! HTTP client for the prediction service.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, PredictError};
use wattline_types::{EnergyForecast, HealthReport, MachineList, PredictionRequest};

/// HTTP client for the prediction service.
///
/// Each operation issues exactly one request. Failures are terminal for
/// that attempt: there are no retries and no backoff.
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: Client,
    config: ClientConfig,
}

impl PredictClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client with the base URL resolved from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::from_env())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the full URL for an endpoint path, tolerating trailing
    /// slashes on the configured base URL.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Requests an energy forecast for the given machine and time fields.
    ///
    /// Sends `POST /predict` with the JSON-encoded request body. A
    /// non-success status is reported without reading the body.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Unreachable`] if no response arrived,
    /// [`PredictError::Status`] on a non-success status, and
    /// [`PredictError::Body`] if the success body could not be decoded.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<EnergyForecast, PredictError> {
        let url = self.endpoint("predict");
        tracing::debug!(%url, machine = request.machine.id(), hour = request.hour, day = request.day, "sending prediction request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| {
                tracing::warn!(%url, error = %source, "prediction service unreachable");
                PredictError::Unreachable {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "prediction call failed");
            return Err(PredictError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| PredictError::Body { url, source })
    }

    /// Queries the service health endpoint (`GET /health`).
    ///
    /// # Errors
    ///
    /// Returns a [`PredictError`] with the same taxonomy as
    /// [`Self::predict`].
    pub async fn health(&self) -> Result<HealthReport, PredictError> {
        self.get_json("health").await
    }

    /// Fetches the machines the service knows about (`GET /machines`).
    ///
    /// # Errors
    ///
    /// Returns a [`PredictError`] with the same taxonomy as
    /// [`Self::predict`].
    pub async fn machines(&self) -> Result<MachineList, PredictError> {
        self.get_json("machines").await
    }

    /// GETs an endpoint and decodes its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "sending request");

        let response = self.client.get(&url).send().await.map_err(|source| {
            tracing::warn!(%url, error = %source, "prediction service unreachable");
            PredictError::Unreachable {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "request failed");
            return Err(PredictError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| PredictError::Body { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let client = PredictClient::with_defaults().unwrap();
        assert_eq!(client.endpoint("predict"), "http://localhost:8000/predict");
        assert_eq!(client.endpoint("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://example.com:9000/");
        let client = PredictClient::new(config).unwrap();
        assert_eq!(client.endpoint("predict"), "http://example.com:9000/predict");
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = PredictClient::with_defaults();
        assert!(client.is_ok());
    }
}
