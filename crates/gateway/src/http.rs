//! HTTP implementation of the record gateway using [`reqwest`].
//!
//! Wraps the fishing-log REST API (fetch, list, create, update, delete).
//! Every call attaches the current session token as a bearer credential;
//! a missing token fails locally with
//! [`GatewayError::Unauthenticated`] instead of reaching the network.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use creel_core::draft::LogPayload;
use creel_core::log::FishingLog;
use creel_core::types::LogId;

use crate::error::GatewayError;
use crate::gateway::{RecordGateway, TokenProvider};

/// Entity name used in not-found errors.
const ENTITY: &str = "FishingLog";

/// HTTP client for the fishing-log API.
pub struct HttpRecordGateway {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpRecordGateway {
    /// Create a new gateway for the API at `base_url`.
    ///
    /// * `base_url` - Base HTTP URL without a trailing slash, e.g.
    ///   `http://localhost:8000/api`.
    /// * `tokens` - Source of the session's bearer token.
    pub fn new(base_url: String, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            tokens,
        }
    }

    /// Create a gateway reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling with other API consumers).
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            client,
            base_url,
            tokens,
        }
    }

    // ---- private helpers ----

    /// The `Authorization` header value for the current session.
    ///
    /// Fails with [`GatewayError::Unauthenticated`] when no token is
    /// available, so an unauthenticated call never leaves the client.
    fn authorization(&self) -> Result<String, GatewayError> {
        match self.tokens.bearer_token() {
            Some(token) => Ok(format!("Bearer {token}")),
            None => Err(GatewayError::Unauthenticated(
                "no session token available".to_string(),
            )),
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success; otherwise maps the status into the
    /// gateway error taxonomy (401/403 unauthenticated, 400/422
    /// rejected payload, anything else [`GatewayError::Api`]).
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GatewayError::Unauthenticated(body)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                GatewayError::Rejected {
                    status: status.as_u16(),
                    message: body,
                }
            }
            _ => GatewayError::Api {
                status: status.as_u16(),
                body,
            },
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), GatewayError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordGateway for HttpRecordGateway {
    /// Sends a `GET /fishing_logs/get/{id}` request. A 404 is the
    /// not-found outcome, not an error.
    async fn fetch_log(&self, id: LogId) -> Result<Option<FishingLog>, GatewayError> {
        let authorization = self.authorization()?;
        tracing::debug!(id, "fetching fishing log");

        let response = self
            .client
            .get(format!("{}/fishing_logs/get/{id}", self.base_url))
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let log = Self::parse_response(response).await?;
        Ok(Some(log))
    }

    /// Sends a `GET /fishing_logs` request for the session user's logs.
    async fn list_logs(&self) -> Result<Vec<FishingLog>, GatewayError> {
        let authorization = self.authorization()?;
        tracing::debug!("listing fishing logs");

        let response = self
            .client
            .get(format!("{}/fishing_logs", self.base_url))
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Sends a `POST /fishing_logs` request with the draft payload and
    /// returns the stored record with its server-assigned id.
    async fn create_log(&self, payload: &LogPayload) -> Result<FishingLog, GatewayError> {
        let authorization = self.authorization()?;
        tracing::debug!(species = %payload.species, "creating fishing log");

        let response = self
            .client
            .post(format!("{}/fishing_logs", self.base_url))
            .header(AUTHORIZATION, authorization)
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Sends a `PATCH /fishing_logs/{id}` request with the full draft
    /// payload.
    async fn update_log(
        &self,
        id: LogId,
        payload: &LogPayload,
    ) -> Result<FishingLog, GatewayError> {
        let authorization = self.authorization()?;
        tracing::debug!(id, "updating fishing log");

        let response = self
            .client
            .patch(format!("{}/fishing_logs/{id}", self.base_url))
            .header(AUTHORIZATION, authorization)
            .json(payload)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { entity: ENTITY, id });
        }
        Self::parse_response(response).await
    }

    /// Sends a `DELETE /fishing_logs/{id}` request.
    async fn delete_log(&self, id: LogId) -> Result<(), GatewayError> {
        let authorization = self.authorization()?;
        tracing::debug!(id, "deleting fishing log");

        let response = self
            .client
            .delete(format!("{}/fishing_logs/{id}", self.base_url))
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { entity: ENTITY, id });
        }
        Self::check_status(response).await
    }
}
