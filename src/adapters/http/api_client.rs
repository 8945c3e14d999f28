//! Generic CRUD client over the platform endpoint convention.
//!
//! Entities live under `/{entity}` and `/{entity}/{id}`. Credentials are an
//! explicit [`AuthContext`] parameter on every call; there is no ambient
//! token state.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::ports::ApiError;

/// Per-call credentials.
#[derive(Clone)]
pub struct AuthContext {
    bearer: Option<SecretString>,
}

impl AuthContext {
    /// No credentials - public endpoints only.
    pub fn anonymous() -> Self {
        Self { bearer: None }
    }

    /// Bearer-token credentials from the auth provider.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer: Some(SecretString::new(token.into())),
        }
    }

    fn header_value(&self) -> Option<String> {
        self.bearer
            .as_ref()
            .map(|t| format!("Bearer {}", t.expose_secret()))
    }
}

/// REST client for the platform API.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lists entities, optionally filtered by query parameters.
    pub async fn find<T: DeserializeOwned>(
        &self,
        auth: &AuthContext,
        entity: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let request = self.http.get(self.url(entity)).query(query);
        let response = self.execute(auth, request, "GET", entity).await?;
        Self::decode(response).await
    }

    /// Fetches one entity by id.
    pub async fn get<T: DeserializeOwned>(
        &self,
        auth: &AuthContext,
        entity: &str,
        id: &str,
    ) -> Result<T, ApiError> {
        let path = format!("{}/{}", entity, id);
        let request = self.http.get(self.url(&path));
        let response = self.execute(auth, request, "GET", &path).await?;
        Self::decode(response).await
    }

    /// Creates an entity.
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        auth: &AuthContext,
        entity: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.http.post(self.url(entity)).json(body);
        let response = self.execute(auth, request, "POST", entity).await?;
        Self::decode(response).await
    }

    /// Updates an entity by id.
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        auth: &AuthContext,
        entity: &str,
        id: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let path = format!("{}/{}", entity, id);
        let request = self.http.put(self.url(&path)).json(body);
        let response = self.execute(auth, request, "PUT", &path).await?;
        Self::decode(response).await
    }

    /// Deletes an entity by id.
    pub async fn delete(&self, auth: &AuthContext, entity: &str, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", entity, id);
        let request = self.http.delete(self.url(&path));
        self.execute(auth, request, "DELETE", &path).await?;
        Ok(())
    }

    /// POSTs a body to an arbitrary path, returning the raw JSON value.
    /// Used for non-CRUD endpoints like plan changes and payment creation.
    pub async fn post_json<B: Serialize>(
        &self,
        auth: &AuthContext,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request = self.http.post(self.url(path)).json(body);
        let response = self.execute(auth, request, "POST", path).await?;
        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        auth: &AuthContext,
        mut request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<Response, ApiError> {
        if let Some(header) = auth.header_value() {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method, path, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(method, path, status = status.as_u16(), "non-success response");
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        tracing::debug!(method, path, status = status.as_u16(), "request completed");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::malformed(e.to_string()))
    }
}
