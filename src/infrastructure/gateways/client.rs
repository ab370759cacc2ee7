// src/infrastructure/gateways/client.rs
use super::map_reqwest;
use crate::application::{ApplicationResult, dto::ServiceEnvelope, error::ApplicationError};
use reqwest::{Method, Response};
use serde::{Serialize, de::DeserializeOwned};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the pooled client shared by every gateway.
///
/// No request timeout is configured; a call waits for the backend to answer.
pub fn build_http_client() -> ApplicationResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| ApplicationError::infrastructure(format!("http client: {err}")))
}

/// One backend service reached under a base URL.
#[derive(Clone, Debug)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApplicationResult<ServiceEnvelope<T>> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApplicationResult<ServiceEnvelope<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApplicationResult<ServiceEnvelope<T>> {
        self.send::<(), T>(Method::DELETE, path, None).await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApplicationResult<ServiceEnvelope<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "calling backend service");
        let response = request.send().await.map_err(map_reqwest)?;
        read_envelope(response).await
    }
}

/// Decode the envelope regardless of HTTP status: the services answer
/// failures with 4xx plus a JSON envelope, and the envelope is what counts.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> ApplicationResult<ServiceEnvelope<T>> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest)?;
    serde_json::from_slice(&body).map_err(|err| {
        ApplicationError::malformed(format!("HTTP {status}: unreadable envelope: {err}"))
    })
}
