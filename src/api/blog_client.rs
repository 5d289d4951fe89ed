//! Async client for the blog-list REST endpoints
//!
//! Uses reqwest for HTTP. Every non-success status is turned into
//! `ApiError::Server` carrying the backend's `{ "error": ... }` text.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::ApiError;
use super::api_types::{Blog, BlogUpdate, Credentials, ErrorBody, NewBlog};
use crate::config::ServerConfig;
use crate::error::BloglistError;
use crate::session::Session;

const BLOGS_PATH: &str = "/api/blogs";
const LOGIN_PATH: &str = "/api/login";

#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(config: &ServerConfig) -> Result<Self, BloglistError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, BloglistError> {
        Ok(Self {
            client,
            base_url: validate_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_all(&self) -> Result<Vec<Blog>, ApiError> {
        let response = self.send(self.client.get(self.endpoint(BLOGS_PATH))).await?;
        decode(response).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let request = self
            .client
            .post(self.endpoint(LOGIN_PATH))
            .json(credentials);
        decode(self.send(request).await?).await
    }

    pub async fn create(&self, blog: &NewBlog, token: &str) -> Result<Blog, ApiError> {
        let request = self.client.post(self.endpoint(BLOGS_PATH)).json(blog);
        decode(self.send(authorized(request, Some(token))).await?).await
    }

    pub async fn update(
        &self,
        id: &str,
        blog: &BlogUpdate,
        token: Option<&str>,
    ) -> Result<Blog, ApiError> {
        let request = self.client.put(self.blog_endpoint(id)).json(blog);
        decode(self.send(authorized(request, token)).await?).await
    }

    pub async fn destroy(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.blog_endpoint(id));
        self.send(authorized(request, Some(token))).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn blog_endpoint(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, BLOGS_PATH, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header(AUTHORIZATION, format!("bearer {}", token)),
        None => request,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Text to show for a failed response: the backend's `error` field, or a
/// generic status message when the body does not carry one
pub(super) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}

/// Base URL without a trailing slash; only http and https are accepted
fn validate_base_url(base_url: &str) -> Result<String, BloglistError> {
    let invalid = |reason: String| BloglistError::InvalidServerUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(base_url.trim_end_matches('/').to_string()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

#[cfg(test)]
#[path = "blog_client_tests.rs"]
mod blog_client_tests;
