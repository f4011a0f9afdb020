use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::header::HOST;
use serde_json::Value;
use tracing::debug;

use crate::models::{ActivityBoard, CommandReply, ReplyBody};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// The activities backend as the sign-up page sees it.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError>;

    /// `Err` only when the request never completed; any HTTP answer is a reply.
    async fn signup(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError>;

    /// Same contract as [`ActivitiesApi::signup`].
    async fn unregister(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpActivitiesApi {
    client: reqwest::Client,
    base_url: String,
    host_header: Option<String>,
}

impl HttpActivitiesApi {
    /// `timeout` bounds each request end to end, so a backend that accepts but
    /// never answers ends up as a transport error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            host_header: None,
        })
    }

    /// Route through a shared local ingress that picks the service by Host header.
    pub fn with_host_header(mut self, host: Option<String>) -> Self {
        self.host_header = host;
        self
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url.trim_end_matches('/'))
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);
        match &self.host_header {
            Some(host) => req.header(HOST, host.as_str()),
            None => req,
        }
    }

    async fn command(
        &self,
        method: reqwest::Method,
        activity: &str,
        email: &str,
    ) -> Result<CommandReply, ApiError> {
        let url = self.signup_url(activity, email);
        let resp = self
            .request(method, &url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        let body = match resp.json::<ReplyBody>().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!(%url, %status, "command reply body not parsable: {}", e);
                None
            }
        };
        Ok(CommandReply { status, body })
    }
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError> {
        let url = self.activities_url();
        let resp = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let body: Value = resp.json().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let Value::Object(map) = body else {
            return Err(ApiError::Decode {
                url,
                reason: "expected a JSON object keyed by activity name".to_string(),
            });
        };
        ActivityBoard::from_json_map(map).map_err(|e| ApiError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError> {
        self.command(reqwest::Method::POST, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<CommandReply, ApiError> {
        self.command(reqwest::Method::DELETE, activity, email).await
    }
}
