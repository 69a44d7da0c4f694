//! HTTP client adapter over reqwest.
//!
//! One [`RequestSpec`] in, one [`ApiResponse`] out. No retries, no custom
//! timeouts, no pooling logic beyond reqwest defaults.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method as ReqwestMethod, Url};
use restcheck_domain::{ApiResponse, Method, RequestSpec};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// HTTP client issuing harness requests against the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn new(config: &HarnessConfig) -> HarnessResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("restcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HarnessError::Http {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Converts the harness method to a reqwest method.
    const fn to_reqwest_method(method: Method) -> ReqwestMethod {
        match method {
            Method::Get => ReqwestMethod::GET,
            Method::Post => ReqwestMethod::POST,
            Method::Put => ReqwestMethod::PUT,
            Method::Delete => ReqwestMethod::DELETE,
        }
    }

    /// Builds the absolute URL for a request specification.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidUrl`] when the base URL plus path
    /// does not parse.
    pub fn request_url(&self, spec: &RequestSpec) -> HarnessResult<Url> {
        let raw = format!("{}{}", self.base_url, spec.path_and_query());
        Url::parse(&raw).map_err(|e| HarnessError::InvalidUrl(format!("{e}: {raw}")))
    }

    /// Issues exactly one request and captures status plus body text.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Http`] when the call fails at the
    /// transport level; non-2xx statuses are responses, not errors.
    pub async fn execute(&self, spec: &RequestSpec) -> HarnessResult<ApiResponse> {
        let url = self.request_url(spec)?;
        let url_text = url.to_string();

        let mut builder = self
            .http
            .request(Self::to_reqwest_method(spec.method), url);
        if let Some(body) = spec.body_string() {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        tracing::debug!(method = %spec.method, url = %url_text, "sending request");

        let response = builder.send().await.map_err(|e| HarnessError::Http {
            url: url_text.clone(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| HarnessError::Http {
            url: url_text,
            message: format!("failed to read body: {e}"),
        })?;

        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(ApiResponse::new(status, body))
    }
}
