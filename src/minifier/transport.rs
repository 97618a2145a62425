//! Blocking request/response capability used by the minifier

use anyhow::{Context, Result};
use reqwest::blocking::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one form-encoded POST and blocks until the whole body is read.
pub trait Transport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<TransportResponse>;
}

/// `Transport` backed by reqwest's blocking client. No retries; timeouts are
/// the client's defaults.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("extbuild/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .with_context(|| format!("failed to reach {}", url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .with_context(|| format!("failed to read response from {}", url))?;

        Ok(TransportResponse { status, body })
    }
}
