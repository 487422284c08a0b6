//! Razorpay IFSC provider.
//!
//! Serves branch metadata from `GET https://ifsc.razorpay.com/<IFSC>`.
//! No authentication; unknown codes answer 404 with a plain-text body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::BankDataError;
use crate::models::BranchRecord;
use crate::normalize::{normalize_branch, CapabilityPolicy};
use crate::provider::BankDataProvider;

pub const DEFAULT_BASE_URL: &str = "https://ifsc.razorpay.com/";
const PROVIDER_ID: &str = "RAZORPAY";

/// Razorpay IFSC provider.
pub struct RazorpayProvider {
    client: Client,
    base_url: String,
    policy: CapabilityPolicy,
}

impl Default for RazorpayProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, CapabilityPolicy::default(), None)
    }
}

impl RazorpayProvider {
    /// Create a provider against `base_url`.
    ///
    /// Requests are never cut short unless `timeout` is given.
    pub fn new(
        base_url: impl Into<String>,
        policy: CapabilityPolicy,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            policy,
        }
    }

    pub fn policy(&self) -> CapabilityPolicy {
        self.policy
    }

    /// Code appended to the base URL as a single path segment.
    fn branch_url(&self, ifsc: &str) -> String {
        let encoded = urlencoding::encode(ifsc);
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, encoded)
        } else {
            format!("{}/{}", self.base_url, encoded)
        }
    }

    async fn fetch(&self, ifsc: &str) -> Result<String, BankDataError> {
        let url = self.branch_url(ifsc);
        debug!("Razorpay request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                BankDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                BankDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(BankDataError::BranchNotFound(ifsc.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BankDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        response
            .text()
            .await
            .map_err(|e| BankDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }
}

/// Parse a response body into a JSON object.
fn parse_body(text: &str) -> Result<Map<String, Value>, BankDataError> {
    let value: Value = serde_json::from_str(text).map_err(|e| BankDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: format!("Failed to parse branch response: {}", e),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(BankDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl BankDataProvider for RazorpayProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_branch(&self, ifsc: &str) -> Result<BranchRecord, BankDataError> {
        let text = self.fetch(ifsc).await?;
        let body = parse_body(&text)?;
        Ok(normalize_branch(&body, self.policy))
    }
}
