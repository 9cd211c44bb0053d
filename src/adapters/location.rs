use crate::domain::ports::LocationProvider;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Geolocation payload. Providers disagree on the field name for the postal
/// code, so common spellings are accepted.
#[derive(Debug, Deserialize)]
struct LocatePayload {
    #[serde(alias = "zip", alias = "postal")]
    zip_code: Option<String>,
}

/// Resolves the device position through an IP-geolocation endpoint. Single
/// attempt; any failure is reported as-is with no retry.
pub struct HttpLocationProvider {
    client: Client,
    endpoint: String,
}

impl HttpLocationProvider {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl LocationProvider for HttpLocationProvider {
    async fn current_zip(&self) -> Result<String> {
        tracing::debug!("Requesting location from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Location response status: {}", status);
        if !status.is_success() {
            return Err(FinderError::LocationError {
                message: format!("location service returned HTTP {}", status),
            });
        }

        let payload: LocatePayload = response.json().await?;
        match payload.zip_code {
            Some(zip) if !zip.trim().is_empty() => Ok(zip.trim().to_string()),
            _ => Err(FinderError::LocationError {
                message: "location response did not include a zip code".to_string(),
            }),
        }
    }
}

/// Skips geolocation entirely and answers with a user-supplied zip code.
pub struct FixedLocation {
    zip: String,
}

impl FixedLocation {
    pub fn new(zip: String) -> Self {
        Self { zip }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_zip(&self) -> Result<String> {
        Ok(self.zip.clone())
    }
}
