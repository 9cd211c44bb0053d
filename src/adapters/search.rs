use crate::domain::model::Restaurant;
use crate::domain::ports::SearchService;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
}

/// Queries the restaurant search endpoint with `?zip=<zip>`. A response with
/// zero restaurants is treated as a search failure at this boundary; the
/// list model itself is fine with an empty input, but the user should see
/// the "no pizza near you" notice rather than a blank table.
pub struct HttpSearchService {
    client: Client,
    endpoint: String,
}

impl HttpSearchService {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn restaurants_near(&self, zip: &str) -> Result<Vec<Restaurant>> {
        tracing::debug!("Searching {} for zip {}", self.endpoint, zip);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("zip", zip)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);
        if !status.is_success() {
            return Err(FinderError::SearchError {
                message: format!("search service returned HTTP {}", status),
            });
        }

        let payload: SearchPayload = response.json().await?;
        if payload.restaurants.is_empty() {
            return Err(FinderError::SearchError {
                message: format!("no restaurants found near {}", zip),
            });
        }

        Ok(payload.restaurants)
    }
}
