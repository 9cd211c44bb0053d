use crate::domain::model::Restaurant;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves the device's position to a US zip code. One result per request;
/// no retry.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_zip(&self) -> Result<String>;
}

#[async_trait]
impl LocationProvider for Box<dyn LocationProvider> {
    async fn current_zip(&self) -> Result<String> {
        (**self).current_zip().await
    }
}

/// Finds pizza restaurants near a zip code. One result per request; no
/// pagination.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn restaurants_near(&self, zip: &str) -> Result<Vec<Restaurant>>;
}

pub trait ConfigProvider: Send + Sync {
    fn location_endpoint(&self) -> &str;
    fn search_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
