//! Pricing abstractions

use super::error::PriceError;
use async_trait::async_trait;

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetches the current price for a currency name, returned verbatim as the API sends it.
    async fn fetch_price(&self, name: &str) -> Result<String, PriceError>;
}
