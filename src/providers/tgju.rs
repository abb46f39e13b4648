use crate::core::{CurrencyRegistry, PriceError, PriceProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Widget endpoint; the identifier is appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://api.tgju.org/v1/widget/tmp?keys=";

#[derive(Debug, Deserialize)]
struct TgjuResponse {
    response: Option<TgjuPayload>,
}

#[derive(Debug, Deserialize)]
struct TgjuPayload {
    indicators: Option<Vec<IndicatorRecord>>,
}

#[derive(Debug, Deserialize)]
struct IndicatorRecord {
    item_id: Option<Value>,
    p: Option<Value>,
}

impl TgjuResponse {
    fn indicators(&self) -> &[IndicatorRecord] {
        self.response
            .as_ref()
            .and_then(|r| r.indicators.as_deref())
            .unwrap_or_default()
    }
}

impl IndicatorRecord {
    // The API sends item_id as a number, older payloads as a string.
    fn has_id(&self, id: &str) -> bool {
        match &self.item_id {
            Some(Value::String(s)) => s == id,
            Some(Value::Number(n)) => n.to_string() == id,
            _ => false,
        }
    }

    fn price(&self) -> Option<&str> {
        self.p.as_ref().and_then(Value::as_str)
    }
}

fn find_price(indicators: &[IndicatorRecord], id: &str, name: &str) -> Result<String, PriceError> {
    let record = indicators
        .iter()
        .find(|record| record.has_id(id))
        .ok_or_else(|| PriceError::ItemNotFound {
            id: id.to_string(),
            name: name.to_string(),
        })?;

    record
        .price()
        .map(str::to_string)
        .ok_or_else(|| PriceError::PriceMissing { id: id.to_string() })
}

#[instrument(name = "TgjuPriceFetch", skip_all, fields(currency = %name))]
async fn fetch_with_client(
    client: &reqwest::Client,
    name: &str,
    registry: &CurrencyRegistry,
    base_url: &str,
) -> Result<String, PriceError> {
    let id = registry.resolve(name)?;

    let url = format!("{base_url}{id}");
    debug!("Requesting price data from {}", url);

    let response = client.get(&url).send().await.map_err(PriceError::Request)?;
    let status = response.status();
    let body = response.bytes().await.map_err(PriceError::Request)?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "Price request rejected");
        return Err(PriceError::Status {
            name: name.to_string(),
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    // Strict UTF-8: a mangled body is a parse failure, never a replaced price.
    let data: TgjuResponse = serde_json::from_slice(&body).map_err(|e| {
        error!(
            error = ?e,
            response = %String::from_utf8_lossy(&body),
            "Failed to parse price response"
        );
        PriceError::Parse(e)
    })?;

    let price = find_price(data.indicators(), id, name)?;
    debug!(%price, "Fetched price for item {}", id);
    Ok(price)
}

/// Fetches the price for `name` from `{base_url}{identifier}` using a one-off client.
pub async fn fetch_price(
    name: &str,
    registry: &CurrencyRegistry,
    base_url: &str,
) -> Result<String, PriceError> {
    fetch_with_client(&reqwest::Client::new(), name, registry, base_url).await
}

pub struct TgjuProvider {
    base_url: String,
    registry: CurrencyRegistry,
    client: reqwest::Client,
}

impl TgjuProvider {
    pub fn new(base_url: &str, registry: CurrencyRegistry) -> Self {
        TgjuProvider {
            base_url: base_url.to_string(),
            registry,
            client: reqwest::Client::new(),
        }
    }

    /// Bounds every request, including reading the body, by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> reqwest::Result<Self> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }
}

impl Default for TgjuProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, CurrencyRegistry::default())
    }
}

#[async_trait]
impl PriceProvider for TgjuProvider {
    async fn fetch_price(&self, name: &str) -> Result<String, PriceError> {
        fetch_with_client(&self.client, name, &self.registry, &self.base_url).await
    }
}
