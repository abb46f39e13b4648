//! Error taxonomy for price lookups

use thiserror::Error;

/// The broad category a [`PriceError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The currency name is not present in the registry.
    ConfigurationNotFound,
    /// The request failed, returned a non-success status or an undecodable body.
    Api,
    /// The response was valid but did not contain the identifier or its price.
    ResultNotFound,
}

/// Every way a single price fetch can fail.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("currency '{name}' is not defined")]
    ConfigurationNotFound { name: String },

    #[error("API request failed")]
    Request(#[source] reqwest::Error),

    #[error("API request for {name} failed with status {status}: {body}")]
    Status {
        name: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse JSON response")]
    Parse(#[source] serde_json::Error),

    #[error("Item ID '{id}' for '{name}' not found")]
    ItemNotFound { id: String, name: String },

    #[error("Price ('p') not found for item ID '{id}'")]
    PriceMissing { id: String },
}

impl PriceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PriceError::ConfigurationNotFound { .. } => ErrorKind::ConfigurationNotFound,
            PriceError::Request(_) | PriceError::Status { .. } | PriceError::Parse(_) => {
                ErrorKind::Api
            }
            PriceError::ItemNotFound { .. } | PriceError::PriceMissing { .. } => {
                ErrorKind::ResultNotFound
            }
        }
    }
}

/// Rejected registry entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("currency '{name}' maps to an empty identifier")]
    EmptyIdentifier { name: String },
}
