//! Core business logic abstractions

pub mod config;
pub mod error;
pub mod log;
pub mod price;
pub mod registry;

// Re-export main types for cleaner imports
pub use error::{ErrorKind, PriceError, RegistryError};
pub use price::PriceProvider;
pub use registry::CurrencyRegistry;
