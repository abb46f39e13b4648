//! Currency name to tgju identifier mapping

use super::error::{PriceError, RegistryError};
use std::collections::BTreeMap;

/// Name of the UAE dirham as tgju.org publishes it. The trailing space is part of the name.
pub const AED: &str = "درهم امارات ";

/// Read-only mapping from display name to the identifier the API expects.
///
/// Names are matched exactly, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRegistry {
    entries: BTreeMap<String, String>,
}

impl CurrencyRegistry {
    pub fn new<I, K, V>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, id) in entries {
            let name = name.into();
            let id = id.into();
            if id.is_empty() {
                return Err(RegistryError::EmptyIdentifier { name });
            }
            map.insert(name, id);
        }
        Ok(Self { entries: map })
    }

    pub fn resolve(&self, name: &str) -> Result<&str, PriceError> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| PriceError::ConfigurationNotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self {
            entries: BTreeMap::from([(AED.to_string(), "137206".to_string())]),
        }
    }
}
