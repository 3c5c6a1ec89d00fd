use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of a registered provider.
///
/// Derived from the provider's display name. Two providers with the same
/// trimmed name are the same provider as far as the registry is concerned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderIdError {
    #[error("Provider name must not be blank")]
    BlankName,
}

impl ProviderId {
    pub fn from_name(name: &str) -> Result<Self, ProviderIdError> {
        let normalized = name.trim();
        if normalized.is_empty() {
            return Err(ProviderIdError::BlankName);
        }

        Ok(ProviderId(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
