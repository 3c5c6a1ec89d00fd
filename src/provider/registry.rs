use thiserror::Error;
use tracing::{debug, warn};

use super::isolation::check_validity;
use super::provider::Provider;
use crate::types::{ProviderFault, ProviderId, ProviderIdError, Query};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Provider already registered: {0}")]
    DuplicateProvider(String),
    #[error("Invalid provider name: {0}")]
    InvalidName(#[from] ProviderIdError),
}

pub struct RegisteredProvider {
    id: ProviderId,
    weight: f32,
    provider: Box<dyn Provider>,
}

impl RegisteredProvider {
    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    /// The declared weight, or 1.0 if the declared one was not a positive number.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }
}

/// Ordered, append-only set of providers.
///
/// Constructed once at start-up and passed by reference to whoever searches.
/// Registration order is the final tie-break order of every ranking.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<RegisteredProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider. Registering the same name twice is rejected.
    pub fn register<P>(&mut self, provider: P) -> Result<ProviderId, RegistryError>
    where
        P: Provider + 'static,
    {
        let id = ProviderId::from_name(provider.name())?;

        if self.providers.iter().any(|registered| registered.id == id) {
            return Err(RegistryError::DuplicateProvider(id.as_str().to_string()));
        }

        let declared = provider.priority_weight();
        let weight = if declared.is_finite() && declared > 0.0 {
            declared
        } else {
            warn!(provider = %id, declared, "non-positive priority weight, using 1.0");
            1.0
        };

        debug!(provider = %id, weight, position = self.providers.len(), "provider registered");
        self.providers.push(RegisteredProvider {
            id: id.clone(),
            weight,
            provider: Box::new(provider),
        });

        Ok(id)
    }

    /// Providers whose validity predicate accepts `query`, in registration order.
    pub fn applicable_providers(&self, query: &Query) -> Vec<&RegisteredProvider> {
        self.partition_applicable(query).0
    }

    /// Like `applicable_providers`, also returning the predicates that panicked.
    pub(crate) fn partition_applicable(
        &self,
        query: &Query,
    ) -> (Vec<&RegisteredProvider>, Vec<ProviderFault>) {
        let mut applicable = Vec::new();
        let mut faults = Vec::new();

        for registered in &self.providers {
            match check_validity(registered.provider(), query) {
                Ok(true) => applicable.push(registered),
                Ok(false) => {}
                Err(fault) => faults.push(fault),
            }
        }

        (applicable, faults)
    }

    pub fn weight(&self, id: &ProviderId) -> Option<f32> {
        self.get(id).map(RegisteredProvider::weight)
    }

    pub fn get(&self, id: &ProviderId) -> Option<&RegisteredProvider> {
        self.providers.iter().find(|registered| &registered.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredProvider> {
        self.providers.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|registered| registered.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
