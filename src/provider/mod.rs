mod isolation;
pub mod provider;
pub mod registry;

pub use provider::{Provider, ProviderError};
pub use registry::{ProviderRegistry, RegisteredProvider, RegistryError};

pub(crate) use isolation::generate_isolated;
