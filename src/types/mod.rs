pub mod identifiers;
pub mod search_bundle;

pub use identifiers::{ProviderId, ProviderIdError};
pub use search_bundle::{
    FaultKind, ProviderFault, Query, RankPass, SearchMetadata, SearchResult,
};
