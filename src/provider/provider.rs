use thiserror::Error;

use crate::entry::ResultEntry;
use crate::types::Query;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Query rejected: {0}")]
    Rejected(String),
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A result-producing collaborator.
///
/// `is_valid` runs on every keystroke for every registered provider, so it
/// must be cheap and side-effect free. `generate` must not block: no I/O,
/// only parsing and in-memory computation.
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    /// Tie-break preference among candidates of equal similarity and base score.
    fn priority_weight(&self) -> f32 {
        1.0
    }

    fn is_valid(&self, query: &Query) -> bool;

    fn generate(&self, query: &Query) -> Result<Vec<ResultEntry>, ProviderError>;
}
