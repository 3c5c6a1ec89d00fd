use serde::{Deserialize, Serialize};

use crate::entry::ResultEntry;

/// The text a user has typed, re-derived on every keystroke.
///
/// Normalization rules:
/// - `raw` keeps the text exactly as typed
/// - `text` is `raw` with leading and trailing whitespace removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    text: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let text = raw.trim().to_string();

        Self { raw, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True for an empty or whitespace-only query.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Which ranking pass produced the final order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankPass {
    /// Blank query: candidates kept in discovery order.
    Unscored,
    /// Strict ratio with the cutoff applied.
    Strict,
    /// Partial ratio over the unfiltered set, no cutoff.
    Fallback,
}

/// Why a provider contributed nothing to a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    ValidityPanicked,
    GenerationFailed(String),
    GenerationPanicked(String),
}

/// A provider failure isolated during one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderFault {
    pub provider: String,
    pub kind: FaultKind,
}

/// Metadata describing the outcome of one search pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub cutoff: u8,
    pub max_items: usize,

    pub providers_registered: usize,
    pub providers_applicable: usize,

    pub candidates_considered: usize,
    pub candidates_rejected: usize,
    pub results_returned: usize,
    pub excluded_by_limit: usize,

    pub pass: RankPass,
    pub faults: Vec<ProviderFault>,
}

/// The ranked, capped result list of a search pass.
///
/// Entries carry closures and opaque payloads, so only the metadata is
/// serializable.
pub struct SearchResult {
    pub entries: Vec<ResultEntry>,
    pub metadata: SearchMetadata,
}

impl SearchResult {
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.title()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchResult")
            .field("entries", &self.titles())
            .field("metadata", &self.metadata)
            .finish()
    }
}
