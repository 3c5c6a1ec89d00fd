use crate::config::{PaletteSettings, ScoringConfig};
use crate::entry::ResultEntry;
use crate::selection::{apply_limit, PartialRatio, Ranker, StrictRatio};
use crate::types::Query;

/// The closed value set of one command parameter, ranked in place.
///
/// Same ranker as the cross-provider search, scoped to one provider's
/// pre-generated candidates.
pub struct InlineValues {
    values: Vec<ResultEntry>,
    config: ScoringConfig,
}

impl InlineValues {
    pub fn new(values: Vec<ResultEntry>) -> Self {
        Self::with_config(values, ScoringConfig::default())
    }

    pub fn with_config(values: Vec<ResultEntry>, config: ScoringConfig) -> Self {
        Self { values, config }
    }

    pub fn from_settings(values: Vec<ResultEntry>, settings: &PaletteSettings) -> Self {
        Self::with_config(values, settings.inline_scoring())
    }

    pub fn values(&self) -> &[ResultEntry] {
        &self.values
    }

    pub fn rank(&self, query: &Query) -> Vec<&ResultEntry> {
        let candidates: Vec<&ResultEntry> = self
            .values
            .iter()
            .filter(|value| value.has_matchable_title())
            .collect();

        let ranker = Ranker::<StrictRatio, PartialRatio>::default();
        let ranked = ranker.rank(query.text(), self.config.cutoff(), candidates, |value| value.title());

        apply_limit(ranked, self.config.max_items()).items
    }
}
