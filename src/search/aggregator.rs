use tracing::{debug, instrument, trace};

use crate::config::ScoringConfig;
use crate::entry::ResultEntry;
use crate::provider::{generate_isolated, ProviderRegistry};
use crate::selection::{apply_limit, LimitResult, PartialRatio, Rankable, Ranker, Similarity, StrictRatio};
use crate::types::{Query, SearchMetadata, SearchResult};

/// Internal: an entry tagged with the weight of the provider that produced it.
struct Candidate {
    entry: ResultEntry,
    weight: f32,
}

impl Rankable for Candidate {
    fn base_score(&self) -> i64 {
        self.entry.base_score()
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Collects candidates from every applicable provider and ranks the union once.
///
/// Ranking the union rather than each provider separately is what lets the
/// provider weight take part in tie-breaking.
pub struct Aggregator<'r, S = StrictRatio, P = PartialRatio> {
    registry: &'r ProviderRegistry,
    ranker: Ranker<S, P>,
}

impl<'r> Aggregator<'r> {
    pub fn new(registry: &'r ProviderRegistry) -> Self {
        Self {
            registry,
            ranker: Ranker::default(),
        }
    }
}

impl<'r, S, P> Aggregator<'r, S, P>
where
    S: Similarity,
    P: Similarity,
{
    pub fn with_ranker(registry: &'r ProviderRegistry, ranker: Ranker<S, P>) -> Self {
        Self { registry, ranker }
    }

    pub fn registry(&self) -> &'r ProviderRegistry {
        self.registry
    }

    #[instrument(skip_all, fields(query = %query.text()))]
    pub fn search(&self, query: &Query, config: ScoringConfig) -> SearchResult {
        // 1. Applicability
        let (applicable, mut faults) = self.registry.partition_applicable(query);

        // 2. Collection, in registration order then candidate order
        let mut candidates = Vec::new();
        let mut candidates_rejected = 0;

        for registered in &applicable {
            match generate_isolated(registered.provider(), query) {
                Ok(entries) => {
                    trace!(provider = %registered.id(), count = entries.len(), "candidates generated");
                    for entry in entries {
                        if entry.has_matchable_title() {
                            candidates.push(Candidate {
                                entry,
                                weight: registered.weight(),
                            });
                        } else {
                            candidates_rejected += 1;
                        }
                    }
                }
                Err(fault) => faults.push(fault),
            }
        }

        let candidates_considered = candidates.len();

        // 3. Ranking over the union
        let (ranked, pass) = self.ranker.rank_detailed(
            query.text(),
            config.cutoff(),
            candidates,
            |candidate| candidate.entry.title(),
        );

        // 4. Truncation
        let LimitResult {
            items,
            excluded_by_limit,
        } = apply_limit(ranked, config.max_items());

        let entries: Vec<ResultEntry> = items.into_iter().map(|candidate| candidate.entry).collect();

        let metadata = SearchMetadata {
            query: query.text().to_string(),
            cutoff: config.cutoff(),
            max_items: config.max_items(),
            providers_registered: self.registry.len(),
            providers_applicable: applicable.len(),
            candidates_considered,
            candidates_rejected,
            results_returned: entries.len(),
            excluded_by_limit,
            pass,
            faults,
        };

        debug!(
            providers = metadata.providers_applicable,
            considered = metadata.candidates_considered,
            returned = metadata.results_returned,
            faults = metadata.faults.len(),
            pass = ?metadata.pass,
            "search complete"
        );

        SearchResult { entries, metadata }
    }
}

/// One-shot search from raw settings numbers; out-of-range values are clamped.
pub fn search(query: &str, registry: &ProviderRegistry, cutoff: i64, max_items: i64) -> Vec<ResultEntry> {
    Aggregator::new(registry)
        .search(&Query::new(query), ScoringConfig::new(cutoff, max_items))
        .entries
}
