#![allow(dead_code)]

use palette_core::entry::{ResultDisplay, ResultEntry, SelectOutcome};
use palette_core::provider::{Provider, ProviderError};
use palette_core::types::Query;

type Validity = Box<dyn Fn(&Query) -> bool + Send + Sync>;

/// Provider returning a fixed list of `(title, base_score)` candidates.
pub struct FixedProvider {
    name: String,
    weight: f32,
    validity: Validity,
    candidates: Vec<(String, i64)>,
}

impl FixedProvider {
    pub fn new(name: &str, candidates: &[(&str, i64)]) -> Self {
        Self {
            name: name.to_string(),
            weight: 1.0,
            validity: Box::new(|_| true),
            candidates: candidates
                .iter()
                .map(|(title, score)| (title.to_string(), *score))
                .collect(),
        }
    }

    pub fn weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn valid_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Query) -> bool + Send + Sync + 'static,
    {
        self.validity = Box::new(predicate);
        self
    }
}

impl Provider for FixedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority_weight(&self) -> f32 {
        self.weight
    }

    fn is_valid(&self, query: &Query) -> bool {
        (self.validity)(query)
    }

    fn generate(&self, _query: &Query) -> Result<Vec<ResultEntry>, ProviderError> {
        Ok(self
            .candidates
            .iter()
            .map(|(title, score)| {
                let display = ResultDisplay::new(title.as_str()).description(self.name.as_str());
                ResultEntry::new(display, *score).with_action(|_| SelectOutcome::Completed)
            })
            .collect())
    }
}

/// Provider whose evaluation always reports an error.
pub struct FailingProvider;

impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "Failing Evaluator"
    }

    fn is_valid(&self, _query: &Query) -> bool {
        true
    }

    fn generate(&self, query: &Query) -> Result<Vec<ResultEntry>, ProviderError> {
        Err(ProviderError::Evaluation(format!("cannot evaluate '{}'", query.text())))
    }
}

/// Provider that panics in generation, like an evaluator library throwing.
pub struct PanickingProvider;

impl Provider for PanickingProvider {
    fn name(&self) -> &str {
        "Panicking Evaluator"
    }

    fn is_valid(&self, _query: &Query) -> bool {
        true
    }

    fn generate(&self, _query: &Query) -> Result<Vec<ResultEntry>, ProviderError> {
        panic!("expression evaluator blew up");
    }
}

/// Provider whose validity predicate panics.
pub struct PanickingValidityProvider;

impl Provider for PanickingValidityProvider {
    fn name(&self) -> &str {
        "Broken Predicate"
    }

    fn is_valid(&self, _query: &Query) -> bool {
        panic!("predicate blew up");
    }

    fn generate(&self, _query: &Query) -> Result<Vec<ResultEntry>, ProviderError> {
        Ok(vec![ResultEntry::new(ResultDisplay::new("never shown"), 100)])
    }
}

pub fn titles(entries: &[ResultEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.title()).collect()
}

/// Name of the provider that produced each entry.
pub fn sources(entries: &[ResultEntry]) -> Vec<&str> {
    entries
        .iter()
        .map(|entry| entry.display().description.as_deref().unwrap_or(""))
        .collect()
}
