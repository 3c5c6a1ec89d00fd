mod common;

use common::{sources, titles, FailingProvider, FixedProvider, PanickingProvider, PanickingValidityProvider};
use palette_core::config::ScoringConfig;
use palette_core::provider::ProviderRegistry;
use palette_core::search::{search, Aggregator};
use palette_core::types::{FaultKind, Query};

fn commands() -> FixedProvider {
    FixedProvider::new(
        "Commands",
        &[
            ("Open Scene", 100),
            ("Save Scene", 100),
            ("Open Settings", 100),
            ("Reload Scripts", 100),
        ],
    )
}

#[test]
fn test_failing_provider_does_not_hide_others() {
    let mut registry = ProviderRegistry::new();
    registry.register(FailingProvider).unwrap();
    registry.register(commands()).unwrap();

    let result = Aggregator::new(&registry).search(&Query::new("open scene"), ScoringConfig::default());

    assert_eq!(result.entries[0].title(), "Open Scene");
    assert_eq!(result.metadata.faults.len(), 1);
    assert_eq!(result.metadata.faults[0].provider, "Failing Evaluator");
    assert_eq!(
        result.metadata.faults[0].kind,
        FaultKind::GenerationFailed("Evaluation failed: cannot evaluate 'open scene'".to_string())
    );
}

#[test]
fn test_panicking_provider_is_isolated() {
    let mut registry = ProviderRegistry::new();
    registry.register(commands()).unwrap();
    registry.register(PanickingProvider).unwrap();
    registry.register(PanickingValidityProvider).unwrap();

    let result = Aggregator::new(&registry).search(&Query::new("open scene"), ScoringConfig::default());

    assert_eq!(result.entries[0].title(), "Open Scene");
    assert!(!titles(&result.entries).contains(&"never shown"));

    let kinds: Vec<&FaultKind> = result.metadata.faults.iter().map(|f| &f.kind).collect();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.contains(&&FaultKind::ValidityPanicked));
    assert!(kinds.contains(&&FaultKind::GenerationPanicked(
        "expression evaluator blew up".to_string()
    )));
}

#[test]
fn test_every_provider_failing_yields_empty_list() {
    let mut registry = ProviderRegistry::new();
    registry.register(FailingProvider).unwrap();
    registry.register(PanickingProvider).unwrap();

    let result = Aggregator::new(&registry).search(&Query::new("2 + 2"), ScoringConfig::default());

    assert!(result.is_empty());
    assert_eq!(result.metadata.faults.len(), 2);
}

#[test]
fn test_truncated_list_is_prefix_of_full_ranking() {
    let mut registry = ProviderRegistry::new();
    registry.register(commands()).unwrap();
    registry
        .register(FixedProvider::new("Windows", &[("Scene View", 100), ("Game View", 100)]))
        .unwrap();

    let aggregator = Aggregator::new(&registry);
    let query = Query::new("scene");

    let full = aggregator.search(&query, ScoringConfig::new(0, 100));
    assert_eq!(full.entries.len(), 6);

    for max_items in 0..=6 {
        let capped = aggregator.search(&query, ScoringConfig::new(0, max_items as i64));
        assert!(capped.entries.len() <= max_items);
        assert_eq!(capped.titles(), full.titles()[..max_items].to_vec());
    }
}

#[test]
fn test_provider_weight_breaks_cross_provider_ties() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(FixedProvider::new("Commands", &[("Open Scene", 100)]).weight(1.0))
        .unwrap();
    registry
        .register(FixedProvider::new("Recent", &[("Open Scene", 100)]).weight(2.0))
        .unwrap();

    let result = Aggregator::new(&registry).search(&Query::new("open scene"), ScoringConfig::default());
    assert_eq!(sources(&result.entries), vec!["Recent", "Commands"]);
}

#[test]
fn test_equal_weights_fall_back_to_registration_order() {
    let mut registry = ProviderRegistry::new();
    registry.register(FixedProvider::new("First", &[("Open Scene", 100)])).unwrap();
    registry.register(FixedProvider::new("Second", &[("Open Scene", 100)])).unwrap();
    registry.register(FixedProvider::new("Third", &[("Open Scene", 100)])).unwrap();

    for _ in 0..3 {
        let result = Aggregator::new(&registry).search(&Query::new("open scene"), ScoringConfig::default());
        assert_eq!(sources(&result.entries), vec!["First", "Second", "Third"]);
    }
}

#[test]
fn test_base_score_outranks_provider_weight() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(FixedProvider::new("Units", &[("sm", 90)]).weight(10.0))
        .unwrap();
    registry
        .register(FixedProvider::new("Breakpoints", &[("sm", 100)]).weight(1.0))
        .unwrap();

    let result = Aggregator::new(&registry).search(&Query::new("sm"), ScoringConfig::default());
    assert_eq!(sources(&result.entries), vec!["Breakpoints", "Units"]);
}

#[test]
fn test_inapplicable_providers_are_not_asked() {
    let mut registry = ProviderRegistry::new();
    registry.register(commands()).unwrap();
    registry
        .register(
            FixedProvider::new("Math Engine", &[("4", 10_000)])
                .valid_when(|q| q.text().starts_with('=')),
        )
        .unwrap();

    let plain = Aggregator::new(&registry).search(&Query::new("4"), ScoringConfig::new(0, 100));
    assert!(!plain.titles().contains(&"4"));
    assert_eq!(plain.metadata.providers_applicable, 1);

    let math = Aggregator::new(&registry).search(&Query::new("=4"), ScoringConfig::new(0, 100));
    assert_eq!(math.titles()[0], "4");
    assert_eq!(math.metadata.providers_applicable, 2);
}

#[test]
fn test_blank_titles_never_reach_ranking() {
    let mut registry = ProviderRegistry::new();
    registry
        .register(FixedProvider::new("Echo", &[("", 100), ("   ", 100), ("Open Scene", 100)]))
        .unwrap();

    let result = Aggregator::new(&registry).search(&Query::new(""), ScoringConfig::default());

    assert_eq!(result.titles(), vec!["Open Scene"]);
    assert_eq!(result.metadata.candidates_rejected, 2);
    assert_eq!(result.metadata.candidates_considered, 1);
}

#[test]
fn test_free_search_clamps_malformed_config() {
    let mut registry = ProviderRegistry::new();
    registry.register(commands()).unwrap();

    // Cutoff above 100 clamps to 100: only the exact title survives.
    let entries = search("open scene", &registry, 400, 100);
    assert_eq!(titles(&entries), vec!["Open Scene"]);

    // Negative max_items clamps to zero.
    assert!(search("open scene", &registry, 50, -1).is_empty());

    // Negative cutoff clamps to zero: everything survives the strict pass.
    assert_eq!(search("open scene", &registry, -20, 100).len(), 4);
}

#[test]
fn test_empty_registry_returns_no_results() {
    let registry = ProviderRegistry::new();
    let result = Aggregator::new(&registry).search(&Query::new("anything"), ScoringConfig::default());

    assert!(result.is_empty());
    assert_eq!(result.metadata.providers_registered, 0);
}
