//! Deterministic result aggregation and fuzzy ranking for query-driven launchers.
//!
//! `palette-core` takes one query string and the candidate entries produced by
//! any number of independent providers, and turns them into a single ordered,
//! capped result list. Ranking is deterministic: identical inputs always
//! produce the identical order, so keyboard selection never flickers while the
//! user retypes.
//!
//! The same [`selection::Ranker`] drives both the cross-provider
//! [`search::Aggregator`] and the scoped [`session::InlineValues`] mode used to
//! rank the closed value set of a single command parameter.

pub mod config;
pub mod entry;
pub mod provider;
pub mod search;
pub mod selection;
pub mod session;
pub mod types;
