pub mod limit;
pub mod ranking;

use std::cmp::Ordering;

use crate::types::RankPass;
pub use limit::{apply_limit, LimitResult};
pub use ranking::{normalize, PartialRatio, Rankable, Similarity, StrictRatio};

pub const MAX_SIMILARITY: u8 = 100;

struct Scored<T> {
	item: T,
	similarity: u8,
	discovery: usize,
}

/// Orders a candidate set against a query.
///
/// `S` is the strict scorer used with the cutoff, `P` the lenient scorer used
/// by the fallback pass. The ranker holds no configuration of its own.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<S, P> {
	strict: S,
	fallback: P,
}

impl Default for Ranker<StrictRatio, PartialRatio> {
	fn default() -> Self {
		Self {
			strict: StrictRatio,
			fallback: PartialRatio,
		}
	}
}

impl<S, P> Ranker<S, P>
where
	S: Similarity,
	P: Similarity,
{
	pub fn new(strict: S, fallback: P) -> Self {
		Self { strict, fallback }
	}

	pub fn rank<T, F>(&self, query: &str, cutoff: u8, candidates: Vec<T>, key_fn: F) -> Vec<T>
	where
		T: Rankable,
		F: Fn(&T) -> &str,
	{
		self.rank_detailed(query, cutoff, candidates, key_fn).0
	}

	/// Rank and report which pass produced the order.
	pub fn rank_detailed<T, F>(
		&self,
		query: &str,
		cutoff: u8,
		candidates: Vec<T>,
		key_fn: F,
	) -> (Vec<T>, RankPass)
	where
		T: Rankable,
		F: Fn(&T) -> &str,
	{
		// 0. Blank query matches everything at face value
		if query.trim().is_empty() {
			return (candidates, RankPass::Unscored);
		}

		let query_chars = normalize(query);
		let keys: Vec<Vec<char>> = candidates.iter().map(|c| normalize(key_fn(c))).collect();

		// 1. Strict pass
		let survivors = self.strict_survivors(&query_chars, cutoff, &keys);
		if !survivors.is_empty() || candidates.is_empty() {
			return (self.order_strict(candidates, survivors), RankPass::Strict);
		}

		// 2. Fallback pass: every candidate, lenient scorer, no cutoff
		let mut scored: Vec<Scored<T>> = candidates
			.into_iter()
			.zip(keys.iter())
			.enumerate()
			.map(|(discovery, (item, key))| Scored {
				item,
				similarity: self.fallback.score_normalized(&query_chars, key),
				discovery,
			})
			.collect();

		scored.sort_by(|a, b| {
			b.similarity
				.cmp(&a.similarity)
				.then_with(|| a.discovery.cmp(&b.discovery))
		});

		(scored.into_iter().map(|s| s.item).collect(), RankPass::Fallback)
	}

	/// The strict pass alone. May be empty.
	pub fn strict<T, F>(&self, query: &str, cutoff: u8, candidates: Vec<T>, key_fn: F) -> Vec<T>
	where
		T: Rankable,
		F: Fn(&T) -> &str,
	{
		if query.trim().is_empty() {
			return candidates;
		}

		let query_chars = normalize(query);
		let keys: Vec<Vec<char>> = candidates.iter().map(|c| normalize(key_fn(c))).collect();
		let survivors = self.strict_survivors(&query_chars, cutoff, &keys);
		self.order_strict(candidates, survivors)
	}

	/// `(discovery index, similarity)` of every candidate clearing the cutoff.
	fn strict_survivors(&self, query: &[char], cutoff: u8, keys: &[Vec<char>]) -> Vec<(usize, u8)> {
		let cutoff = cutoff.min(MAX_SIMILARITY);
		keys.iter()
			.enumerate()
			.map(|(discovery, key)| (discovery, self.strict.score_normalized(query, key)))
			.filter(|&(_, similarity)| similarity >= cutoff)
			.collect()
	}

	fn order_strict<T: Rankable>(&self, candidates: Vec<T>, survivors: Vec<(usize, u8)>) -> Vec<T> {
		let mut similarity_of: Vec<Option<u8>> = vec![None; candidates.len()];
		for (discovery, similarity) in survivors {
			similarity_of[discovery] = Some(similarity);
		}

		let mut scored: Vec<Scored<T>> = candidates
			.into_iter()
			.enumerate()
			.filter_map(|(discovery, item)| {
				similarity_of[discovery].map(|similarity| Scored {
					item,
					similarity,
					discovery,
				})
			})
			.collect();

		// Sort globally by (similarity desc, base_score desc, weight desc, discovery asc)
		scored.sort_by(compare_strict);

		debug_assert!(scored
			.windows(2)
			.all(|w| compare_strict(&w[0], &w[1]) != Ordering::Greater));

		scored.into_iter().map(|s| s.item).collect()
	}
}

fn compare_strict<T: Rankable>(a: &Scored<T>, b: &Scored<T>) -> Ordering {
	b.similarity
		.cmp(&a.similarity)
		.then_with(|| b.item.base_score().cmp(&a.item.base_score()))
		// total_cmp keeps NaN weights from breaking the ordering
		.then_with(|| b.item.weight().total_cmp(&a.item.weight()))
		.then_with(|| a.discovery.cmp(&b.discovery))
}

/// Rank with the default strict/partial ratio pair.
pub fn rank<T, F>(query: &str, cutoff: u8, candidates: Vec<T>, key_fn: F) -> Vec<T>
where
	T: Rankable,
	F: Fn(&T) -> &str,
{
	Ranker::<StrictRatio, PartialRatio>::default().rank(query, cutoff, candidates, key_fn)
}
