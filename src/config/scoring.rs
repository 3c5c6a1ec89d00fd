use serde::Serialize;
use tracing::warn;

use crate::selection::MAX_SIMILARITY;

pub const DEFAULT_CUTOFF: u8 = 50;
pub const MAX_ITEM_COUNT: usize = 100;

/// Per use-site ranking parameters, always within their valid bounds.
///
/// Out-of-range inputs are settings bugs, not reasons to fail a keystroke:
/// they are clamped to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    cutoff: u8,
    max_items: usize,
}

impl ScoringConfig {
    pub fn new(cutoff: i64, max_items: i64) -> Self {
        let clamped_cutoff = cutoff.clamp(0, i64::from(MAX_SIMILARITY));
        if clamped_cutoff != cutoff {
            warn!(cutoff, clamped = clamped_cutoff, "search cutoff out of range");
        }

        let clamped_max = max_items.max(0);
        if clamped_max != max_items {
            warn!(max_items, "negative max_items, using 0");
        }

        Self {
            cutoff: clamped_cutoff as u8,
            max_items: usize::try_from(clamped_max).unwrap_or(usize::MAX),
        }
    }

    pub fn cutoff(&self) -> u8 {
        self.cutoff
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            max_items: MAX_ITEM_COUNT,
        }
    }
}
