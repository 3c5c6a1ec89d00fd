use tracing::debug;

use super::cursor::SelectionCursor;
use crate::config::PaletteSettings;
use crate::entry::{ResultEntry, SelectOutcome};
use crate::search::Aggregator;
use crate::selection::{PartialRatio, Similarity, StrictRatio};
use crate::types::{Query, SearchMetadata, SearchResult};

/// What the window should do after an entry was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Close,
    Stay,
}

/// The launcher's interaction loop, minus rendering and input routing.
///
/// Every text change re-ranks from scratch and resets the cursor, so
/// navigation always runs against the freshest list.
pub struct PaletteSession<'r, S = StrictRatio, P = PartialRatio> {
    aggregator: Aggregator<'r, S, P>,
    settings: PaletteSettings,
    query: String,
    results: SearchResult,
    cursor: SelectionCursor,
}

impl<'r> PaletteSession<'r> {
    pub fn new(registry: &'r crate::provider::ProviderRegistry, settings: PaletteSettings) -> Self {
        Self::with_aggregator(Aggregator::new(registry), settings)
    }
}

impl<'r, S, P> PaletteSession<'r, S, P>
where
    S: Similarity,
    P: Similarity,
{
    pub fn with_aggregator(aggregator: Aggregator<'r, S, P>, settings: PaletteSettings) -> Self {
        let results = aggregator.search(&Query::new(""), settings.scoring());
        let cursor = SelectionCursor::for_list(results.entries.len());

        Self {
            aggregator,
            settings,
            query: String::new(),
            results,
            cursor,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refresh();
    }

    /// Re-run the current query.
    pub fn refresh(&mut self) {
        self.results = self
            .aggregator
            .search(&Query::new(self.query.as_str()), self.settings.scoring());
        self.cursor.reset(self.results.entries.len());
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.results.entries
    }

    pub fn metadata(&self) -> &SearchMetadata {
        &self.results.metadata
    }

    pub fn settings(&self) -> &PaletteSettings {
        &self.settings
    }

    /// Number of rows the window sizes itself for.
    pub fn visible_rows(&self) -> usize {
        self.results.entries.len().min(self.settings.max_displayed_items)
    }

    pub fn cursor(&self) -> SelectionCursor {
        self.cursor
    }

    pub fn selected(&self) -> Option<&ResultEntry> {
        self.cursor.index().and_then(|index| self.results.entries.get(index))
    }

    pub fn select_next(&mut self) {
        self.cursor.select_next(self.results.entries.len());
    }

    pub fn select_previous(&mut self) {
        self.cursor.select_previous(self.results.entries.len());
    }

    /// Point the cursor at a row directly (pointer hover or click).
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.results.entries.len() {
            self.cursor = SelectionCursor::Selected(index);
            true
        } else {
            false
        }
    }

    /// Run the selected entry's action. `None` when nothing is selected.
    pub fn execute_selected(&mut self) -> Option<SessionOutcome> {
        let index = self.cursor.index()?;
        self.execute_at(index)
    }

    pub fn execute_at(&mut self, index: usize) -> Option<SessionOutcome> {
        let outcome = self.results.entries.get(index)?.execute();

        match outcome {
            SelectOutcome::Completed => {
                debug!(index, clear = self.settings.clear_search_on_selection, "selection completed");
                if self.settings.clear_search_on_selection {
                    self.set_query("");
                }
                Some(SessionOutcome::Close)
            }
            SelectOutcome::Continue => Some(SessionOutcome::Stay),
        }
    }
}
