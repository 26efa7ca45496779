//! Search results and outcomes.

use serde::{Deserialize, Serialize};

/// One matching text unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Id of the section the unit belongs to.
    pub section_id: String,
    /// Section title, or the id when the title is empty.
    pub title: String,
    /// Highlighted snippet of the unit's text.
    pub snippet: String,
}

/// The outcome of a search call.
///
/// `NoOp` means the query was too short and no search ran; the results
/// panel should be hidden. `Matches` with an empty list means the search ran
/// and found nothing; the panel should say so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "results", rename_all = "lowercase")]
pub enum SearchOutcome {
    NoOp,
    Matches(Vec<SearchResult>),
}

impl SearchOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, SearchOutcome::NoOp)
    }

    /// Results in document order. Empty for a no-op.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::NoOp => &[],
            SearchOutcome::Matches(results) => results,
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::NoOp => Vec::new(),
            SearchOutcome::Matches(results) => results,
        }
    }

    pub fn len(&self) -> usize {
        self.results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }

    /// Whether the results panel should be shown.
    pub fn panel_visible(&self) -> bool {
        !self.is_noop()
    }
}
