//! Search box and results panel state.
//!
//! [`SearchPanel`] sits between the page's event handlers and the search
//! engine. It owns all mutable UI state: the input value, whether the clear
//! button and results panel are visible, and the last outcome. The engine
//! itself stays pure.

use crate::error::{AtlasError, Result};
use crate::navigation::Navigator;
use crate::search::{SearchEngine, SearchOutcome, escape_html};

/// Message shown when a search ran and matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// State of the search box and its results panel.
///
/// # Examples
///
/// ```
/// use atlas_search::corpus::{Corpus, Section};
/// use atlas_search::panel::SearchPanel;
/// use atlas_search::search::SearchEngine;
///
/// let corpus = Corpus::builder()
///     .section(Section::new("git", "Git").unit("Install git first."))
///     .build()
///     .unwrap();
/// let engine = SearchEngine::with_defaults(corpus);
/// let mut panel = SearchPanel::new(&engine);
///
/// panel.on_input("g");
/// assert!(!panel.is_visible());
///
/// panel.on_input("git");
/// assert!(panel.is_visible());
/// assert_eq!(panel.outcome().len(), 1);
/// ```
#[derive(Debug)]
pub struct SearchPanel<'a> {
    engine: &'a SearchEngine,
    input: String,
    clear_button_visible: bool,
    visible: bool,
    outcome: SearchOutcome,
}

impl<'a> SearchPanel<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        SearchPanel {
            engine,
            input: String::new(),
            clear_button_visible: false,
            visible: false,
            outcome: SearchOutcome::NoOp,
        }
    }

    /// Handle a change of the input value. The latest input always wins.
    pub fn on_input(&mut self, raw: &str) -> &SearchOutcome {
        self.input = raw.to_string();
        self.clear_button_visible = !raw.is_empty();
        self.outcome = self.engine.search(raw);
        self.visible = self.outcome.panel_visible();
        &self.outcome
    }

    /// The clear button: empty the input and hide everything.
    pub fn clear(&mut self) {
        self.input.clear();
        self.clear_button_visible = false;
        self.reset_results();
    }

    /// A click outside the search area hides the panel but keeps the input.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Navigate to the result at `index` and close the panel.
    pub fn select<N: Navigator + ?Sized>(&mut self, index: usize, navigator: &mut N) -> Result<()> {
        let result = self.outcome.results().get(index).ok_or_else(|| {
            AtlasError::not_found(format!("search result #{index}"))
        })?;
        navigator.activate(&result.section_id)?;

        self.input.clear();
        self.clear_button_visible = false;
        self.reset_results();
        Ok(())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn clear_button_visible(&self) -> bool {
        self.clear_button_visible
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Markup for the results panel. Empty while the panel is hidden.
    ///
    /// Ids and titles are escaped here. Snippets come out of the snippeter
    /// already escaped, with only the highlight tags as markup.
    pub fn render_html(&self) -> String {
        if !self.visible {
            return String::new();
        }

        let results = self.outcome.results();
        if results.is_empty() {
            return format!("<div class=\"search-no-results\">{NO_RESULTS_MESSAGE}</div>");
        }

        let mut html = String::new();
        for result in results {
            html.push_str(&format!(
                "<div class=\"search-result\" data-section=\"{}\">\
                 <div class=\"search-result-title\">{}</div>\
                 <div class=\"search-result-snippet\">{}</div>\
                 </div>",
                escape_html(&result.section_id),
                escape_html(&result.title),
                result.snippet
            ));
        }
        html
    }

    fn reset_results(&mut self) {
        self.visible = false;
        self.outcome = SearchOutcome::NoOp;
    }
}
