//! # Atlas Search
//!
//! In-page search and navigation core for static documentation sites.
//!
//! ## Features
//!
//! - Case-insensitive substring search over pre-rendered sections
//! - Bounded snippets with every occurrence highlighted
//! - Document-order results, truncated from the front
//! - No-op queries kept distinct from queries with no matches
//! - Section navigation with browser-style history and back buttons
//! - Search panel, sidebar and code copy button state for the page's event
//!   handlers

pub mod cli;
pub mod copy_button;
pub mod corpus;
pub mod error;
pub mod navigation;
pub mod panel;
pub mod query;
pub mod search;
pub mod sidebar;

pub mod prelude {
    pub use crate::copy_button::{Clipboard, CopyButton, CopyState};
    pub use crate::corpus::{Corpus, Section, TextUnit};
    pub use crate::error::{AtlasError, Result};
    pub use crate::navigation::{NavigationConfig, Navigator, SiteNavigator};
    pub use crate::panel::SearchPanel;
    pub use crate::query::Query;
    pub use crate::search::{SearchConfig, SearchEngine, SearchOutcome, SearchResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
