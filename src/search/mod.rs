//! In-page full-text search over documentation sections.
//!
//! - [`SearchEngine`] runs case-insensitive substring queries against an
//!   immutable [`Corpus`](crate::corpus::Corpus).
//! - [`Snippeter`] extracts bounded, highlighted snippets around matches.
//! - [`SearchOutcome`] separates "no search performed" from "no matches".

pub mod config;
pub mod engine;
pub mod highlight;
pub mod result;

pub use config::{HighlightConfig, SearchConfig};
pub use engine::{SearchEngine, SearchIndex};
pub use highlight::{PreparedHighlight, Snippeter, escape_html};
pub use result::{SearchOutcome, SearchResult};
