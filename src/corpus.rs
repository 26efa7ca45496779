//! Read-only corpus of documentation sections.
//!
//! A [`Corpus`] is established once, when the page content is ready, and is
//! never mutated afterwards. Registration order is document order: search
//! results and navigation both rely on it.
//!
//! # Examples
//!
//! ```
//! use atlas_search::corpus::{Corpus, Section};
//!
//! let corpus = Corpus::builder()
//!     .section(Section::new("git", "Git").unit("Version control basics."))
//!     .section(Section::new("git-install", "Installing Git").parent("git"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(corpus.len(), 2);
//! assert!(corpus.contains("git-install"));
//! ```

pub mod loader;
pub mod section;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;

use crate::error::{AtlasError, Result};

pub use loader::{CorpusSnapshot, SectionRecord};
pub use section::{Section, TextUnit};

/// An ordered, immutable snapshot of sections.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sections: Vec<Section>,
    positions: HashMap<String, usize>,
}

impl Corpus {
    /// Start building a corpus.
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    /// An empty corpus.
    pub fn empty() -> Self {
        Corpus::default()
    }

    /// Build a corpus from sections in document order.
    ///
    /// Section ids must be non-empty and unique, and every parent must name
    /// a section in the same corpus.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(sections.len());
        for (position, section) in sections.iter().enumerate() {
            if section.id().is_empty() {
                return Err(AtlasError::corpus(format!(
                    "section at position {position} has an empty id"
                )));
            }
            if positions.insert(section.id().to_string(), position).is_some() {
                return Err(AtlasError::corpus(format!(
                    "duplicate section id '{}'",
                    section.id()
                )));
            }
        }

        for section in &sections {
            if let Some(parent) = section.parent_id() {
                if parent == section.id() {
                    return Err(AtlasError::corpus(format!(
                        "section '{parent}' lists itself as parent"
                    )));
                }
                if !positions.contains_key(parent) {
                    return Err(AtlasError::corpus(format!(
                        "section '{}' has unknown parent '{}'",
                        section.id(),
                        parent
                    )));
                }
            }
        }

        let corpus = Corpus {
            sections,
            positions,
        };
        debug!(
            "corpus ready: {} sections, {} text units",
            corpus.len(),
            corpus.unit_count()
        );
        Ok(corpus)
    }

    /// Parse and validate a corpus from its JSON snapshot form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        CorpusSnapshot::from_json_str(json)?.into_corpus()
    }

    /// Read, parse and validate a corpus from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        CorpusSnapshot::from_json_file(path)?.into_corpus()
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.positions.get(id).map(|&position| &self.sections[position])
    }

    /// Whether a section with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Sections in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Sections in document order, as a slice.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of text units across all sections.
    pub fn unit_count(&self) -> usize {
        self.sections.iter().map(|s| s.units().len()).sum()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder collecting sections in registration order.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    sections: Vec<Section>,
}

impl CorpusBuilder {
    /// Register the next section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Register several sections in order.
    pub fn sections<I: IntoIterator<Item = Section>>(mut self, sections: I) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Validate and build the corpus.
    pub fn build(self) -> Result<Corpus> {
        Corpus::from_sections(self.sections)
    }
}

/// Collect the ids of every section that appears as some other section's parent.
pub(crate) fn parent_ids(corpus: &Corpus) -> HashSet<&str> {
    corpus.iter().filter_map(Section::parent_id).collect()
}
