//! JSON wire format for corpus snapshots.
//!
//! A snapshot is what the host page exports once its content is ready:
//!
//! ```json
//! {
//!   "sections": [
//!     { "id": "ssh", "title": "SSH", "units": ["Secure shell basics."] },
//!     { "id": "ssh-keys", "title": "Generating SSH Keys", "parent": "ssh",
//!       "units": ["Run ssh-keygen -t ed25519 to create a new key pair."] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Section};
use crate::error::Result;

/// Serialized form of a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub units: Vec<String>,
}

impl From<SectionRecord> for Section {
    fn from(record: SectionRecord) -> Self {
        let section = Section::new(record.id, record.title).units_from(record.units);
        match record.parent {
            Some(parent) => section.parent(parent),
            None => section,
        }
    }
}

impl From<&Section> for SectionRecord {
    fn from(section: &Section) -> Self {
        SectionRecord {
            id: section.id().to_string(),
            title: section.title().to_string(),
            parent: section.parent_id().map(str::to_string),
            units: section.units().iter().map(|u| u.text().to_string()).collect(),
        }
    }
}

/// Serialized form of a whole corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

impl CorpusSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Capture a corpus as a snapshot.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        CorpusSnapshot {
            sections: corpus.iter().map(SectionRecord::from).collect(),
        }
    }

    /// Validate the snapshot and build a corpus from it.
    pub fn into_corpus(self) -> Result<Corpus> {
        Corpus::from_sections(self.sections.into_iter().map(Section::from).collect())
    }
}
