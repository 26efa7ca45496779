//! Section navigation for the documentation site.
//!
//! Selecting a search result, clicking a sidebar link, or following a URL
//! fragment all end up in [`Navigator::activate`]. [`SiteNavigator`] is the
//! default implementation: it tracks the visible section, a browser-style
//! history, the page title and the back button of subsections.

pub mod history;

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, Section};
use crate::error::{AtlasError, Result};

pub use history::History;

/// Something that can switch the visible section.
pub trait Navigator {
    /// Show `section_id`, recording it in the history.
    fn activate(&mut self, section_id: &str) -> Result<()>;
}

/// Site-wide navigation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Suffix of every page title.
    pub site_name: String,
    /// Section shown when the URL has no fragment.
    pub home_section: String,
    /// Page title of the home section.
    pub home_title: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            site_name: "Atlas Docs".to_string(),
            home_section: "home".to_string(),
            home_title: "Atlas Docs - Development Documentation".to_string(),
        }
    }
}

/// Navigation state of a single page session.
///
/// # Examples
///
/// ```
/// use atlas_search::corpus::{Corpus, Section};
/// use atlas_search::navigation::{NavigationConfig, Navigator, SiteNavigator};
///
/// let corpus = Corpus::builder()
///     .section(Section::new("home", "Atlas Docs"))
///     .section(Section::new("ssh", "SSH"))
///     .section(Section::new("ssh-keys", "Generating SSH Keys").parent("ssh"))
///     .build()
///     .unwrap();
///
/// let mut nav = SiteNavigator::new(corpus, NavigationConfig::default());
/// nav.initial_load("");
/// nav.activate("ssh-keys").unwrap();
///
/// assert_eq!(nav.page_title(), "Generating SSH Keys - Atlas Docs");
/// assert_eq!(nav.back_label().as_deref(), Some("← Back to SSH"));
/// ```
#[derive(Debug, Clone)]
pub struct SiteNavigator {
    corpus: Arc<Corpus>,
    config: NavigationConfig,
    current: String,
    history: History,
}

impl SiteNavigator {
    pub fn new<C: Into<Arc<Corpus>>>(corpus: C, config: NavigationConfig) -> Self {
        let current = config.home_section.clone();
        SiteNavigator {
            corpus: corpus.into(),
            config,
            current,
            history: History::new(),
        }
    }

    /// Set up the first history entry from the URL fragment.
    ///
    /// A fragment naming a known section is activated; anything else lands on
    /// the home section without adding a history entry.
    pub fn initial_load(&mut self, fragment: &str) {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if !fragment.is_empty() && self.corpus.contains(fragment) {
            self.show(fragment);
            self.history.push(fragment);
        } else {
            let home = self.config.home_section.clone();
            self.show(&home);
            self.history.replace(home);
        }
    }

    /// Go back one history entry, like the browser back button.
    pub fn back(&mut self) -> Option<&str> {
        let target = self.history.back()?.to_string();
        self.show(&target);
        Some(&self.current)
    }

    /// Go forward one history entry.
    pub fn forward(&mut self) -> Option<&str> {
        let target = self.history.forward()?.to_string();
        self.show(&target);
        Some(&self.current)
    }

    /// Follow the back button of the current subsection, if it has one.
    pub fn go_to_parent(&mut self) -> Result<Option<&str>> {
        match self.back_target().map(str::to_string) {
            Some(parent) => {
                self.activate(&parent)?;
                Ok(Some(&self.current))
            }
            None => Ok(None),
        }
    }

    /// Id of the visible section.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.corpus.get(&self.current)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Title of the page for the visible section.
    pub fn page_title(&self) -> String {
        if self.current == self.config.home_section {
            return self.config.home_title.clone();
        }
        match self.current_section() {
            Some(section) => format!("{} - {}", section.display_title(), self.config.site_name),
            None => self.config.home_title.clone(),
        }
    }

    /// Where the back button leads: the parent of the visible section.
    pub fn back_target(&self) -> Option<&str> {
        self.current_section().and_then(Section::parent_id)
    }

    /// Label of the back button, or `None` when it is hidden.
    pub fn back_label(&self) -> Option<String> {
        let parent = self.corpus.get(self.back_target()?)?;
        Some(format!("← Back to {}", parent.display_title()))
    }

    fn show(&mut self, section_id: &str) {
        debug!("showing section '{section_id}'");
        self.current = section_id.to_string();
    }
}

impl Navigator for SiteNavigator {
    fn activate(&mut self, section_id: &str) -> Result<()> {
        if !self.corpus.contains(section_id) {
            return Err(AtlasError::navigation(format!(
                "unknown section '{section_id}'"
            )));
        }
        self.show(section_id);
        self.history.push(section_id);
        Ok(())
    }
}
