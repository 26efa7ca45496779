//! Sections and their searchable text units.

/// The smallest unit of searchable text within a section.
///
/// A unit is a paragraph, list item or sub-heading, kept in document order.
/// It records the id of the section that owns it. Units are only created
/// through [`Section::unit`], so the owner id always matches the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    text: String,
    section_id: String,
}

impl TextUnit {
    /// Create a new text unit owned by `section_id`.
    pub(crate) fn new<T: Into<String>, S: Into<String>>(text: T, section_id: S) -> Self {
        TextUnit {
            text: text.into(),
            section_id: section_id.into(),
        }
    }

    /// The unit's original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The id of the owning section.
    pub fn section_id(&self) -> &str {
        &self.section_id
    }
}

/// A logically distinct block of documentation content.
///
/// # Examples
///
/// ```
/// use atlas_search::corpus::Section;
///
/// let section = Section::new("ssh-keys", "Generating SSH Keys")
///     .parent("ssh")
///     .unit("Run ssh-keygen -t ed25519 to create a new key pair.");
///
/// assert_eq!(section.display_title(), "Generating SSH Keys");
/// assert_eq!(section.units()[0].section_id(), "ssh-keys");
/// ```
/// Sections are read and written through `SectionRecord`; the type itself
/// carries no serde impls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: String,
    title: String,
    parent: Option<String>,
    units: Vec<TextUnit>,
}

impl Section {
    /// Create an empty section. The title may be empty.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T) -> Self {
        Section {
            id: id.into(),
            title: title.into(),
            parent: None,
            units: Vec::new(),
        }
    }

    /// Set the parent section id.
    pub fn parent<S: Into<String>>(mut self, parent: S) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append a text unit in document order.
    pub fn unit<T: Into<String>>(mut self, text: T) -> Self {
        let unit = TextUnit::new(text, self.id.clone());
        self.units.push(unit);
        self
    }

    /// Append several text units in document order.
    pub fn units_from<I, T>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for text in texts {
            self = self.unit(text);
        }
        self
    }

    /// The section's stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw title, possibly empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title, falling back to the id when the title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }

    /// The parent section id, if this is a subsection.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Text units in document order.
    pub fn units(&self) -> &[TextUnit] {
        &self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_id() {
        let section = Section::new("git-config", "");
        assert_eq!(section.title(), "");
        assert_eq!(section.display_title(), "git-config");

        let section = Section::new("git-config", "Git Configuration");
        assert_eq!(section.display_title(), "Git Configuration");
    }

    #[test]
    fn test_units_keep_order_and_owner() {
        let section = Section::new("python-pip", "Using pip")
            .unit("Install packages with pip install.")
            .units_from(["Upgrade pip itself.", "Freeze requirements."]);

        let texts: Vec<&str> = section.units().iter().map(|u| u.text()).collect();
        assert_eq!(
            texts,
            vec![
                "Install packages with pip install.",
                "Upgrade pip itself.",
                "Freeze requirements."
            ]
        );
        assert!(section.units().iter().all(|u| u.section_id() == "python-pip"));
        assert_eq!(section.parent_id(), None);
    }
}
