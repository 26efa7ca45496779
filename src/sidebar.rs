//! Sidebar state: the mobile menu, collapsible groups and keyboard focus.

use std::collections::HashSet;

use crate::corpus::{Corpus, parent_ids};

/// Viewport width, in CSS pixels, at or below which the sidebar is a
/// slide-out menu.
pub const MOBILE_BREAKPOINT: u32 = 1024;

/// Keys the sidebar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
    Space,
    Other,
}

/// A focusable entry of the sidebar, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// A link to a section.
    Link { section_id: String },
    /// A button expanding or collapsing a group of subsections.
    Toggle { group: String },
}

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    open: bool,
    items: Vec<NavItem>,
    focused: Option<usize>,
    collapsed: HashSet<String>,
}

impl Sidebar {
    pub fn new(items: Vec<NavItem>) -> Self {
        Sidebar {
            items,
            ..Default::default()
        }
    }

    /// Lay out one link per section in document order. Sections with
    /// subsections get a group toggle right before their link.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let groups = parent_ids(corpus);
        let mut items = Vec::with_capacity(corpus.len() + groups.len());
        for section in corpus {
            if groups.contains(section.id()) {
                items.push(NavItem::Toggle {
                    group: section.id().to_string(),
                });
            }
            items.push(NavItem::Link {
                section_id: section.id().to_string(),
            });
        }
        Sidebar::new(items)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The hamburger button.
    pub fn toggle_menu(&mut self) {
        self.open = !self.open;
    }

    pub fn close_menu(&mut self) {
        self.open = false;
    }

    /// Switching to a desktop-sized viewport closes the slide-out menu.
    pub fn on_resize(&mut self, width: u32) {
        if width > MOBILE_BREAKPOINT {
            self.close_menu();
        }
    }

    /// On mobile, following a link closes the menu.
    pub fn after_navigation(&mut self, width: u32) {
        if width <= MOBILE_BREAKPOINT {
            self.close_menu();
        }
    }

    /// Move keyboard focus onto an item. Out of range clears the focus.
    pub fn focus(&mut self, index: usize) {
        self.focused = (index < self.items.len()).then_some(index);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&NavItem> {
        self.focused.and_then(|i| self.items.get(i))
    }

    pub fn is_expanded(&self, group: &str) -> bool {
        !self.collapsed.contains(group)
    }

    /// Flip a group between expanded and collapsed.
    pub fn toggle_group(&mut self, group: &str) {
        if !self.collapsed.remove(group) {
            self.collapsed.insert(group.to_string());
        }
    }

    /// Handle a key press. Returns `true` when the key changed sidebar state.
    ///
    /// Arrow keys only move focus while an item is focused and stop at the
    /// first and last items.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape if self.open => {
                self.close_menu();
                true
            }
            Key::ArrowDown => match self.focused {
                Some(i) if i + 1 < self.items.len() => {
                    self.focused = Some(i + 1);
                    true
                }
                _ => false,
            },
            Key::ArrowUp => match self.focused {
                Some(i) if i > 0 => {
                    self.focused = Some(i - 1);
                    true
                }
                _ => false,
            },
            Key::Enter | Key::Space => match self.focused() {
                Some(NavItem::Toggle { group }) => {
                    let group = group.clone();
                    self.toggle_group(&group);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}
