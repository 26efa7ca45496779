//! Browser-style session history.

/// A linear history with a cursor, like a browser tab's back/forward stack.
///
/// Pushing an entry while the cursor is behind the newest entry discards the
/// forward entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new entry after the current one.
    pub fn push<S: Into<String>>(&mut self, entry: S) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry, or record the first one.
    pub fn replace<S: Into<String>>(&mut self, entry: S) {
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = entry.into(),
            None => self.push(entry),
        }
    }

    /// Step back one entry and return it.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Step forward one entry and return it.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
