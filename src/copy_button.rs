//! Copy-to-clipboard buttons on code blocks.
//!
//! Each code block gets a [`CopyButton`]. A click hands the block's text to a
//! [`Clipboard`]; the button then shows success or failure for
//! [`FEEDBACK_DURATION`] before returning to its idle face. The host page
//! drives time by calling [`CopyButton::tick`] from its timer.

use std::time::{Duration, Instant};

use log::{debug, error};

use crate::error::Result;

/// How long the success or failure face stays up.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Something that can receive copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// What the button currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyState {
    /// Button face.
    pub fn label(self) -> &'static str {
        match self {
            CopyState::Idle => "📋",
            CopyState::Copied => "✅",
            CopyState::Failed => "❌",
        }
    }

    /// Tooltip. A failed copy keeps the idle tooltip.
    pub fn title(self) -> &'static str {
        match self {
            CopyState::Copied => "Copied!",
            CopyState::Idle | CopyState::Failed => "Copy code",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    state: CopyState,
    changed_at: Option<Instant>,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }

    pub fn title(&self) -> &'static str {
        self.state.title()
    }

    /// Copy `code` and switch to the matching feedback state.
    ///
    /// A rejected write is logged and shown on the button, never returned.
    pub fn click<C: Clipboard + ?Sized>(&mut self, code: &str, clipboard: &mut C, now: Instant) {
        match clipboard.write_text(code) {
            Ok(()) => {
                debug!("copied {} characters", code.chars().count());
                self.set(CopyState::Copied, now);
            }
            Err(e) => {
                error!("Failed to copy code: {e}");
                self.set(CopyState::Failed, now);
            }
        }
    }

    /// Return to idle once the feedback has been up for
    /// [`FEEDBACK_DURATION`]. Returns `true` when the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.changed_at {
            Some(at) if now.saturating_duration_since(at) >= FEEDBACK_DURATION => {
                self.state = CopyState::Idle;
                self.changed_at = None;
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, state: CopyState, now: Instant) {
        self.state = state;
        self.changed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlasError;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        denied: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.denied {
                return Err(AtlasError::clipboard("permission denied"));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_idle_face() {
        let button = CopyButton::new();
        assert_eq!(button.state(), CopyState::Idle);
        assert_eq!(button.label(), "📋");
        assert_eq!(button.title(), "Copy code");
    }

    #[test]
    fn test_copied_then_reset_after_two_seconds() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new();
        let start = Instant::now();

        button.click("git init", &mut clipboard, start);
        assert_eq!(clipboard.contents.as_deref(), Some("git init"));
        assert_eq!(button.state(), CopyState::Copied);
        assert_eq!(button.label(), "✅");
        assert_eq!(button.title(), "Copied!");

        assert!(!button.tick(start + Duration::from_millis(1999)));
        assert_eq!(button.state(), CopyState::Copied);
        assert!(button.tick(start + FEEDBACK_DURATION));
        assert_eq!(button.label(), "📋");
        assert_eq!(button.title(), "Copy code");
        assert!(!button.tick(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_failed_copy_keeps_title() {
        let mut clipboard = MemoryClipboard {
            denied: true,
            ..Default::default()
        };
        let mut button = CopyButton::new();
        let start = Instant::now();

        button.click("pip install", &mut clipboard, start);
        assert!(clipboard.contents.is_none());
        assert_eq!(button.state(), CopyState::Failed);
        assert_eq!(button.label(), "❌");
        assert_eq!(button.title(), "Copy code");

        assert!(button.tick(start + Duration::from_secs(2)));
        assert_eq!(button.state(), CopyState::Idle);
    }

    #[test]
    fn test_second_click_restarts_feedback() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new();
        let start = Instant::now();

        button.click("a", &mut clipboard, start);
        button.click("b", &mut clipboard, start + Duration::from_millis(1500));
        assert!(!button.tick(start + Duration::from_millis(2500)));
        assert!(button.tick(start + Duration::from_millis(3500)));
        assert_eq!(clipboard.contents.as_deref(), Some("b"));
    }
}
