//! Query matching and snippet extraction with highlighted occurrences.
//!
//! A query is compiled once into a case-insensitive pattern built from the
//! escaped query, so queries such as `c++` or `a.b` match literally. The same
//! compiled pattern decides whether a text matches, locates the first match
//! and finds the occurrences to highlight, so the three never disagree.
//!
//! A snippet is a window of at most `context_chars` characters either side
//! of the first match, measured in characters of the original text. Window
//! text is HTML-escaped and every occurrence of the query inside it is
//! wrapped in the configured highlight tag. Ellipsis markers are added on
//! the sides where the window stops short of the text.
//!
//! If the pattern cannot be compiled, matching falls back to a
//! per-character case fold and the window is returned without highlighting.

use std::ops::Range;

use log::warn;
use regex::{Regex, RegexBuilder};

use crate::query::normalize;
use crate::search::config::HighlightConfig;

/// Produces highlighted snippets.
///
/// # Examples
///
/// ```
/// use atlas_search::search::{HighlightConfig, Snippeter};
///
/// let snippeter = Snippeter::new(HighlightConfig::default());
/// let snippet = snippeter.snippet(
///     "Run ssh-keygen -t ed25519 to create a new key pair.",
///     "ssh-keygen",
/// );
/// assert_eq!(
///     snippet,
///     "Run <mark>ssh-keygen</mark> -t ed25519 to create a new key pair."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Snippeter {
    config: HighlightConfig,
}

impl Snippeter {
    pub fn new(config: HighlightConfig) -> Self {
        Snippeter { config }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Compile a query once so it can match and snippet many texts.
    ///
    /// Surrounding whitespace in `query` is kept. An empty query matches
    /// nothing.
    pub fn prepare(&self, query: &str) -> PreparedHighlight<'_> {
        PreparedHighlight {
            config: &self.config,
            rule: MatchRule::compile(query, self.config.pattern_size_limit),
        }
    }

    /// Snippet `text` around the first occurrence of `query`.
    pub fn snippet(&self, text: &str, query: &str) -> String {
        self.prepare(query).snippet(text)
    }

    /// Snippet `text` after normalizing the query the way searches do.
    pub fn snippet_normalized(&self, text: &str, query: &str) -> String {
        self.snippet(text, &normalize(query))
    }
}

#[derive(Debug)]
enum MatchRule {
    Pattern(Regex),
    /// Case-folded query, used when the pattern cannot be built.
    Folded(String),
    Empty,
}

impl MatchRule {
    fn compile(query: &str, size_limit: usize) -> Self {
        if query.is_empty() {
            return MatchRule::Empty;
        }
        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
        {
            Ok(regex) => MatchRule::Pattern(regex),
            Err(e) => {
                warn!("highlighting disabled for query {query:?}: {e}");
                MatchRule::Folded(fold_case(query))
            }
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            MatchRule::Pattern(regex) => regex.is_match(text),
            MatchRule::Folded(needle) => fold_case(text).contains(needle.as_str()),
            MatchRule::Empty => false,
        }
    }

    fn find(&self, text: &str) -> Option<Range<usize>> {
        match self {
            MatchRule::Pattern(regex) => regex.find(text).map(|m| m.range()),
            MatchRule::Folded(needle) => find_folded(text, needle).into_iter().next(),
            MatchRule::Empty => None,
        }
    }

    /// Byte ranges of the non-overlapping occurrences in `text`, in order.
    fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            MatchRule::Pattern(regex) => regex.find_iter(text).map(|m| m.range()).collect(),
            MatchRule::Folded(needle) => find_folded(text, needle),
            MatchRule::Empty => Vec::new(),
        }
    }
}

/// A query compiled for matching and snippeting.
#[derive(Debug)]
pub struct PreparedHighlight<'a> {
    config: &'a HighlightConfig,
    rule: MatchRule,
}

impl PreparedHighlight<'_> {
    /// Whether highlighting markup will be applied.
    pub fn highlights(&self) -> bool {
        matches!(self.rule, MatchRule::Pattern(_))
    }

    /// Whether the query occurs in `text`, ignoring case.
    pub fn is_match(&self, text: &str) -> bool {
        self.rule.is_match(text)
    }

    /// Build the snippet for `text`.
    ///
    /// When the query does not occur, the window covers the start of the text.
    pub fn snippet(&self, text: &str) -> String {
        let total = text.chars().count();
        let context = self.config.context_chars;

        let (start, end) = match self.rule.find(text) {
            Some(found) => {
                let match_start = text[..found.start].chars().count();
                let match_end = match_start + text[found].chars().count();
                (
                    match_start.saturating_sub(context),
                    (match_end + context).min(total),
                )
            }
            None => (0, (2 * context).min(total)),
        };

        let window = &text[byte_offset(text, start)..byte_offset(text, end)];
        let mut snippet = String::with_capacity(window.len() + 2 * self.config.ellipsis.len());
        if start > 0 {
            snippet.push_str(&self.config.ellipsis);
        }
        self.push_highlighted(&mut snippet, window);
        if end < total {
            snippet.push_str(&self.config.ellipsis);
        }
        snippet
    }

    /// Escape `window` into `out`, wrapping every occurrence of the query.
    fn push_highlighted(&self, out: &mut String, window: &str) {
        let mut last = 0;
        if self.highlights() {
            let open = self.config.opening_tag();
            let close = self.config.closing_tag();
            for found in self.rule.find_all(window) {
                push_escaped(out, &window[last..found.start]);
                out.push_str(&open);
                push_escaped(out, &window[found.clone()]);
                out.push_str(&close);
                last = found.end;
            }
        }
        push_escaped(out, &window[last..]);
    }
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Byte offset of the character at `index`, or the text length past the end.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices().nth(index).map_or(text.len(), |(offset, _)| offset)
}

/// Round-trip through uppercase so every case variant of a letter, such as
/// a final sigma, folds to the same lowercase form.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Occurrences of a case-folded `needle` in `text`, as byte ranges of whole
/// characters of `text`. Overlapping ranges are merged.
fn find_folded(text: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    let mut folded = String::with_capacity(text.len());
    // Byte range in `text` of the character each folded byte came from.
    let mut owners: Vec<Range<usize>> = Vec::with_capacity(text.len());
    for (offset, c) in text.char_indices() {
        let owner = offset..offset + c.len_utf8();
        for f in fold_char(c) {
            folded.push(f);
            owners.resize(folded.len(), owner.clone());
        }
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();
    for (pos, matched) in folded.match_indices(needle) {
        let start = owners[pos].start;
        let end = owners[pos + matched.len() - 1].end;
        match ranges.last_mut() {
            Some(last) if start < last.end => last.end = last.end.max(end),
            _ => ranges.push(start..end),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_marks(s: &str) -> String {
        s.replace("<mark>", "").replace("</mark>", "")
    }

    #[test]
    fn test_find_folded() {
        assert_eq!(find_folded("Hello World", "world"), vec![6..11]);
        assert_eq!(find_folded("GIT git", "git"), vec![0..3, 4..7]);
        assert!(find_folded("abc", "abcd").is_empty());
        assert!(find_folded("abc", "").is_empty());
        assert_eq!(find_folded("Ünïcode ÜBER", &fold_case("über")), vec![10..15]);
    }

    #[test]
    fn test_final_sigma_folds_like_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), fold_case("οδος"));
        assert_eq!(fold_case("ς"), "σ");
    }

    #[test]
    fn test_match_test_and_locator_agree_on_final_sigma() {
        // Whole-string lowercasing turns the trailing Σ into ς, per-character
        // lowercasing into σ. The match test and the window must agree.
        let text = format!("{}ΟΔΟΣ end", "x".repeat(120));
        let expected = format!("...{}<mark>ΟΔΟΣ</mark> end", "x".repeat(50));
        let snippeter = Snippeter::default();
        for query in ["οδος", "οδοσ", "ΟΔΟΣ"] {
            let prepared = snippeter.prepare(query);
            assert!(prepared.is_match(&text));
            assert_eq!(prepared.snippet(&text), expected);
        }

        let fallback = Snippeter::new(HighlightConfig::default().pattern_size_limit(1));
        let prepared = fallback.prepare("οδος");
        assert!(prepared.is_match(&text));
        assert_eq!(prepared.snippet(&text), format!("...{}ΟΔΟΣ end", "x".repeat(50)));
    }

    #[test]
    fn test_window_text_is_escaped() {
        let snippeter = Snippeter::default();
        assert_eq!(
            snippeter.snippet("Connect with ssh <user>@<host> <img src=x>", "connect"),
            "<mark>Connect</mark> with ssh &lt;user&gt;@&lt;host&gt; &lt;img src=x&gt;"
        );
        assert_eq!(
            snippeter.snippet("Replace <user> & \"host\"", "<user>"),
            "Replace <mark>&lt;user&gt;</mark> &amp; &quot;host&quot;"
        );

        let fallback = Snippeter::new(HighlightConfig::default().pattern_size_limit(1));
        assert_eq!(fallback.snippet("a <b> c", "c"), "a &lt;b&gt; c");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn test_whole_text_fits_window() {
        let snippeter = Snippeter::default();
        assert_eq!(
            snippeter.snippet("Use git status often.", "git"),
            "Use <mark>git</mark> status often."
        );
    }

    #[test]
    fn test_every_occurrence_highlighted_preserving_case() {
        let snippeter = Snippeter::default();
        assert_eq!(
            snippeter.snippet("Git is great; git is fast; GIT!", "git"),
            "<mark>Git</mark> is great; <mark>git</mark> is fast; <mark>GIT</mark>!"
        );
    }

    #[test]
    fn test_window_bounds_and_ellipses() {
        // 200 characters with the match at character 150.
        let text = format!("{}needle{}", "a".repeat(150), "b".repeat(44));
        assert_eq!(text.chars().count(), 200);

        let snippet = Snippeter::default().snippet(&text, "needle");
        let expected = format!("...{}<mark>needle</mark>{}", "a".repeat(50), "b".repeat(44));
        assert_eq!(snippet, expected);

        let text = format!("{}needle{}", "a".repeat(150), "b".repeat(60));
        let snippet = Snippeter::default().snippet(&text, "needle");
        assert!(snippet.starts_with("..."));
        assert!(snippet.ends_with("..."));
        let window = strip_marks(&snippet[3..snippet.len() - 3]);
        assert_eq!(window.chars().count(), "needle".len() + 100);
    }

    #[test]
    fn test_no_leading_ellipsis_at_offset_zero() {
        let text = format!("needle{}", "x".repeat(80));
        let snippet = Snippeter::default().snippet(&text, "needle");
        assert!(snippet.starts_with("<mark>needle</mark>"));
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_window_counts_characters() {
        let text = format!("{}ключ{}", "ж".repeat(60), "щ".repeat(60));
        let snippet = Snippeter::default().snippet(&text, "ключ");
        let expected = format!("...{}<mark>ключ</mark>{}...", "ж".repeat(50), "щ".repeat(50));
        assert_eq!(snippet, expected);
    }

    #[test]
    fn test_special_characters_match_literally() {
        let snippeter = Snippeter::default();
        assert_eq!(
            snippeter.snippet("Learn C++ and c++ templates", "c++"),
            "Learn <mark>C++</mark> and <mark>c++</mark> templates"
        );
        assert_eq!(
            snippeter.snippet("a.b matches but axb does not", "a.b"),
            "<mark>a.b</mark> matches but axb does not"
        );
        assert_eq!(
            snippeter.snippet("use (group) and [class]", "(group"),
            "use <mark>(group</mark>) and [class]"
        );
    }

    #[test]
    fn test_pattern_failure_returns_plain_window() {
        let snippeter = Snippeter::new(HighlightConfig::default().pattern_size_limit(1));
        let prepared = snippeter.prepare("ssh-keygen");
        assert!(!prepared.highlights());
        assert_eq!(
            prepared.snippet("Run ssh-keygen -t ed25519."),
            "Run ssh-keygen -t ed25519."
        );
    }

    #[test]
    fn test_ellipsis_not_highlighted() {
        let text = format!("{}..{}", "z".repeat(70), "z".repeat(70));
        let snippet = Snippeter::default().snippet(&text, "..");
        assert!(snippet.starts_with("...z"));
        assert!(snippet.ends_with("z..."));
        assert_eq!(snippet.matches("<mark>").count(), 1);
    }

    #[test]
    fn test_missing_query_snippets_text_start() {
        let text = "x".repeat(150);
        let snippet = Snippeter::default().snippet(&text, "absent");
        assert_eq!(snippet, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_custom_tag_and_ellipsis() {
        let config = HighlightConfig::new().tag("em").css_class("hit").ellipsis("…").context_chars(3);
        let snippet = Snippeter::new(config).snippet("one two three", "two");
        assert_eq!(snippet, "…ne <em class=\"hit\">two</em> th…");
    }

    #[test]
    fn test_snippet_normalized_trims() {
        let snippeter = Snippeter::default();
        assert_eq!(
            snippeter.snippet_normalized("pip install", "  PIP "),
            "<mark>pip</mark> install"
        );
    }
}
