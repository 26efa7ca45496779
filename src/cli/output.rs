//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{AtlasArgs, OutputFormat};
use crate::error::Result;
use crate::search::SearchResult;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    /// True when the query was too short to search.
    pub noop: bool,
    pub hits: Vec<SearchResult>,
    pub duration_us: u64,
}

/// Result structure for a single snippet.
#[derive(Debug, Serialize, Deserialize)]
pub struct SnippetResult {
    pub query: String,
    pub snippet: String,
}

/// Corpus statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_sections: usize,
    pub total_units: usize,
    pub untitled_sections: usize,
    pub subsections: usize,
    pub section_groups: usize,
    pub section_stats: Option<Vec<SectionStats>>,
}

/// Section-specific statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct SectionStats {
    pub id: String,
    pub units: usize,
    pub characters: usize,
}

/// Result structure for corpus validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub sections: usize,
    pub error: Option<String>,
}

/// Page state after navigation.
#[derive(Debug, Serialize, Deserialize)]
pub struct NavigationResult {
    pub section: String,
    pub page_title: String,
    pub back_target: Option<String>,
    pub back_label: Option<String>,
}

impl HumanOutput for SearchResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        if self.noop {
            let _ = writeln!(out, "Query {:?} is too short to search.", self.query);
            return out;
        }
        if self.hits.is_empty() {
            let _ = writeln!(out, "No results found");
            return out;
        }

        let _ = writeln!(out, "Search Results:");
        let _ = writeln!(out, "═══════════════");
        for (i, hit) in self.hits.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Result {}: {} (#{})", i + 1, hit.title, hit.section_id);
            let _ = writeln!(out, "─────────────");
            let _ = writeln!(out, "{}", hit.snippet);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total hits: {}", self.hits.len());
        let _ = writeln!(out, "Search time: {}µs", self.duration_us);
        out
    }
}

impl HumanOutput for SnippetResult {
    fn render_human(&self) -> String {
        format!("{}\n", self.snippet)
    }
}

impl HumanOutput for CorpusStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Corpus Statistics:");
        let _ = writeln!(out, "══════════════════");
        let _ = writeln!(out, "Sections: {}", self.total_sections);
        let _ = writeln!(out, "Text units: {}", self.total_units);
        let _ = writeln!(out, "Untitled sections: {}", self.untitled_sections);
        let _ = writeln!(out, "Subsections: {}", self.subsections);
        let _ = writeln!(out, "Section groups: {}", self.section_groups);
        if let Some(ref sections) = self.section_stats {
            let _ = writeln!(out);
            for section in sections {
                let _ = writeln!(
                    out,
                    "  {}: {} units, {} characters",
                    section.id, section.units, section.characters
                );
            }
        }
        out
    }
}

impl HumanOutput for ValidationResult {
    fn render_human(&self) -> String {
        match self.error {
            Some(ref error) => format!("✗ Invalid corpus: {error}\n"),
            None => format!("✓ Corpus is valid ({} sections)\n", self.sections),
        }
    }
}

impl HumanOutput for NavigationResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Section: {}", self.section);
        let _ = writeln!(out, "Page title: {}", self.page_title);
        match self.back_label {
            Some(ref label) => {
                let _ = writeln!(out, "Back button: {label}");
            }
            None => {
                let _ = writeln!(out, "Back button: hidden");
            }
        }
        out
    }
}

/// Render a result in the requested format.
pub fn render_result<T: Serialize + HumanOutput>(result: &T, args: &AtlasArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}

/// Print a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &AtlasArgs,
) -> Result<()> {
    if args.verbosity() > 1 && matches!(args.output_format, OutputFormat::Human) {
        println!("{message}");
        println!();
    }
    print!("{}", render_result(result, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> AtlasArgs {
        let mut argv = vec!["atlas-search"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["validate", "docs.json"]);
        AtlasArgs::try_parse_from(argv).unwrap()
    }

    fn hits() -> SearchResults {
        SearchResults {
            query: "git".to_string(),
            noop: false,
            hits: vec![SearchResult {
                section_id: "git".to_string(),
                title: "Git".to_string(),
                snippet: "Install <mark>git</mark> first.".to_string(),
            }],
            duration_us: 12,
        }
    }

    #[test]
    fn test_human_search_output() {
        let out = render_result(&hits(), &args(&[])).unwrap();
        assert!(out.contains("Result 1: Git (#git)"));
        assert!(out.contains("Install <mark>git</mark> first."));
        assert!(out.contains("Total hits: 1"));
    }

    #[test]
    fn test_human_noop_and_empty() {
        let noop = SearchResults {
            query: "g".to_string(),
            noop: true,
            hits: Vec::new(),
            duration_us: 0,
        };
        assert!(noop.render_human().contains("too short"));

        let empty = SearchResults {
            noop: false,
            ..noop
        };
        assert_eq!(empty.render_human(), "No results found\n");
    }

    #[test]
    fn test_json_output() {
        let out = render_result(&hits(), &args(&["--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["noop"], false);
        assert_eq!(value["hits"][0]["section_id"], "git");
    }

    #[test]
    fn test_validation_output() {
        let ok = ValidationResult {
            valid: true,
            sections: 3,
            error: None,
        };
        assert_eq!(ok.render_human(), "✓ Corpus is valid (3 sections)\n");

        let bad = ValidationResult {
            valid: false,
            sections: 0,
            error: Some("duplicate section id 'git'".to_string()),
        };
        assert!(bad.render_human().contains("duplicate section id"));
    }
}
