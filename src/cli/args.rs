//! Command line argument parsing for the Atlas CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Atlas - in-page search for static documentation sites
#[derive(Parser, Debug, Clone)]
#[command(name = "atlas-search")]
#[command(about = "Search, snippet and navigate documentation section snapshots")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AtlasArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "ATLAS_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AtlasArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus snapshot
    Search(SearchArgs),

    /// Highlight a query inside a piece of text
    Snippet(SnippetArgs),

    /// Show corpus statistics
    Stats(StatsArgs),

    /// Validate a corpus snapshot
    Validate(ValidateArgs),

    /// Show the page state after navigating to a section
    Navigate(NavigateArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus snapshot (JSON)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Characters of context on each side of the match
    #[arg(short, long)]
    pub context: Option<usize>,
}

/// Arguments for snippeting a single text
#[derive(Parser, Debug, Clone)]
pub struct SnippetArgs {
    /// Text to snippet
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus snapshot (JSON)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Include per-section statistics
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for corpus validation
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the corpus snapshot (JSON)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

/// Arguments for navigation
#[derive(Parser, Debug, Clone)]
pub struct NavigateArgs {
    /// Path to the corpus snapshot (JSON)
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Section id or URL fragment (e.g. "#ssh-keys")
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Site name used in page titles
    #[arg(long)]
    pub site_name: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_search_command() {
        let args = AtlasArgs::try_parse_from([
            "atlas-search",
            "search",
            "docs.json",
            "ssh keygen",
            "--limit",
            "5",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.corpus, PathBuf::from("docs.json"));
            assert_eq!(search_args.query, "ssh keygen");
            assert_eq!(search_args.limit, Some(5));
            assert_eq!(search_args.context, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_snippet_command() {
        let args =
            AtlasArgs::try_parse_from(["atlas-search", "snippet", "Use git init.", "git"]).unwrap();

        if let Command::Snippet(snippet_args) = args.command {
            assert_eq!(snippet_args.text, "Use git init.");
            assert_eq!(snippet_args.query, "git");
        } else {
            panic!("Expected Snippet command");
        }
    }

    #[test]
    fn test_navigate_command() {
        let args = AtlasArgs::try_parse_from([
            "atlas-search",
            "navigate",
            "docs.json",
            "#ssh-keys",
            "--site-name",
            "Handbook",
        ])
        .unwrap();

        if let Command::Navigate(nav_args) = args.command {
            assert_eq!(nav_args.section, "#ssh-keys");
            assert_eq!(nav_args.site_name.as_deref(), Some("Handbook"));
        } else {
            panic!("Expected Navigate command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = AtlasArgs::try_parse_from(["atlas-search", "validate", "docs.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args =
            AtlasArgs::try_parse_from(["atlas-search", "-vv", "validate", "docs.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            AtlasArgs::try_parse_from(["atlas-search", "--quiet", "validate", "docs.json"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            AtlasArgs::try_parse_from(["atlas-search", "--format", "json", "stats", "docs.json"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
