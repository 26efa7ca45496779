//! Command implementations for the Atlas CLI.

use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::{Corpus, CorpusSnapshot, parent_ids};
use crate::error::Result;
use crate::navigation::{NavigationConfig, Navigator, SiteNavigator};
use crate::query::Query;
use crate::search::{SearchConfig, SearchEngine, Snippeter};

/// Execute a CLI command.
pub fn execute_command(args: AtlasArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_corpus(search_args.clone(), &args),
        Command::Snippet(snippet_args) => snippet_text(snippet_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Validate(validate_args) => validate_corpus(validate_args.clone(), &args),
        Command::Navigate(navigate_args) => navigate(navigate_args.clone(), &args),
    }
}

/// Load the search configuration, falling back to defaults.
pub fn load_config(args: &AtlasArgs) -> Result<SearchConfig> {
    match args.config {
        Some(ref path) => {
            info!("loading search configuration from {}", path.display());
            SearchConfig::from_json_file(path)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    info!("loading corpus from {}", path.display());
    Corpus::from_json_file(path)
}

/// Search a corpus snapshot.
fn search_corpus(args: SearchArgs, cli_args: &AtlasArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if let Some(limit) = args.limit {
        config = config.max_results(limit);
    }
    if let Some(context) = args.context {
        config.highlight = config.highlight.context_chars(context);
    }
    config.validate()?;

    let results = run_search(&args.corpus, &args.query, config)?;
    output_result("Search completed", &results, cli_args)
}

/// Load a corpus and run one query against it.
pub fn run_search(corpus: &Path, query: &str, config: SearchConfig) -> Result<SearchResults> {
    let engine = SearchEngine::new(load_corpus(corpus)?, config);

    let start_time = Instant::now();
    let outcome = engine.search(query);
    let duration = start_time.elapsed();

    Ok(SearchResults {
        query: query.to_string(),
        noop: outcome.is_noop(),
        hits: outcome.into_results(),
        duration_us: elapsed_micros(duration),
    })
}

/// Whole microseconds in `duration`, saturating at `u64::MAX`.
fn elapsed_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Snippet a single text.
fn snippet_text(args: SnippetArgs, cli_args: &AtlasArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let snippeter = Snippeter::new(config.highlight);

    let snippet = match Query::parse(&args.query, config.min_query_chars) {
        Some(query) => snippeter.snippet(&args.text, query.as_str()),
        None => {
            debug!("query {:?} too short; snippeting without highlights", args.query);
            snippeter.snippet(&args.text, "")
        }
    };

    output_result(
        "Snippet",
        &SnippetResult {
            query: args.query,
            snippet,
        },
        cli_args,
    )
}

/// Show corpus statistics.
fn show_stats(args: StatsArgs, cli_args: &AtlasArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    output_result("Corpus statistics", &corpus_stats(&corpus, args.detailed), cli_args)
}

/// Compute statistics for a corpus.
pub fn corpus_stats(corpus: &Corpus, detailed: bool) -> CorpusStats {
    let groups: HashSet<&str> = parent_ids(corpus);
    let section_stats = detailed.then(|| {
        corpus
            .iter()
            .map(|section| SectionStats {
                id: section.id().to_string(),
                units: section.units().len(),
                characters: section.units().iter().map(|u| u.text().chars().count()).sum(),
            })
            .collect()
    });

    CorpusStats {
        total_sections: corpus.len(),
        total_units: corpus.unit_count(),
        untitled_sections: corpus.iter().filter(|s| s.title().is_empty()).count(),
        subsections: corpus.iter().filter(|s| s.parent_id().is_some()).count(),
        section_groups: groups.len(),
        section_stats,
    }
}

/// Validate a corpus snapshot.
fn validate_corpus(args: ValidateArgs, cli_args: &AtlasArgs) -> Result<()> {
    let snapshot = CorpusSnapshot::from_json_file(&args.corpus)?;
    let sections = snapshot.sections.len();

    let result = match snapshot.into_corpus() {
        Ok(_) => ValidationResult {
            valid: true,
            sections,
            error: None,
        },
        Err(e) => ValidationResult {
            valid: false,
            sections,
            error: Some(e.to_string()),
        },
    };

    output_result("Validation finished", &result, cli_args)
}

/// Show the page state after navigating to a section.
fn navigate(args: NavigateArgs, cli_args: &AtlasArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let mut config = NavigationConfig::default();
    if let Some(site_name) = args.site_name {
        config.site_name = site_name;
    }

    let result = navigation_state(corpus, config, &args.section)?;
    output_result("Navigation", &result, cli_args)
}

/// Load the home page, then activate `section`.
pub fn navigation_state(
    corpus: Corpus,
    config: NavigationConfig,
    section: &str,
) -> Result<NavigationResult> {
    let mut navigator = SiteNavigator::new(corpus, config);
    navigator.initial_load("");
    navigator.activate(section.strip_prefix('#').unwrap_or(section))?;

    Ok(NavigationResult {
        section: navigator.current().to_string(),
        page_title: navigator.page_title(),
        back_target: navigator.back_target().map(str::to_string),
        back_label: navigator.back_label(),
    })
}
