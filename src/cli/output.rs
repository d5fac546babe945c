//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LevTrieArgs, OutputFormat};
use crate::error::Result;
use crate::search::QueryResult;

/// Result structure for prefix completion.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub prefix: String,
    pub completions: Vec<String>,
    pub total_completions: usize,
    pub duration_ms: u64,
}

/// Result structure for fuzzy search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub max_distance: usize,
    pub hits: Vec<QueryResult>,
    pub duration_ms: u64,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub entries: usize,
    pub nodes: usize,
    pub load_duration_ms: u64,
}

/// Something the CLI can print in every output format.
pub trait Render: Serialize {
    /// Print in human-readable form.
    fn render_human(&self, args: &LevTrieArgs);
}

impl Render for CompletionResults {
    fn render_human(&self, args: &LevTrieArgs) {
        for completion in &self.completions {
            println!("{completion}");
        }
        if args.verbosity() > 1 {
            println!();
            println!("Completions: {}", self.total_completions);
            println!("Time: {}ms", self.duration_ms);
        }
    }
}

impl Render for SearchResults {
    fn render_human(&self, args: &LevTrieArgs) {
        for hit in &self.hits {
            println!("{}\t{}", hit.distance, hit.value);
        }
        if args.verbosity() > 1 {
            println!();
            println!("Hits: {}", self.hits.len());
            println!("Search time: {}ms", self.duration_ms);
        }
    }
}

impl Render for DictionaryStats {
    fn render_human(&self, _args: &LevTrieArgs) {
        println!("Dictionary Statistics:");
        println!("══════════════════════");
        println!("Path: {}", self.path);
        println!("Entries: {}", self.entries);
        println!("Nodes: {}", self.nodes);
        println!("Load time: {}ms", self.load_duration_ms);
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Render>(result: &T, args: &LevTrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.render_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LevTrieArgs) -> Result<()> {
    println!("{}", to_json(result, args.pretty)?);
    Ok(())
}

fn to_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
