//! Command implementations for the levtrie CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary;
use crate::error::Result;
use crate::search::{SearchConfig, distance_bound};
use crate::trie::Trie;

/// Execute a CLI command.
pub fn execute_command(args: LevTrieArgs) -> Result<()> {
    match &args.command {
        Command::Complete(complete_args) => output_result(&complete(complete_args)?, &args),
        Command::Search(search_args) => output_result(&search(search_args)?, &args),
        Command::Stats(stats_args) => output_result(&stats(stats_args)?, &args),
    }
}

/// Complete a prefix against a dictionary.
pub fn complete(args: &CompleteArgs) -> Result<CompletionResults> {
    let trie = load(&args.dictionary)?;

    let start_time = Instant::now();
    let mut completions = trie.suffix(&args.prefix);
    let total_completions = completions.len();
    if let Some(limit) = args.limit {
        completions.truncate(limit);
    }

    Ok(CompletionResults {
        prefix: args.prefix.clone(),
        completions,
        total_completions,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Fuzzy search a dictionary.
pub fn search(args: &SearchArgs) -> Result<SearchResults> {
    let max_distance = distance_bound(args.max_distance)?;
    let trie = load(&args.dictionary)?;

    let mut config = SearchConfig::new(max_distance);
    if let Some(limit) = args.limit {
        config = config.with_limit(limit);
    }

    let start_time = Instant::now();
    let hits = trie.search_with_config(&args.query, &config);

    Ok(SearchResults {
        query: args.query.clone(),
        max_distance,
        hits,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Load a dictionary and report its size.
pub fn stats(args: &StatsArgs) -> Result<DictionaryStats> {
    let start_time = Instant::now();
    let trie = load(&args.dictionary)?;

    Ok(DictionaryStats {
        path: args.dictionary.display().to_string(),
        entries: trie.len(),
        nodes: trie.node_count(),
        load_duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn load(path: &Path) -> Result<Trie> {
    info!("Loading dictionary from: {}", path.display());
    let trie = dictionary::load_from_file(path)?;
    info!("Loaded {} entries", trie.len());
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_complete() {
        let file = word_file(&["zygote", "zygotes", "zygoma", "zebra"]);
        let results = complete(&CompleteArgs {
            dictionary: file.path().to_path_buf(),
            prefix: "zygo".to_string(),
            limit: Some(2),
        })
        .unwrap();

        assert_eq!(results.completions, vec!["zygoma", "zygote"]);
        assert_eq!(results.total_completions, 3);
    }

    #[test]
    fn test_search() {
        let file = word_file(&["accidia", "accidie", "accident"]);
        let results = search(&SearchArgs {
            dictionary: file.path().to_path_buf(),
            query: "accidia".to_string(),
            max_distance: 1,
            limit: None,
        })
        .unwrap();

        assert_eq!(results.max_distance, 1);
        assert_eq!(results.hits.len(), 2);
        assert_eq!(results.hits[0].value, "accidia");
        assert_eq!(results.hits[1].value, "accidie");
    }

    #[test]
    fn test_search_limit_keeps_closest() {
        let file = word_file(&["cot", "bat", "cut", "cat"]);
        let results = search(&SearchArgs {
            dictionary: file.path().to_path_buf(),
            query: "cat".to_string(),
            max_distance: 1,
            limit: Some(2),
        })
        .unwrap();

        let values: Vec<&str> = results.hits.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(values, vec!["cat", "bat"]);
    }

    #[test]
    fn test_search_negative_distance() {
        // Rejected before the dictionary is opened.
        let err = search(&SearchArgs {
            dictionary: "/nonexistent/levtrie/words.txt".into(),
            query: "accidia".to_string(),
            max_distance: -1,
            limit: None,
        })
        .unwrap_err();

        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_stats() {
        let file = word_file(&["ab", "ac", "ab"]);
        let stats = stats(&StatsArgs {
            dictionary: file.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(stats.entries, 2);
        assert_eq!(stats.nodes, 4);
    }
}
