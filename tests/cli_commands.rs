use std::io::Write;

use clap::Parser;
use levtrie::cli::{self, Command, LevTrieArgs};
use tempfile::NamedTempFile;

fn word_file(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{word}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn parse(args: &[&str]) -> LevTrieArgs {
    LevTrieArgs::try_parse_from(args).unwrap()
}

#[test]
fn test_search_through_parsed_args() {
    let file = word_file(&["accidia", "accidie", "accident"]);
    let path = file.path().to_str().unwrap();
    let args = parse(&["levtrie", "-q", "search", path, "accidia", "-d", "1"]);

    let Command::Search(search_args) = &args.command else {
        panic!("Expected Search command");
    };
    let results = cli::search(search_args).unwrap();
    let values: Vec<&str> = results.hits.iter().map(|h| h.value.as_str()).collect();
    assert_eq!(values, vec!["accidia", "accidie"]);

    assert!(cli::execute_command(args).is_ok());
}

#[test]
fn test_negative_distance_fails_execution() {
    let file = word_file(&["accidia"]);
    let path = file.path().to_str().unwrap();
    let args = parse(&["levtrie", "-q", "search", path, "accidia", "-d", "-1"]);

    let err = cli::execute_command(args).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_complete_json() {
    let file = word_file(&["zygote", "zygotes", "zygoma"]);
    let path = file.path().to_str().unwrap();
    let args = parse(&["levtrie", "-f", "json", "complete", path, "zygo"]);

    assert!(cli::execute_command(args).is_ok());
}

#[test]
fn test_missing_dictionary() {
    let args = parse(&["levtrie", "stats", "/nonexistent/levtrie/words.txt"]);
    assert!(cli::execute_command(args).is_err());
}
