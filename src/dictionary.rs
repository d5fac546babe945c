//! Loading word lists into a [`Trie`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::trie::Trie;

/// System word list checked by [`default_word_list`].
pub const SYSTEM_WORD_LIST: &str = "/usr/share/dict/words";

/// Insert one entry per line of `reader` into `trie`.
///
/// Each line is inserted exactly as written apart from its terminator
/// (`\n` or `\r\n`), so leading and trailing spaces belong to the entry.
/// Empty lines are skipped. Returns the number of lines inserted, counting
/// duplicates. Input that is not valid UTF-8 fails with an I/O error.
pub fn load_from_reader<R: BufRead>(reader: R, trie: &mut Trie) -> Result<usize> {
    let mut inserted = 0;

    for line in reader.lines() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if !word.is_empty() {
            trie.insert(word);
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Build a trie from a text file with one word per line.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut trie = Trie::new();
    let inserted = load_from_reader(BufReader::new(file), &mut trie)?;

    debug!(
        "loaded {} lines from {} ({} entries, {} nodes)",
        inserted,
        path.display(),
        trie.len(),
        trie.node_count()
    );

    Ok(trie)
}

/// The system word list, if one is installed.
pub fn default_word_list() -> Option<PathBuf> {
    let path = PathBuf::from(SYSTEM_WORD_LIST);
    path.is_file().then_some(path)
}
