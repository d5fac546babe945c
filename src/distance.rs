//! Levenshtein distance between two whole strings.
//!
//! These need no trie: they fill the edit-distance matrix for one pair of
//! strings directly, with unit cost for insert, delete and substitute over
//! `char`s. The trie walk in [`crate::search`] is checked against them.

/// Edit distance between `source` and `target`, from the complete matrix.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    // table[i][j]: cost of turning source[..i] into target[..j]
    let mut table = vec![vec![0usize; target.len() + 1]; source.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, &s) in source.iter().enumerate() {
        for (j, &t) in target.iter().enumerate() {
            let substitute = table[i][j] + usize::from(s != t);
            let delete = table[i][j + 1] + 1;
            let insert = table[i + 1][j] + 1;
            table[i + 1][j + 1] = substitute.min(delete).min(insert);
        }
    }

    table[source.len()][target.len()]
}

/// Edit distance between `source` and `target` if it is at most `bound`.
///
/// Keeps a single row and gives up as soon as a whole row exceeds `bound`,
/// which is the same pruning rule the trie walk applies per subtree.
pub fn levenshtein_distance_within(source: &str, target: &str, bound: usize) -> Option<usize> {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    if source.len().abs_diff(target.len()) > bound {
        return None;
    }

    let mut row: Vec<usize> = (0..=target.len()).collect();
    for (i, &s) in source.iter().enumerate() {
        // Cell diagonally up-left of the one being written.
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &t) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (diagonal + usize::from(s != t))
                .min(above + 1)
                .min(row[j] + 1);
            diagonal = above;
        }

        if row.iter().all(|&cost| cost > bound) {
            return None;
        }
    }

    row.last().copied().filter(|&distance| distance <= bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        // A swap costs two edits here.
        assert_eq!(levenshtein_distance("search", "serach"), 2);
        assert_eq!(levenshtein_distance("accidia", "accident"), 3);
    }

    #[test]
    fn test_counts_code_points() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
        assert_eq!(levenshtein_distance("", "日本語"), 3);
    }

    #[test]
    fn test_levenshtein_distance_within() {
        assert_eq!(levenshtein_distance_within("kitten", "sitting", 3), Some(3));
        assert_eq!(levenshtein_distance_within("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_within("search", "search", 0), Some(0));
        assert_eq!(levenshtein_distance_within("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_within("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_within("", "ab", 2), Some(2));
        assert_eq!(levenshtein_distance_within("ab", "", 1), None);
        assert_eq!(levenshtein_distance_within("café", "cafe", 0), None);
    }
}
