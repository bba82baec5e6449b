//! Text scanning primitives
//!
//! The pipeline works over a lowercased corpus; these helpers count
//! substring and word-boundary occurrences without any tokenization.

/// Count non-overlapping substring occurrences of `needle` in `haystack`.
pub fn count_substring(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count() as u32
}

/// Count occurrences of `word` bounded by non-alphanumeric characters
/// (or the start/end of the corpus) on both sides.
pub fn count_word(haystack: &str, word: &str) -> u32 {
    if word.is_empty() {
        return 0;
    }
    let mut count = 0;
    for (idx, matched) in haystack.match_indices(word) {
        let before_ok = haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[idx + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            count += 1;
        }
    }
    count
}

/// Whether `haystack` contains `word` as a whole word.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    count_word(haystack, word) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_substring() {
        assert_eq!(count_substring("happy happier happiest", "happy"), 1);
        assert_eq!(count_substring("happy happier happiest", "happ"), 3);
        assert_eq!(count_substring("anything", ""), 0);
    }

    #[test]
    fn test_count_word_requires_boundaries() {
        assert_eq!(count_word("i am happy, so happy", "happy"), 2);
        assert_eq!(count_word("unhappy happier", "happy"), 0);
        assert_eq!(count_word("rest. rest! resting", "rest"), 2);
    }

    #[test]
    fn test_word_at_corpus_edges() {
        assert_eq!(count_word("sleep is hard", "sleep"), 1);
        assert_eq!(count_word("i cannot sleep", "sleep"), 1);
        assert_eq!(count_word("sleep", "sleep"), 1);
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("talked about work today", "work"));
        assert!(!contains_word("my coworkers", "work"));
    }
}
