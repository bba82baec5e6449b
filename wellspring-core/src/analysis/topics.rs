//! Topic extraction
//!
//! Ranks conversation topics from the lowercased user corpus using the
//! synonym table, explicit "talk about X" requests, and a naive
//! first-content-word fallback when nothing else matched.

use super::scan::count_word;
use crate::lexicon::{STOP_WORDS, TOPIC_SYNONYMS};

/// Phrase prefixes that introduce an explicit topic request.
const REQUEST_PREFIXES: &[&str] = &["i want to", "let's", "i'd like to", "can we"];
const REQUEST_VERBS: &[&str] = &["talk", "chat", "discuss"];

/// Explicit request credit when the word maps to a known topic.
const KNOWN_REQUEST_CREDIT: u32 = 3;
/// Explicit request credit for an ad-hoc topic.
const ADHOC_REQUEST_CREDIT: u32 = 2;

/// Extract up to 5 topics from the corpus, ordered by descending count
/// with ties broken by first-seen order. Returns an empty list when no
/// heuristic finds anything; the engine substitutes defaults one level up.
pub fn extract_topics(corpus: &str) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();

    // Synonym-table pass.
    for (label, synonyms) in TOPIC_SYNONYMS {
        let hits: u32 = synonyms.iter().map(|s| count_word(corpus, s)).sum();
        if hits > 0 {
            credit(&mut counts, label, hits);
        }
    }

    // Explicit "let's talk about X" requests.
    for prefix in REQUEST_PREFIXES {
        for verb in REQUEST_VERBS {
            let pattern = format!("{prefix} {verb} about ");
            for (idx, _) in corpus.match_indices(&pattern) {
                let rest = &corpus[idx + pattern.len()..];
                let word: String = rest.chars().take_while(|c| c.is_alphanumeric()).collect();
                if word.is_empty() {
                    continue;
                }
                match known_topic_for(&word) {
                    Some(label) => credit(&mut counts, label, KNOWN_REQUEST_CREDIT),
                    None => credit(&mut counts, &word, ADHOC_REQUEST_CREDIT),
                }
            }
        }
    }

    // Naive fallback: first content word of each non-trivial sentence.
    if counts.is_empty() {
        for sentence in corpus.split(['.', '!', '?']) {
            let sentence = sentence.trim();
            if sentence.len() <= 10 {
                continue;
            }
            if let Some(word) = first_content_word(sentence) {
                credit(&mut counts, word, 1);
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(5);
    counts.into_iter().map(|(label, _)| label).collect()
}

/// Resolve a requested word against the synonym table. A word counts as
/// known when it equals or contains one of a topic's synonyms.
fn known_topic_for(word: &str) -> Option<&'static str> {
    TOPIC_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| word == *s || word.contains(s)))
        .map(|(label, _)| *label)
}

/// First word longer than 3 characters that is not a stop word.
fn first_content_word(sentence: &str) -> Option<&str> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|w| w.len() > 3 && !STOP_WORDS.contains(w))
}

fn credit(counts: &mut Vec<(String, u32)>, label: &str, amount: u32) {
    match counts.iter_mut().find(|(existing, _)| existing == label) {
        Some((_, count)) => *count += amount,
        None => counts.push((label.to_string(), amount)),
    }
}
