//! Lexical sentiment scoring
//!
//! Produces raw positive/negative counts (not probabilities) from the
//! lowercased user corpus. The weights are intentional contract:
//! whole-word positive hits count double, partial hits ("happier"
//! matching "happy") count once, and fixed sentence patterns outweigh
//! single keywords.

use super::scan::{count_substring, count_word};
use crate::lexicon::{
    FEELING_STEMS, NEGATION_STEMS, NEGATION_VERBS, NEGATION_WORDS, NEGATIVE_FEELINGS,
    NEGATIVE_KEYWORDS, POSITIVE_FEELINGS, POSITIVE_KEYWORDS, PROGRESS_STEMS, PROGRESS_WORDS,
};

/// Raw sentiment signal extracted from a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScores {
    pub positive: u32,
    pub negative: u32,
}

impl SentimentScores {
    /// Total signal volume.
    pub fn total(&self) -> u32 {
        self.positive + self.negative
    }
}

/// Score a lowercased corpus against the sentiment lexicon.
///
/// An empty corpus carries no signal and scores (0, 0).
pub fn score_corpus(corpus: &str) -> SentimentScores {
    if corpus.is_empty() {
        return SentimentScores::default();
    }

    let mut scores = SentimentScores::default();

    // Positive keywords: exact word hits x2, remaining substring hits x1.
    for keyword in POSITIVE_KEYWORDS {
        let exact = count_word(corpus, keyword);
        let partial = count_substring(corpus, keyword).saturating_sub(exact);
        scores.positive += exact * 2 + partial;
    }

    // Positive sentence patterns: x3 each.
    for stem in FEELING_STEMS {
        for feeling in POSITIVE_FEELINGS {
            scores.positive += count_substring(corpus, &format!("{stem} {feeling}")) * 3;
        }
    }
    for stem in PROGRESS_STEMS {
        for word in PROGRESS_WORDS {
            scores.positive += count_substring(corpus, &format!("{stem} {word}")) * 3;
        }
    }

    // Negative keywords: exact word hits only, x1.
    for keyword in NEGATIVE_KEYWORDS {
        scores.negative += count_word(corpus, keyword);
    }

    // Negative sentence patterns: x2 each.
    for stem in FEELING_STEMS {
        for feeling in NEGATIVE_FEELINGS {
            scores.negative += count_substring(corpus, &format!("{stem} {feeling}")) * 2;
        }
    }
    for stem in NEGATION_STEMS {
        for verb in NEGATION_VERBS {
            for word in NEGATION_WORDS {
                scores.negative += count_substring(corpus, &format!("{stem} {verb} {word}")) * 2;
            }
        }
    }

    tracing::debug!(
        positive = scores.positive,
        negative = scores.negative,
        "Scored sentiment"
    );

    scores
}

/// Plain word-boundary keyword counts, without pattern or partial-hit
/// weighting. Used by the strength/growth classifier for per-topic
/// positive-vs-negative comparison.
pub fn keyword_counts(corpus: &str) -> (u32, u32) {
    let positive = POSITIVE_KEYWORDS
        .iter()
        .map(|keyword| count_word(corpus, keyword))
        .sum();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .map(|keyword| count_word(corpus, keyword))
        .sum();
    (positive, negative)
}
