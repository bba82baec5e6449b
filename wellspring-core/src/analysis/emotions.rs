//! Emotion/mood aggregation
//!
//! Normalizes emotion keyword hits into a 0-1 intensity map. The empty-map
//! fallback consults the draft wellness score only, so the pipeline runs
//! as two passes (draft score first, then emotions) instead of a cycle.

use super::sentiment::SentimentScores;
use crate::lexicon::{EMOTION_KEYWORDS, HAPPY_PHRASES};
use super::scan::{count_substring, count_word};
use std::collections::BTreeMap;

/// Raw count that saturates an emotion to full intensity.
const SATURATION: f64 = 5.0;
/// Bonus added to the `happy` raw count per direct happy statement.
const HAPPY_PHRASE_BONUS: u32 = 5;

/// Aggregate emotion intensities from the corpus.
///
/// `draft_score` is the sentiment-only wellness score; it is consulted
/// only when no emotion keyword matched at all.
pub fn aggregate_moods(
    corpus: &str,
    sentiment: &SentimentScores,
    draft_score: u8,
) -> BTreeMap<String, f64> {
    let mut moods = BTreeMap::new();

    for (emotion, keywords) in EMOTION_KEYWORDS {
        let mut raw: u32 = keywords.iter().map(|k| count_word(corpus, k)).sum();
        if *emotion == "happy" {
            for phrase in HAPPY_PHRASES {
                raw += count_substring(corpus, phrase) * HAPPY_PHRASE_BONUS;
            }
        }
        if raw > 0 {
            moods.insert(emotion.to_string(), intensity(raw));
        }
    }

    // Strong positive sentiment promotes `happy` even without explicit
    // happy keywords.
    if sentiment.positive > 2 * sentiment.negative {
        let current = moods.get("happy").copied().unwrap_or(0.0);
        if current < 0.5 {
            let promoted = (f64::from(sentiment.positive) / 10.0).min(1.0);
            moods.insert("happy".to_string(), promoted);
        }
    }

    if moods.is_empty() {
        moods = fallback_moods(draft_score);
    }

    for value in moods.values_mut() {
        *value = value.clamp(0.0, 1.0);
    }

    moods
}

fn intensity(raw: u32) -> f64 {
    (f64::from(raw) / SATURATION).min(1.0)
}

/// Derive a two-entry mood map from the draft score when the corpus
/// carried no emotion signal.
fn fallback_moods(draft_score: u8) -> BTreeMap<String, f64> {
    let mut moods = BTreeMap::new();
    if draft_score >= 7 {
        moods.insert("happy".to_string(), f64::from(draft_score - 5) / 5.0);
        moods.insert("calm".to_string(), 0.6);
    } else if draft_score <= 4 {
        moods.insert("sad".to_string(), f64::from(6 - draft_score) / 5.0);
        moods.insert("anxious".to_string(), 0.5);
    } else {
        moods.insert("neutral".to_string(), 0.7);
        moods.insert("calm".to_string(), 0.4);
    }
    moods
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_sentiment() -> SentimentScores {
        SentimentScores::default()
    }

    #[test]
    fn test_keyword_intensity_normalization() {
        let moods = aggregate_moods("worried worried nervous", &no_sentiment(), 5);
        assert_eq!(moods.get("anxious"), Some(&0.6));
    }

    #[test]
    fn test_intensity_saturates_at_one() {
        let corpus = "tired tired tired exhausted exhausted drained sleepy";
        let moods = aggregate_moods(corpus, &no_sentiment(), 5);
        assert_eq!(moods.get("tired"), Some(&1.0));
    }

    #[test]
    fn test_happy_phrase_bonus() {
        let moods = aggregate_moods("i feel great about it", &no_sentiment(), 5);
        // One direct phrase alone saturates happy.
        assert_eq!(moods.get("happy"), Some(&1.0));
    }

    #[test]
    fn test_sentiment_promotes_happy() {
        let sentiment = SentimentScores {
            positive: 6,
            negative: 1,
        };
        // Corpus has anxiety keywords but no happy ones.
        let moods = aggregate_moods("a nervous day", &sentiment, 5);
        assert_eq!(moods.get("happy"), Some(&0.6));
        assert!(moods.contains_key("anxious"));
    }

    #[test]
    fn test_promotion_skips_strong_happy() {
        let sentiment = SentimentScores {
            positive: 6,
            negative: 0,
        };
        let moods = aggregate_moods("happy glad excited cheerful", &sentiment, 8);
        // Keyword intensity 0.8 >= 0.5, so promotion must not overwrite it.
        assert_eq!(moods.get("happy"), Some(&0.8));
    }

    #[test]
    fn test_fallback_high_score() {
        let moods = aggregate_moods("", &no_sentiment(), 9);
        assert_eq!(moods.get("happy"), Some(&0.8));
        assert_eq!(moods.get("calm"), Some(&0.6));
        assert_eq!(moods.len(), 2);
    }

    #[test]
    fn test_fallback_low_score() {
        let moods = aggregate_moods("", &no_sentiment(), 2);
        assert_eq!(moods.get("sad"), Some(&0.8));
        assert_eq!(moods.get("anxious"), Some(&0.5));
    }

    #[test]
    fn test_fallback_neutral_score() {
        let moods = aggregate_moods("", &no_sentiment(), 5);
        assert_eq!(moods.get("neutral"), Some(&0.7));
        assert_eq!(moods.get("calm"), Some(&0.4));
    }

    #[test]
    fn test_all_intensities_clamped() {
        let corpus = "i feel great. i feel happy. feeling good. happy happy happy";
        let sentiment = SentimentScores {
            positive: 50,
            negative: 0,
        };
        for value in aggregate_moods(corpus, &sentiment, 10).values() {
            assert!((0.0..=1.0).contains(value));
        }
    }
}
