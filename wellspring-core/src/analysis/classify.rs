//! Strength/growth classification
//!
//! Partitions extracted topics into positive-associated and
//! negative-associated by recounting sentiment keywords over only the
//! user messages that mention each topic. Template choice is random per
//! item; the RNG is injected so tests stay deterministic.

use super::sentiment::keyword_counts;
use crate::lexicon::{
    DEFAULT_GROWTH_AREAS, DEFAULT_STRENGTHS, GROWTH_TEMPLATES, STRENGTH_TEMPLATES,
};
use crate::types::{Message, Sender};
use rand::Rng;

/// Per-list cap on generated items.
const MAX_ITEMS: usize = 3;

/// Qualitative output of topic classification.
#[derive(Debug, Clone, Default)]
pub struct TopicClassification {
    pub strengths: Vec<String>,
    pub areas_for_growth: Vec<String>,
}

/// Classify topics against the user's own wording.
///
/// A topic is positive-associated when the messages mentioning it carry
/// more positive than negative keywords, negative-associated for the
/// reverse; ties land in neither list. Empty lists fall back to fixed
/// defaults.
pub fn classify_topics<R: Rng>(
    topics: &[String],
    messages: &[Message],
    rng: &mut R,
) -> TopicClassification {
    let mut positive_topics = Vec::new();
    let mut negative_topics = Vec::new();

    for topic in topics {
        let scoped = topic_corpus(topic, messages);
        if scoped.is_empty() {
            continue;
        }
        let (positive, negative) = keyword_counts(&scoped);
        if positive > negative {
            positive_topics.push(topic.as_str());
        } else if negative > positive {
            negative_topics.push(topic.as_str());
        }
    }

    let strengths = render(&positive_topics, STRENGTH_TEMPLATES, DEFAULT_STRENGTHS, rng);
    let areas_for_growth = render(&negative_topics, GROWTH_TEMPLATES, DEFAULT_GROWTH_AREAS, rng);

    TopicClassification {
        strengths,
        areas_for_growth,
    }
}

/// Lowercased concatenation of the user messages containing the topic's
/// literal substring.
fn topic_corpus(topic: &str, messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.sender == Sender::User)
        .map(|m| m.text.to_lowercase())
        .filter(|text| text.contains(topic))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render<R: Rng>(
    topics: &[&str],
    templates: &[&str],
    defaults: &[&str],
    rng: &mut R,
) -> Vec<String> {
    if topics.is_empty() {
        return defaults.iter().map(|s| s.to_string()).collect();
    }
    topics
        .iter()
        .take(MAX_ITEMS)
        .map(|topic| {
            let template = templates[rng.gen_range(0..templates.len())];
            template.replace("{}", topic)
        })
        .collect()
}
