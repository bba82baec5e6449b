//! Static lexicon tables
//!
//! Read-only configuration data for the analysis pipeline: sentiment
//! keywords and phrase stems, topic synonym groups, emotion keyword
//! groups, strength/growth templates, and the practice library.
//!
//! Everything here is `const` and safely shared across concurrent
//! analysis runs. The keyword weights applied by the sentiment scorer
//! live in `analysis::sentiment`; these tables are pure data.

// ============================================
// Sentiment keywords
// ============================================

/// Words scored as positive signal. Exact word-boundary hits are worth
/// more than partial/stemmed hits ("happier" still matches "happy").
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "happy",
    "joy",
    "grateful",
    "excited",
    "calm",
    "peaceful",
    "hopeful",
    "proud",
    "confident",
    "love",
    "great",
    "good",
    "better",
    "relaxed",
    "motivated",
    "energized",
    "accomplished",
    "content",
    "optimistic",
    "thankful",
    "rested",
    "progress",
    "improving",
    "wonderful",
    "amazing",
];

/// Words scored as negative signal. Only exact word-boundary hits count.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "stressed",
    "tired",
    "exhausted",
    "angry",
    "lonely",
    "hopeless",
    "overwhelmed",
    "afraid",
    "scared",
    "frustrated",
    "upset",
    "miserable",
    "worthless",
    "guilty",
    "panic",
    "insomnia",
    "crying",
    "hurt",
    "numb",
    "terrible",
    "awful",
];

// ============================================
// Sentence phrase patterns
// ============================================
//
// Phrase patterns are composed as cross products of stems and endings
// ("i feel" x "happy" => "i feel happy"). The scorer counts substring
// occurrences of each composed phrase in the lowercased corpus.

/// First-person feeling stems ("{stem} {feeling}").
pub const FEELING_STEMS: &[&str] = &["i am", "i'm", "i feel", "feeling"];

/// Positive feeling endings for [`FEELING_STEMS`].
pub const POSITIVE_FEELINGS: &[&str] =
    &["happy", "good", "great", "fine", "better", "okay", "alright"];

/// Negative feeling endings for [`FEELING_STEMS`].
pub const NEGATIVE_FEELINGS: &[&str] =
    &["sad", "bad", "depressed", "anxious", "worried", "stressed", "tired"];

/// Progress stems for positive patterns ("doing well", "going great").
pub const PROGRESS_STEMS: &[&str] = &["doing", "going"];

/// Positive progress endings for [`PROGRESS_STEMS`].
pub const PROGRESS_WORDS: &[&str] = &["well", "good", "great", "fine", "better"];

/// Negation stems for negative patterns ("not feeling well").
pub const NEGATION_STEMS: &[&str] = &["not", "don't", "can't", "cannot"];

/// Verbs following a negation stem.
pub const NEGATION_VERBS: &[&str] = &["feel", "feeling", "doing", "going"];

/// Endings following a negated verb.
pub const NEGATION_WORDS: &[&str] = &["well", "good", "great"];

/// Direct happy statements that boost the `happy` emotion independently
/// of keyword counts.
pub const HAPPY_PHRASES: &[&str] = &[
    "i am happy",
    "i'm happy",
    "i feel happy",
    "i feel good",
    "i feel great",
    "feeling happy",
    "feeling good",
    "feeling great",
];

// ============================================
// Topic synonym groups
// ============================================

/// Topic label -> synonyms counted toward that topic.
pub const TOPIC_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "sleep",
        &["sleep", "insomnia", "rest", "nap", "tired", "bed", "dream", "awake"],
    ),
    (
        "work",
        &["work", "job", "career", "boss", "deadline", "meeting", "coworker", "office"],
    ),
    (
        "family",
        &[
            "family", "mom", "dad", "mother", "father", "parents", "brother", "sister",
            "kids", "children",
        ],
    ),
    (
        "relationships",
        &[
            "relationship",
            "partner",
            "friend",
            "friends",
            "girlfriend",
            "boyfriend",
            "marriage",
            "dating",
            "breakup",
        ],
    ),
    (
        "anxiety",
        &["anxiety", "anxious", "panic", "worry", "worried", "nervous", "fear"],
    ),
    (
        "stress",
        &["stress", "stressed", "pressure", "overwhelmed", "burnout"],
    ),
    (
        "health",
        &["health", "doctor", "sick", "illness", "pain", "diet", "medication"],
    ),
    (
        "exercise",
        &["exercise", "workout", "gym", "running", "walking", "yoga", "fitness"],
    ),
    (
        "finances",
        &["money", "finances", "debt", "bills", "budget", "rent", "salary"],
    ),
    (
        "school",
        &["school", "college", "university", "exam", "studying", "homework", "grades"],
    ),
    (
        "loneliness",
        &["lonely", "loneliness", "alone", "isolated", "isolation"],
    ),
    (
        "self-esteem",
        &["confidence", "self-esteem", "worthless", "failure", "insecure"],
    ),
];

/// Common words skipped by the naive first-content-word topic fallback.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "that", "this", "with", "have", "from", "what", "about", "just", "like",
    "been", "they", "their", "when", "will", "would", "could", "should", "there", "because",
    "really", "very", "them", "your", "some", "much", "want", "know",
];

/// Fallback topics substituted by the engine when extraction finds nothing.
pub const DEFAULT_TOPICS: &[&str] = &["mental wellness", "self-care"];

// ============================================
// Emotion keyword groups
// ============================================

/// Emotion name -> keywords counted toward that emotion's raw intensity.
pub const EMOTION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "calm",
        &["calm", "peaceful", "relaxed", "serene", "centered", "content"],
    ),
    (
        "anxious",
        &["anxious", "anxiety", "nervous", "worried", "worry", "panic", "uneasy", "tense"],
    ),
    (
        "happy",
        &["happy", "joy", "joyful", "glad", "excited", "cheerful", "delighted", "grateful"],
    ),
    (
        "sad",
        &["sad", "down", "depressed", "unhappy", "miserable", "crying", "hopeless"],
    ),
    (
        "energetic",
        &["energetic", "energized", "motivated", "active", "productive", "alive"],
    ),
    (
        "tired",
        &["tired", "exhausted", "drained", "fatigued", "sleepy", "weary"],
    ),
];

// ============================================
// Strength / growth templates
// ============================================

/// Templates for positive-associated topics. `{}` is replaced with the
/// topic label; the template is picked at random per item.
pub const STRENGTH_TEMPLATES: &[&str] = &[
    "Self-awareness in discussing {}",
    "Openness about {}",
    "Taking positive steps with {}",
    "Building healthy habits around {}",
    "Reflecting constructively on {}",
];

/// Templates for negative-associated topics.
pub const GROWTH_TEMPLATES: &[&str] = &[
    "Managing {} more effectively",
    "Developing coping strategies for {}",
    "Finding balance with {}",
    "Reducing the impact of {} on daily life",
    "Seeking support around {}",
];

/// Defaults when no topic classifies as positive-associated.
pub const DEFAULT_STRENGTHS: &[&str] = &[
    "Commitment to self-reflection",
    "Willingness to seek support",
];

/// Defaults when no topic classifies as negative-associated.
pub const DEFAULT_GROWTH_AREAS: &[&str] = &[
    "Building a regular self-care routine",
    "Expressing feelings more openly",
];

// ============================================
// Practice library
// ============================================

/// A static practice library entry, tagged with the issues it addresses.
#[derive(Debug, Clone, Copy)]
pub struct PracticeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub frequency: &'static str,
    /// Issue tags used to filter the library against detected signals
    pub tags: &'static [&'static str],
}

/// Catalog of wellness practices. Entries tagged `general` are always
/// eligible for recommendation.
pub const PRACTICE_LIBRARY: &[PracticeTemplate] = &[
    PracticeTemplate {
        title: "Daily Mindfulness",
        description: "Spend 5 minutes focusing on your breath.",
        frequency: "daily",
        tags: &["general", "anxiety", "stress"],
    },
    PracticeTemplate {
        title: "Gratitude Journal",
        description: "Write down three things you are grateful for.",
        frequency: "daily",
        tags: &["general", "depression"],
    },
    PracticeTemplate {
        title: "Box Breathing",
        description: "Inhale, hold, exhale, and hold again for four counts each.",
        frequency: "as needed",
        tags: &["anxiety", "stress"],
    },
    PracticeTemplate {
        title: "Evening Wind-Down",
        description: "Dim the lights and step away from work an hour before bed.",
        frequency: "nightly",
        tags: &["sleep"],
    },
    PracticeTemplate {
        title: "Morning Walk",
        description: "Take a 15 minute walk outside before starting your day.",
        frequency: "daily",
        tags: &["general", "fatigue", "depression"],
    },
    PracticeTemplate {
        title: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group from toes to head.",
        frequency: "3x per week",
        tags: &["anxiety", "sleep", "stress"],
    },
    PracticeTemplate {
        title: "Reach Out to a Friend",
        description: "Message or call someone you have not spoken to in a while.",
        frequency: "weekly",
        tags: &["isolation", "depression"],
    },
    PracticeTemplate {
        title: "Digital Sunset",
        description: "Put screens away 30 minutes before bedtime.",
        frequency: "nightly",
        tags: &["sleep", "stress"],
    },
    PracticeTemplate {
        title: "Body Scan Meditation",
        description: "Slowly move attention through your body, noticing sensations.",
        frequency: "daily",
        tags: &["anxiety", "fatigue"],
    },
    PracticeTemplate {
        title: "Worry Window",
        description: "Set aside 10 scheduled minutes for worries, then let them go.",
        frequency: "daily",
        tags: &["anxiety"],
    },
    PracticeTemplate {
        title: "Energy Audit",
        description: "List what drained and what restored you this week.",
        frequency: "weekly",
        tags: &["fatigue", "stress"],
    },
    PracticeTemplate {
        title: "Join a Group Activity",
        description: "Attend one class, club, or community event.",
        frequency: "weekly",
        tags: &["isolation", "general"],
    },
];
