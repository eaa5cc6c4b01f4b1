//! The static mood catalog and per-description lookup tables.
//!
//! The catalog is fixed at compile time and never mutated. Lookups by
//! description never fail: unknown descriptions fall back to the defaults in
//! [`crate::constants`].

use crate::constants::{DEFAULT_MOOD_COLOR, DEFAULT_MOOD_EMOJI, DEFAULT_SENTIMENT_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A mood as recorded in an entry.
///
/// Entries carry their own copy of the mood so that stored data stays readable
/// even if the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mood {
    pub emoji: String,
    pub description: String,
    pub intensity: i8,
}

impl Mood {
    /// Category implied by the sign of the intensity.
    pub fn tone(&self) -> MoodCategory {
        match self.intensity {
            i if i > 0 => MoodCategory::Positive,
            i if i < 0 => MoodCategory::Challenging,
            _ => MoodCategory::Neutral,
        }
    }
}

/// The three groups moods are presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Challenging,
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Challenging => "Challenging",
        };
        f.write_str(name)
    }
}

/// A catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDefinition {
    pub emoji: &'static str,
    pub description: &'static str,
    pub intensity: i8,
}

impl MoodDefinition {
    pub fn to_mood(&self) -> Mood {
        Mood {
            emoji: self.emoji.to_string(),
            description: self.description.to_string(),
            intensity: self.intensity,
        }
    }
}

/// A category and the moods listed under it.
#[derive(Debug, Clone, Copy)]
pub struct CatalogCategory {
    pub category: MoodCategory,
    pub moods: &'static [MoodDefinition],
}

const fn def(emoji: &'static str, description: &'static str, intensity: i8) -> MoodDefinition {
    MoodDefinition {
        emoji,
        description,
        intensity,
    }
}

static CATALOG: [CatalogCategory; 3] = [
    CatalogCategory {
        category: MoodCategory::Positive,
        moods: &[
            def("😊", "Happy", 1),
            def("🤩", "Excited", 2),
            def("😌", "Calm", 1),
            def("😇", "Grateful", 1),
        ],
    },
    CatalogCategory {
        category: MoodCategory::Neutral,
        moods: &[
            def("😐", "Neutral", 0),
            def("🤔", "Thoughtful", 0),
            def("😴", "Tired", 0),
        ],
    },
    CatalogCategory {
        category: MoodCategory::Challenging,
        moods: &[
            def("😢", "Sad", -1),
            def("😠", "Angry", -2),
            def("😤", "Frustrated", -1),
            def("😰", "Anxious", -1),
        ],
    },
];

// Display colors per description.
const MOOD_COLORS: &[(&str, &str)] = &[
    ("Happy", "#4CAF50"),
    ("Excited", "#FF6B6B"),
    ("Neutral", "#FFC107"),
    ("Sad", "#2196F3"),
    ("Angry", "#FF5722"),
    ("Tired", "#9C27B0"),
    ("Calm", "#4CAF50"),
    ("Frustrated", "#FF9800"),
    ("Grateful", "#4CAF50"),
    ("Thoughtful", "#FFC107"),
    ("Anxious", "#FF5722"),
];

const DEFAULT_SENTIMENT_SCORES: &[(&str, u8)] = &[
    ("Happy", 5),
    ("Excited", 5),
    ("Grateful", 4),
    ("Calm", 4),
    ("Neutral", 3),
    ("Thoughtful", 3),
    ("Tired", 2),
    ("Sad", 2),
    ("Frustrated", 1),
    ("Anxious", 1),
    ("Angry", 1),
];

/// All catalog categories in display order.
pub fn categories() -> &'static [CatalogCategory] {
    &CATALOG
}

/// Every catalog mood, in display order.
pub fn all() -> impl Iterator<Item = &'static MoodDefinition> {
    CATALOG.iter().flat_map(|category| category.moods.iter())
}

fn definition(description: &str) -> Option<&'static MoodDefinition> {
    all().find(|mood| mood.description.eq_ignore_ascii_case(description.trim()))
}

/// Looks up a catalog mood by description, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use moodlog::catalog;
///
/// let mood = catalog::find("happy").unwrap();
/// assert_eq!(mood.description, "Happy");
/// assert_eq!(mood.intensity, 1);
/// assert!(catalog::find("Elated").is_none());
/// ```
pub fn find(description: &str) -> Option<Mood> {
    definition(description).map(MoodDefinition::to_mood)
}

/// Display color for a description, or the default color if unknown.
pub fn color_for(description: &str) -> &'static str {
    MOOD_COLORS
        .iter()
        .find(|(name, _)| *name == description)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_MOOD_COLOR)
}

/// Emoji for a description, or the default emoji if unknown.
pub fn emoji_for(description: &str) -> &'static str {
    all()
        .find(|mood| mood.description == description)
        .map(|mood| mood.emoji)
        .unwrap_or(DEFAULT_MOOD_EMOJI)
}

/// Maps mood descriptions to sentiment scores on a 1 to 5 scale.
///
/// The default table covers the catalog; anything else scores
/// [`DEFAULT_SENTIMENT_SCORE`].
#[derive(Debug, Clone)]
pub struct SentimentTable {
    scores: HashMap<String, u8>,
    fallback: u8,
}

impl Default for SentimentTable {
    fn default() -> Self {
        SentimentTable {
            scores: DEFAULT_SENTIMENT_SCORES
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
            fallback: DEFAULT_SENTIMENT_SCORE,
        }
    }
}

impl SentimentTable {
    /// An empty table where every description scores `fallback`.
    pub fn empty(fallback: u8) -> Self {
        SentimentTable {
            scores: HashMap::new(),
            fallback,
        }
    }

    /// Returns the table with `description` scored as `score`.
    pub fn with_score(mut self, description: &str, score: u8) -> Self {
        self.scores.insert(description.to_string(), score);
        self
    }

    pub fn score(&self, description: &str) -> u8 {
        self.scores
            .get(description)
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_categories_in_order() {
        let names: Vec<MoodCategory> = categories().iter().map(|c| c.category).collect();
        assert_eq!(
            names,
            vec![
                MoodCategory::Positive,
                MoodCategory::Neutral,
                MoodCategory::Challenging
            ]
        );
        assert_eq!(all().count(), 11);
    }

    #[test]
    fn test_category_intensities_match_tone() {
        for category in categories() {
            for mood in category.moods {
                assert_eq!(
                    mood.to_mood().tone(),
                    category.category,
                    "{} is listed under {} but its intensity says otherwise",
                    mood.description,
                    category.category
                );
            }
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let angry = find("  ANGRY ").unwrap();
        assert_eq!(angry.emoji, "😠");
        assert_eq!(angry.intensity, -2);
    }

    #[test]
    fn test_unknown_descriptions_fall_back() {
        assert_eq!(color_for("Elated"), DEFAULT_MOOD_COLOR);
        assert_eq!(emoji_for("Elated"), DEFAULT_MOOD_EMOJI);
        assert_eq!(SentimentTable::default().score("Elated"), 3);
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(color_for("Sad"), "#2196F3");
        assert_eq!(emoji_for("Thoughtful"), "🤔");
    }

    #[test]
    fn test_every_catalog_mood_has_a_color_and_score() {
        let table = SentimentTable::default();
        for mood in all() {
            assert_ne!(color_for(mood.description), DEFAULT_MOOD_COLOR);
            assert!(
                DEFAULT_SENTIMENT_SCORES
                    .iter()
                    .any(|(name, _)| *name == mood.description),
                "{} missing from sentiment table",
                mood.description
            );
            assert!((1..=5).contains(&table.score(mood.description)));
        }
    }

    #[test]
    fn test_sentiment_table_overrides() {
        let table = SentimentTable::empty(2).with_score("Happy", 5);
        assert_eq!(table.score("Happy"), 5);
        assert_eq!(table.score("Sad"), 2);
    }
}
