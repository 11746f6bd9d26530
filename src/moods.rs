//! The fixed mood taxonomy.
//!
//! Mindspace ships with exactly 15 moods, five per category. The taxonomy is
//! the sole source of truth for mood validity: the database mood table is
//! seeded from it, and entry creation rejects (primary) or skips (secondary)
//! any mood name that does not match it case-insensitively.

use std::fmt;

/// The three fixed mood buckets used by seeding and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
}

impl MoodCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Positive => "Positive",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Negative => "Negative",
        }
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mood definition from the fixed taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub name: &'static str,
    pub emoji: &'static str,
    pub category: MoodCategory,
}

/// The complete, fixed mood taxonomy.
pub const TAXONOMY: [Mood; 15] = [
    // Positive moods
    Mood { name: "Happy", emoji: "😊", category: MoodCategory::Positive },
    Mood { name: "Excited", emoji: "🤩", category: MoodCategory::Positive },
    Mood { name: "Relaxed", emoji: "😌", category: MoodCategory::Positive },
    Mood { name: "Grateful", emoji: "🙏", category: MoodCategory::Positive },
    Mood { name: "Confident", emoji: "💪", category: MoodCategory::Positive },
    // Neutral moods
    Mood { name: "Calm", emoji: "😐", category: MoodCategory::Neutral },
    Mood { name: "Thoughtful", emoji: "🤔", category: MoodCategory::Neutral },
    Mood { name: "Curious", emoji: "🧐", category: MoodCategory::Neutral },
    Mood { name: "Nostalgic", emoji: "💭", category: MoodCategory::Neutral },
    Mood { name: "Bored", emoji: "😑", category: MoodCategory::Neutral },
    // Negative moods
    Mood { name: "Sad", emoji: "😢", category: MoodCategory::Negative },
    Mood { name: "Angry", emoji: "😠", category: MoodCategory::Negative },
    Mood { name: "Stressed", emoji: "😰", category: MoodCategory::Negative },
    Mood { name: "Lonely", emoji: "😔", category: MoodCategory::Negative },
    Mood { name: "Anxious", emoji: "😟", category: MoodCategory::Negative },
];

/// Looks up a taxonomy mood by name, case-insensitively.
///
/// Returns `None` for names outside the fixed taxonomy; arbitrary mood
/// names are never valid.
pub fn find(name: &str) -> Option<&'static Mood> {
    let name = name.trim();
    TAXONOMY.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Returns the category bucket for a mood name, if it belongs to the taxonomy.
pub fn category_of(name: &str) -> Option<MoodCategory> {
    find(name).map(|m| m.category)
}
