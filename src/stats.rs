//! Dashboard statistics.
//!
//! Pure computation over a user's loaded entry set. Nothing here touches the
//! database; callers pass the result of the repository's read path plus the
//! current date. Every statistic is recomputed from scratch on each request,
//! which is fine for the hundreds-to-low-thousands entry volumes a single
//! journal accumulates.

use crate::constants::{MOOD_FREQUENCY_LIMIT, TAG_USAGE_LIMIT};
use crate::db::entries::JournalEntry;
use crate::moods::{self, MoodCategory};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Entry counts per fixed mood bucket, keyed by primary mood.
///
/// Primary moods outside the taxonomy fall into none of the three counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// The full dashboard statistics block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub total_entries: usize,
    pub current_streak: usize,
    pub longest_streak: usize,
    pub missed_days: usize,
    pub mood_distribution: MoodDistribution,
    /// Top primary moods by entry count, descending. At most 5.
    pub mood_frequency: Vec<(String, usize)>,
    /// Top tags by usage count, descending. At most 10.
    pub tag_usage: Vec<(String, usize)>,
    pub average_word_count: f64,
}

impl DashboardStats {
    /// Computes all statistics over one loaded entry sequence.
    pub fn compute(entries: &[JournalEntry], today: NaiveDate) -> Self {
        DashboardStats {
            total_entries: entries.len(),
            current_streak: current_streak(entries, today),
            longest_streak: longest_streak(entries),
            missed_days: missed_days(entries),
            mood_distribution: mood_distribution(entries),
            mood_frequency: mood_frequency(entries),
            tag_usage: tag_usage(entries),
            average_word_count: average_word_count(entries),
        }
    }
}

fn distinct_dates_descending(entries: &[JournalEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    dates.dedup();
    dates.reverse();
    dates
}

/// Consecutive calendar days journaled, counted back from today or yesterday.
///
/// If the most recent entry date is neither today nor yesterday the streak
/// is broken and the count is 0.
pub fn current_streak(entries: &[JournalEntry], today: NaiveDate) -> usize {
    let dates = distinct_dates_descending(entries);
    let Some(&most_recent) = dates.first() else {
        return 0;
    };

    let yesterday = today - Days::new(1);
    if most_recent != today && most_recent != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut expected = most_recent;
    for date in dates {
        if date == expected {
            streak += 1;
            expected = expected - Days::new(1);
        } else if date < expected {
            break;
        }
    }
    streak
}

/// Longest run of consecutive calendar days with at least one entry.
pub fn longest_streak(entries: &[JournalEntry]) -> usize {
    let mut dates = distinct_dates_descending(entries);
    dates.reverse(); // ascending
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

/// Days inside the journaled span with no entry.
///
/// Span is min date to max date inclusive; 0 for an empty entry set.
pub fn missed_days(entries: &[JournalEntry]) -> usize {
    let dates = distinct_dates_descending(entries);
    let (Some(&max), Some(&min)) = (dates.first(), dates.last()) else {
        return 0;
    };

    let span = (max - min).num_days() + 1;
    (span as usize).saturating_sub(dates.len())
}

/// Entry counts per Positive/Neutral/Negative bucket, by primary mood.
pub fn mood_distribution(entries: &[JournalEntry]) -> MoodDistribution {
    let mut distribution = MoodDistribution::default();
    for entry in entries {
        match moods::category_of(&entry.primary_mood) {
            Some(MoodCategory::Positive) => distribution.positive += 1,
            Some(MoodCategory::Neutral) => distribution.neutral += 1,
            Some(MoodCategory::Negative) => distribution.negative += 1,
            None => {}
        }
    }
    distribution
}

/// Counts occurrences preserving first-encountered order, then stable-sorts
/// by descending count. Equal counts keep their first-seen order, giving a
/// deterministic tie-break.
fn top_counts<'a, I>(names: I, limit: usize) -> Vec<(String, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in names {
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Top 5 primary moods by entry count, descending.
pub fn mood_frequency(entries: &[JournalEntry]) -> Vec<(String, usize)> {
    top_counts(
        entries.iter().map(|e| e.primary_mood.as_str()),
        MOOD_FREQUENCY_LIMIT,
    )
}

/// Top 10 tags by usage count across all entries, descending.
pub fn tag_usage(entries: &[JournalEntry]) -> Vec<(String, usize)> {
    top_counts(
        entries.iter().flat_map(|e| e.tags.iter().map(String::as_str)),
        TAG_USAGE_LIMIT,
    )
}

/// Arithmetic mean of per-entry word counts; 0 for an empty entry set.
pub fn average_word_count(entries: &[JournalEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: usize = entries.iter().map(|e| e.word_count).sum();
    total as f64 / entries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_on(date: (i32, u32, u32)) -> JournalEntry {
        JournalEntry {
            id: 0,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            title: "t".to_string(),
            content: String::new(),
            category: String::new(),
            primary_mood: "Happy".to_string(),
            secondary_moods: Vec::new(),
            tags: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
            word_count: 0,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_streaks_over_consecutive_days() {
        let entries = vec![
            entry_on((2024, 1, 1)),
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 3)),
        ];
        assert_eq!(current_streak(&entries, day(2024, 1, 3)), 3);
        assert_eq!(longest_streak(&entries), 3);
        assert_eq!(missed_days(&entries), 0);
    }

    #[test]
    fn test_current_streak_counts_from_yesterday() {
        let entries = vec![entry_on((2024, 1, 2)), entry_on((2024, 1, 3))];
        assert_eq!(current_streak(&entries, day(2024, 1, 4)), 2);
    }

    #[test]
    fn test_current_streak_zero_when_stale() {
        let entries = vec![entry_on((2024, 1, 1)), entry_on((2024, 1, 2))];
        assert_eq!(current_streak(&entries, day(2024, 1, 10)), 0);
    }

    #[test]
    fn test_current_streak_stops_at_gap() {
        let entries = vec![
            entry_on((2024, 1, 1)),
            entry_on((2024, 1, 3)),
            entry_on((2024, 1, 4)),
        ];
        assert_eq!(current_streak(&entries, day(2024, 1, 4)), 2);
    }

    #[test]
    fn test_current_streak_ignores_duplicate_dates() {
        // Distinct calendar dates, not raw entries
        let entries = vec![
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 3)),
        ];
        assert_eq!(current_streak(&entries, day(2024, 1, 3)), 2);
    }

    #[test]
    fn test_longest_streak_single_entry() {
        let entries = vec![entry_on((2024, 1, 1))];
        assert_eq!(longest_streak(&entries), 1);
    }

    #[test]
    fn test_longest_streak_picks_best_run() {
        let entries = vec![
            entry_on((2024, 1, 1)),
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 10)),
            entry_on((2024, 1, 11)),
            entry_on((2024, 1, 12)),
        ];
        assert_eq!(longest_streak(&entries), 3);
    }

    #[test]
    fn test_missed_days_with_gap() {
        // min 01-01, max 01-10, span 10 days, 4 distinct dates => 6 missed
        let entries = vec![
            entry_on((2024, 1, 1)),
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 3)),
            entry_on((2024, 1, 10)),
        ];
        assert_eq!(missed_days(&entries), 6);
    }

    #[test]
    fn test_empty_entry_set() {
        let entries: Vec<JournalEntry> = Vec::new();
        assert_eq!(current_streak(&entries, day(2024, 1, 1)), 0);
        assert_eq!(longest_streak(&entries), 0);
        assert_eq!(missed_days(&entries), 0);
        assert_eq!(average_word_count(&entries), 0.0);
        assert!(mood_frequency(&entries).is_empty());
    }

    #[test]
    fn test_mood_distribution_buckets() {
        let mut entries = vec![entry_on((2024, 1, 1)), entry_on((2024, 1, 2))];
        entries[1].primary_mood = "Anxious".to_string();
        let mut third = entry_on((2024, 1, 3));
        third.primary_mood = "Calm".to_string();
        entries.push(third);
        let mut unknown = entry_on((2024, 1, 4));
        unknown.primary_mood = "Ecstatic".to_string();
        entries.push(unknown);

        let dist = mood_distribution(&entries);
        assert_eq!(dist.positive, 1);
        assert_eq!(dist.neutral, 1);
        assert_eq!(dist.negative, 1);
    }

    #[test]
    fn test_mood_frequency_capped_and_sorted() {
        let moods = [
            "Happy", "Happy", "Happy", "Calm", "Calm", "Sad", "Angry", "Bored", "Curious",
            "Lonely",
        ];
        let entries: Vec<JournalEntry> = moods
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let mut e = entry_on((2024, 1, 1 + i as u32));
                e.primary_mood = m.to_string();
                e
            })
            .collect();

        let freq = mood_frequency(&entries);
        assert_eq!(freq.len(), 5);
        assert_eq!(freq[0], ("Happy".to_string(), 3));
        assert_eq!(freq[1], ("Calm".to_string(), 2));
        // Descending counts throughout
        for pair in freq.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        // Ties keep first-encountered order
        assert_eq!(freq[2].0, "Sad");
    }

    #[test]
    fn test_tag_usage_capped_at_ten() {
        let entries: Vec<JournalEntry> = (0..12)
            .map(|i| {
                let mut e = entry_on((2024, 1, 1 + i as u32));
                e.tags = vec![format!("tag{}", i), "common".to_string()];
                e
            })
            .collect();

        let usage = tag_usage(&entries);
        assert_eq!(usage.len(), 10);
        assert_eq!(usage[0], ("common".to_string(), 12));
    }

    #[test]
    fn test_average_word_count() {
        let mut entries = vec![entry_on((2024, 1, 1)), entry_on((2024, 1, 2))];
        entries[0].word_count = 10;
        entries[1].word_count = 20;
        assert_eq!(average_word_count(&entries), 15.0);
    }

    #[test]
    fn test_compute_fills_every_field() {
        let mut entries = vec![
            entry_on((2024, 1, 1)),
            entry_on((2024, 1, 2)),
            entry_on((2024, 1, 3)),
        ];
        entries[0].tags = vec!["walk".to_string()];
        entries[0].word_count = 30;

        let stats = DashboardStats::compute(&entries, day(2024, 1, 3));
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.missed_days, 0);
        assert_eq!(stats.mood_distribution.positive, 3);
        assert_eq!(stats.mood_frequency[0], ("Happy".to_string(), 3));
        assert_eq!(stats.tag_usage[0], ("walk".to_string(), 1));
        assert_eq!(stats.average_word_count, 10.0);
    }
}
