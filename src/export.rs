//! Journal export.
//!
//! Filters a user's entries to an inclusive date range and renders a plain
//! text report. The entry content blob is emitted as-is; this layer does not
//! interpret it.

use crate::db::entries::{self, JournalEntry};
use crate::errors::AppResult;
use chrono::NaiveDate;
use rusqlite::Connection;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the entries whose date falls inside `[from, to]`, oldest first.
pub fn filter_range(
    entries: &[JournalEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<&JournalEntry> {
    let mut filtered: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.date >= from && e.date <= to)
        .collect();
    filtered.sort_by_key(|e| e.date);
    filtered
}

/// Renders the export report for an already-filtered entry list.
pub fn render_report(entries: &[&JournalEntry], from: NaiveDate, to: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mindspace Journal Export ({} - {})",
        from.format("%b %d, %Y"),
        to.format("%b %d, %Y")
    );
    let _ = writeln!(out);

    if entries.is_empty() {
        let _ = writeln!(out, "No entries found in this date range.");
        return out;
    }

    for entry in entries {
        let _ = writeln!(
            out,
            "{} - {}",
            entry.date.format("%B %d, %Y"),
            entry.title
        );
        let _ = writeln!(
            out,
            "Category: {} | Primary Mood: {}",
            entry.category, entry.primary_mood
        );
        if !entry.tags.is_empty() {
            let _ = writeln!(out, "Tags: {}", entry.tags.join(", "));
        }
        let _ = writeln!(out, "{}", entry.content);
        let _ = writeln!(out);
    }
    out
}

/// Exports a user's entries in the range to a text file under `dir`.
///
/// Returns the path of the written file.
pub fn export_to_file(
    conn: &Connection,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    dir: &Path,
) -> AppResult<PathBuf> {
    let all = entries::get_all_entries(conn, user_id)?;
    let filtered = filter_range(&all, from, to);
    let report = render_report(&filtered, from, to);

    let file_name = format!(
        "Mindspace_Journal_{}_{}.txt",
        from.format("%Y%m%d"),
        to.format("%Y%m%d")
    );
    let path = dir.join(file_name);
    fs::write(&path, report)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_on(date: (i32, u32, u32), title: &str) -> JournalEntry {
        JournalEntry {
            id: 0,
            user_id: 1,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            title: title.to_string(),
            content: "body".to_string(),
            category: "Personal".to_string(),
            primary_mood: "Happy".to_string(),
            secondary_moods: Vec::new(),
            tags: vec!["walk".to_string()],
            created_at: String::new(),
            updated_at: String::new(),
            word_count: 1,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_range_is_inclusive_and_ascending() {
        let entries = vec![
            entry_on((2024, 1, 5), "mid"),
            entry_on((2024, 1, 1), "start"),
            entry_on((2024, 1, 10), "end"),
            entry_on((2024, 1, 11), "outside"),
        ];

        let filtered = filter_range(&entries, day(2024, 1, 1), day(2024, 1, 10));
        let titles: Vec<&str> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["start", "mid", "end"]);
    }

    #[test]
    fn test_render_report_empty_range() {
        let report = render_report(&[], day(2024, 1, 1), day(2024, 1, 31));
        assert!(report.contains("No entries found in this date range."));
    }

    #[test]
    fn test_render_report_includes_entry_fields() {
        let entry = entry_on((2024, 1, 5), "A walk");
        let report = render_report(&[&entry], day(2024, 1, 1), day(2024, 1, 31));

        assert!(report.contains("January 05, 2024 - A walk"));
        assert!(report.contains("Category: Personal | Primary Mood: Happy"));
        assert!(report.contains("Tags: walk"));
        assert!(report.contains("body"));
    }
}
