//! Journal entry CRUD operations.
//!
//! This module translates between the normalized schema (entries plus the
//! `entry_moods` and `entry_tags` junction tables) and the flat
//! [`JournalEntry`] domain shape, and enforces the entry invariants:
//!
//! - at most one entry per user per calendar day
//! - exactly one Primary mood per entry, at most two Secondary moods
//! - moods must belong to the fixed taxonomy; tags are free-form
//!
//! Mood and category names match case-insensitively; tag names match
//! case-sensitively. That asymmetry is deliberate and load-bearing for
//! observable behavior.
//!
//! Updates rebuild the junction rows wholesale (delete and re-insert)
//! rather than diffing. With at most three moods and small tag sets per
//! entry, a set-reconciliation pass buys nothing.

use crate::constants::{DATE_FORMAT_ISO, MAX_SECONDARY_MOODS};
use crate::errors::{AppResult, DatabaseError, ValidationError};
use crate::moods;
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;
use tracing::debug;

/// A journal entry in its flat domain shape, fully assembled from the
/// normalized tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: i64,
    /// Calendar date of the entry; time-of-day is never stored.
    pub date: NaiveDate,
    pub title: String,
    /// Rich-text/HTML blob, opaque to this layer.
    pub content: String,
    /// Category name, empty string when uncategorized.
    pub category: String,
    pub primary_mood: String,
    pub secondary_moods: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Whitespace-delimited token count of `content`.
    pub word_count: usize,
}

/// Input shape for creating or updating an entry.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub user_id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub category: String,
    pub primary_mood: String,
    pub secondary_moods: Vec<String>,
    pub tags: Vec<String>,
}

/// Counts whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Raw `journal_entries` row, before junction assembly.
#[derive(Debug)]
struct EntryRow {
    id: i64,
    user_id: i64,
    category_id: Option<i64>,
    date: NaiveDate,
    title: String,
    content: String,
    created_at: String,
    updated_at: String,
}

const ENTRY_COLUMNS: &str =
    "id, user_id, category_id, entry_date, title, content, created_at, updated_at";

fn entry_row_from_row(row: &Row<'_>) -> rusqlite::Result<EntryRow> {
    let date_str: String = row.get(3)?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT_ISO).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(EntryRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        category_id: row.get(2)?,
        date,
        title: row.get(4)?,
        content: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

// ---------- name resolution ----------

/// Resolves a category name to an id, creating the row on first use.
///
/// Blank input yields `None` (the entry stays uncategorized). Matching is
/// case-insensitive; the first spelling seen is the one stored.
fn get_or_create_category_id(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM categories WHERE LOWER(name) = LOWER(?1)",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    if let Some(id) = existing {
        return Ok(Some(id));
    }

    conn.execute("INSERT INTO categories (name) VALUES (?1)", params![name])
        .map_err(DatabaseError::Sqlite)?;
    Ok(Some(conn.last_insert_rowid()))
}

/// Resolves a mood name to an id.
///
/// The fixed taxonomy is the source of truth: a mood row is created lazily
/// only when the name matches a taxonomy mood that was somehow not seeded.
/// Returns `None` for blank input or names outside the taxonomy.
fn resolve_mood_id(conn: &Connection, name: &str) -> AppResult<Option<i64>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM moods WHERE LOWER(name) = LOWER(?1)",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    if let Some(id) = existing {
        return Ok(Some(id));
    }

    let Some(mood) = moods::find(name) else {
        return Ok(None);
    };

    conn.execute(
        "INSERT INTO moods (name, emoji, category) VALUES (?1, ?2, ?3)",
        params![mood.name, mood.emoji, mood.category.as_str()],
    )
    .map_err(DatabaseError::Sqlite)?;
    Ok(Some(conn.last_insert_rowid()))
}

/// Resolves a tag name to an id, creating the row on first use.
/// Tag matching is case-sensitive.
fn get_or_create_tag_id(conn: &Connection, name: &str) -> AppResult<i64> {
    let name = name.trim();

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM tags WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute("INSERT INTO tags (name) VALUES (?1)", params![name])
        .map_err(DatabaseError::Sqlite)?;
    Ok(conn.last_insert_rowid())
}

/// Trims, drops blanks, and deduplicates while preserving first-seen order.
fn normalize_names(names: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !out.iter().any(|n| n == trimmed) {
            out.push(trimmed.to_string());
        }
    }
    out
}

// ---------- assembly (rows -> domain model) ----------

fn assemble_entry(
    row: EntryRow,
    category_name: String,
    entry_moods: &[(i64, String)],
    entry_tag_ids: &[i64],
    mood_names: &HashMap<i64, String>,
    tag_names: &HashMap<i64, String>,
) -> JournalEntry {
    let mut primary_mood = String::new();
    let mut secondary_moods = Vec::new();

    for (mood_id, role) in entry_moods {
        let Some(name) = mood_names.get(mood_id) else {
            continue;
        };
        if role.eq_ignore_ascii_case("Primary") {
            primary_mood = name.clone();
        } else if role.eq_ignore_ascii_case("Secondary") {
            secondary_moods.push(name.clone());
        }
    }

    let tags = entry_tag_ids
        .iter()
        .filter_map(|id| tag_names.get(id).cloned())
        .collect();

    let word_count = count_words(&row.content);
    JournalEntry {
        id: row.id,
        user_id: row.user_id,
        date: row.date,
        title: row.title,
        content: row.content,
        category: category_name,
        primary_mood,
        secondary_moods,
        tags,
        created_at: row.created_at,
        updated_at: row.updated_at,
        word_count,
    }
}

/// Loads the related rows for a single entry and assembles the domain model.
fn load_entry(conn: &Connection, row: EntryRow) -> AppResult<JournalEntry> {
    let category_name = match row.category_id {
        Some(category_id) => conn
            .query_row(
                "SELECT name FROM categories WHERE id = ?1",
                params![category_id],
                |r| r.get::<_, String>(0),
            )
            .optional()
            .map_err(DatabaseError::Sqlite)?
            .unwrap_or_default(),
        None => String::new(),
    };

    let mut stmt = conn
        .prepare("SELECT mood_id, mood_role FROM entry_moods WHERE entry_id = ?1")
        .map_err(DatabaseError::Sqlite)?;
    let entry_moods: Vec<(i64, String)> = stmt
        .query_map(params![row.id], |r| Ok((r.get(0)?, r.get(1)?)))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<_, _>>()
        .map_err(DatabaseError::Sqlite)?;

    let mut mood_names = HashMap::new();
    for (mood_id, _) in &entry_moods {
        if mood_names.contains_key(mood_id) {
            continue;
        }
        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM moods WHERE id = ?1",
                params![mood_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(DatabaseError::Sqlite)?;
        if let Some(name) = name {
            mood_names.insert(*mood_id, name);
        }
    }

    let mut stmt = conn
        .prepare("SELECT tag_id FROM entry_tags WHERE entry_id = ?1")
        .map_err(DatabaseError::Sqlite)?;
    let entry_tag_ids: Vec<i64> = stmt
        .query_map(params![row.id], |r| r.get(0))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<_, _>>()
        .map_err(DatabaseError::Sqlite)?;

    let mut tag_names = HashMap::new();
    for tag_id in &entry_tag_ids {
        if tag_names.contains_key(tag_id) {
            continue;
        }
        let name: Option<String> = conn
            .query_row("SELECT name FROM tags WHERE id = ?1", params![tag_id], |r| {
                r.get(0)
            })
            .optional()
            .map_err(DatabaseError::Sqlite)?;
        if let Some(name) = name {
            tag_names.insert(*tag_id, name);
        }
    }

    Ok(assemble_entry(
        row,
        category_name,
        &entry_moods,
        &entry_tag_ids,
        &mood_names,
        &tag_names,
    ))
}

// ---------- public CRUD ----------

/// Retrieves all entries for a user, newest date first.
///
/// Related rows are batch-loaded: one query for the user's entries, then one
/// query each for the junction rows, moods, tags, and categories whose ids
/// appear in the fetched set, joined in memory via lookup maps. Cost stays
/// at a handful of queries regardless of entry count.
pub fn get_all_entries(conn: &Connection, user_id: i64) -> AppResult<Vec<JournalEntry>> {
    debug!("Loading all entries for user {}", user_id);

    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM journal_entries WHERE user_id = ?1 ORDER BY entry_date DESC",
            ENTRY_COLUMNS
        ))
        .map_err(DatabaseError::Sqlite)?;
    let rows: Vec<EntryRow> = stmt
        .query_map(params![user_id], entry_row_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<_, _>>()
        .map_err(DatabaseError::Sqlite)?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let id_list = |ids: &[i64]| {
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };

    let entry_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    // Junction rows for the whole entry set, grouped by entry id
    let mut stmt = conn
        .prepare(&format!(
            "SELECT entry_id, mood_id, mood_role FROM entry_moods WHERE entry_id IN ({})",
            id_list(&entry_ids)
        ))
        .map_err(DatabaseError::Sqlite)?;
    let mut moods_by_entry: HashMap<i64, Vec<(i64, String)>> = HashMap::new();
    let mut mood_ids: Vec<i64> = Vec::new();
    for result in stmt
        .query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, i64>(1)?, r.get::<_, String>(2)?)))
        .map_err(DatabaseError::Sqlite)?
    {
        let (entry_id, mood_id, role) = result.map_err(DatabaseError::Sqlite)?;
        if !mood_ids.contains(&mood_id) {
            mood_ids.push(mood_id);
        }
        moods_by_entry
            .entry(entry_id)
            .or_default()
            .push((mood_id, role));
    }

    let mut stmt = conn
        .prepare(&format!(
            "SELECT entry_id, tag_id FROM entry_tags WHERE entry_id IN ({})",
            id_list(&entry_ids)
        ))
        .map_err(DatabaseError::Sqlite)?;
    let mut tags_by_entry: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut tag_ids: Vec<i64> = Vec::new();
    for result in stmt
        .query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, i64>(1)?)))
        .map_err(DatabaseError::Sqlite)?
    {
        let (entry_id, tag_id) = result.map_err(DatabaseError::Sqlite)?;
        if !tag_ids.contains(&tag_id) {
            tag_ids.push(tag_id);
        }
        tags_by_entry.entry(entry_id).or_default().push(tag_id);
    }

    // Name lookup maps
    let mut mood_names: HashMap<i64, String> = HashMap::new();
    if !mood_ids.is_empty() {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, name FROM moods WHERE id IN ({})",
                id_list(&mood_ids)
            ))
            .map_err(DatabaseError::Sqlite)?;
        for result in stmt
            .query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))
            .map_err(DatabaseError::Sqlite)?
        {
            let (id, name) = result.map_err(DatabaseError::Sqlite)?;
            mood_names.insert(id, name);
        }
    }

    let mut tag_names: HashMap<i64, String> = HashMap::new();
    if !tag_ids.is_empty() {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, name FROM tags WHERE id IN ({})",
                id_list(&tag_ids)
            ))
            .map_err(DatabaseError::Sqlite)?;
        for result in stmt
            .query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))
            .map_err(DatabaseError::Sqlite)?
        {
            let (id, name) = result.map_err(DatabaseError::Sqlite)?;
            tag_names.insert(id, name);
        }
    }

    let category_ids: Vec<i64> = {
        let mut ids: Vec<i64> = Vec::new();
        for row in &rows {
            if let Some(id) = row.category_id {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    };
    let mut category_names: HashMap<i64, String> = HashMap::new();
    if !category_ids.is_empty() {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, name FROM categories WHERE id IN ({})",
                id_list(&category_ids)
            ))
            .map_err(DatabaseError::Sqlite)?;
        for result in stmt
            .query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))
            .map_err(DatabaseError::Sqlite)?
        {
            let (id, name) = result.map_err(DatabaseError::Sqlite)?;
            category_names.insert(id, name);
        }
    }

    let entries = rows
        .into_iter()
        .map(|row| {
            let category = row
                .category_id
                .and_then(|id| category_names.get(&id).cloned())
                .unwrap_or_default();
            let entry_moods = moods_by_entry.remove(&row.id).unwrap_or_default();
            let entry_tags = tags_by_entry.remove(&row.id).unwrap_or_default();
            assemble_entry(row, category, &entry_moods, &entry_tags, &mood_names, &tag_names)
        })
        .collect();

    Ok(entries)
}

/// Retrieves a single entry by id. Returns `Ok(None)` if it does not exist.
pub fn get_entry_by_id(conn: &Connection, entry_id: i64) -> AppResult<Option<JournalEntry>> {
    let row = conn
        .query_row(
            &format!("SELECT {} FROM journal_entries WHERE id = ?1", ENTRY_COLUMNS),
            params![entry_id],
            entry_row_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    match row {
        Some(row) => Ok(Some(load_entry(conn, row)?)),
        None => Ok(None),
    }
}

/// Retrieves a user's entry for a calendar date, if any.
pub fn get_entry_by_date(
    conn: &Connection,
    user_id: i64,
    date: NaiveDate,
) -> AppResult<Option<JournalEntry>> {
    let row = conn
        .query_row(
            &format!(
                "SELECT {} FROM journal_entries WHERE user_id = ?1 AND entry_date = ?2",
                ENTRY_COLUMNS
            ),
            params![user_id, date.to_string()],
            entry_row_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?;

    match row {
        Some(row) => Ok(Some(load_entry(conn, row)?)),
        None => Ok(None),
    }
}

fn entry_exists_for_date(
    conn: &Connection,
    user_id: i64,
    date: NaiveDate,
    exclude_entry_id: Option<i64>,
) -> AppResult<bool> {
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM journal_entries
             WHERE user_id = ?1 AND entry_date = ?2 AND id != ?3)",
            params![user_id, date.to_string(), exclude_entry_id.unwrap_or(-1)],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;
    Ok(exists)
}

fn insert_mood_rows(conn: &Connection, entry_id: i64, draft: &EntryDraft) -> AppResult<()> {
    let primary_mood_id = resolve_mood_id(conn, &draft.primary_mood)?.ok_or_else(|| {
        ValidationError::UnknownPrimaryMood(draft.primary_mood.trim().to_string())
    })?;

    conn.execute(
        "INSERT INTO entry_moods (entry_id, mood_id, mood_role) VALUES (?1, ?2, 'Primary')",
        params![entry_id, primary_mood_id],
    )
    .map_err(DatabaseError::Sqlite)?;

    // Unknown secondary moods are skipped silently; only the primary is gated hard
    for name in normalize_names(&draft.secondary_moods) {
        let Some(mood_id) = resolve_mood_id(conn, &name)? else {
            continue;
        };
        conn.execute(
            "INSERT INTO entry_moods (entry_id, mood_id, mood_role) VALUES (?1, ?2, 'Secondary')",
            params![entry_id, mood_id],
        )
        .map_err(DatabaseError::Sqlite)?;
    }
    Ok(())
}

fn insert_tag_rows(conn: &Connection, entry_id: i64, draft: &EntryDraft) -> AppResult<()> {
    for name in normalize_names(&draft.tags) {
        let tag_id = get_or_create_tag_id(conn, &name)?;
        conn.execute(
            "INSERT INTO entry_tags (entry_id, tag_id) VALUES (?1, ?2)",
            params![entry_id, tag_id],
        )
        .map_err(DatabaseError::Sqlite)?;
    }
    Ok(())
}

fn validate_draft_fields(draft: &EntryDraft) -> AppResult<()> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::TitleRequired.into());
    }
    if draft.primary_mood.trim().is_empty() {
        return Err(ValidationError::PrimaryMoodRequired.into());
    }
    if draft.secondary_moods.len() > MAX_SECONDARY_MOODS {
        return Err(ValidationError::TooManySecondaryMoods.into());
    }
    Ok(())
}

/// Creates a journal entry with its mood and tag associations.
///
/// Validation order (first failure wins): user id positive, title non-blank,
/// primary mood non-blank, at most two secondary moods, no existing entry
/// for the (user, date) pair. A primary mood outside the fixed taxonomy is
/// rejected after the field checks.
///
/// Returns the fully assembled entry.
pub fn create_entry(conn: &Connection, draft: &EntryDraft) -> AppResult<JournalEntry> {
    if draft.user_id <= 0 {
        return Err(ValidationError::InvalidUser.into());
    }
    validate_draft_fields(draft)?;

    if entry_exists_for_date(conn, draft.user_id, draft.date, None)? {
        return Err(ValidationError::DuplicateEntryForDay.into());
    }

    let category_id = get_or_create_category_id(conn, &draft.category)?;
    let now = now_timestamp();

    conn.execute(
        "INSERT INTO journal_entries
         (user_id, category_id, entry_date, title, content, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        params![
            draft.user_id,
            category_id,
            draft.date.to_string(),
            draft.title.trim(),
            draft.content,
            now
        ],
    )
    .map_err(DatabaseError::Sqlite)?;
    let entry_id = conn.last_insert_rowid();

    insert_mood_rows(conn, entry_id, draft)?;
    insert_tag_rows(conn, entry_id, draft)?;

    debug!("Created entry {} for user {}", entry_id, draft.user_id);

    get_entry_by_id(conn, entry_id)?.ok_or_else(|| {
        DatabaseError::NotFound("Entry not found.".to_string()).into()
    })
}

/// Updates an entry, replacing its mood and tag associations wholesale.
///
/// Same field validation as create. If the date changes, the one-per-day
/// constraint is re-checked against the user's other entries. On success the
/// scalar columns are overwritten and all junction rows are deleted and
/// re-inserted from the draft.
pub fn update_entry(conn: &Connection, entry_id: i64, draft: &EntryDraft) -> AppResult<()> {
    if entry_id <= 0 {
        return Err(ValidationError::InvalidEntry.into());
    }
    validate_draft_fields(draft)?;

    let existing = conn
        .query_row(
            &format!("SELECT {} FROM journal_entries WHERE id = ?1", ENTRY_COLUMNS),
            params![entry_id],
            entry_row_from_row,
        )
        .optional()
        .map_err(DatabaseError::Sqlite)?
        .ok_or_else(|| DatabaseError::NotFound("Entry not found.".to_string()))?;

    if existing.date != draft.date
        && entry_exists_for_date(conn, existing.user_id, draft.date, Some(entry_id))?
    {
        return Err(ValidationError::DuplicateEntryForDate.into());
    }

    let category_id = get_or_create_category_id(conn, &draft.category)?;

    conn.execute(
        "UPDATE journal_entries
         SET title = ?1, content = ?2, entry_date = ?3, category_id = ?4, updated_at = ?5
         WHERE id = ?6",
        params![
            draft.title.trim(),
            draft.content,
            draft.date.to_string(),
            category_id,
            now_timestamp(),
            entry_id
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    // Full junction rebuild: delete everything, re-insert from the draft
    conn.execute(
        "DELETE FROM entry_moods WHERE entry_id = ?1",
        params![entry_id],
    )
    .map_err(DatabaseError::Sqlite)?;
    insert_mood_rows(conn, entry_id, draft)?;

    conn.execute(
        "DELETE FROM entry_tags WHERE entry_id = ?1",
        params![entry_id],
    )
    .map_err(DatabaseError::Sqlite)?;
    insert_tag_rows(conn, entry_id, draft)?;

    debug!("Updated entry {}", entry_id);
    Ok(())
}

/// Deletes an entry and its junction rows.
///
/// Junction rows go first so a mid-sequence failure never strands them
/// pointing at a missing entry.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<()> {
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM journal_entries WHERE id = ?1)",
            params![entry_id],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;

    if !exists {
        return Err(DatabaseError::NotFound("Entry not found.".to_string()).into());
    }

    conn.execute(
        "DELETE FROM entry_moods WHERE entry_id = ?1",
        params![entry_id],
    )
    .map_err(DatabaseError::Sqlite)?;
    conn.execute(
        "DELETE FROM entry_tags WHERE entry_id = ?1",
        params![entry_id],
    )
    .map_err(DatabaseError::Sqlite)?;
    conn.execute(
        "DELETE FROM journal_entries WHERE id = ?1",
        params![entry_id],
    )
    .map_err(DatabaseError::Sqlite)?;

    debug!("Deleted entry {}", entry_id);
    Ok(())
}

/// Returns all tag names, lexicographically ascending.
pub fn get_all_tags(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM tags ORDER BY name ASC")
        .map_err(DatabaseError::Sqlite)?;
    let tags = stmt
        .query_map([], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<_, _>>()
        .map_err(DatabaseError::Sqlite)?;
    Ok(tags)
}
