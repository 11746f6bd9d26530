//! End-to-end flow over a real on-disk database: account registration,
//! entry creation and editing, statistics, and the PIN lock.

use chrono::NaiveDate;
use mindspace::auth::{AuthService, LoginRequest, RegisterRequest};
use mindspace::db::entries::{self, EntryDraft};
use mindspace::db::Database;
use mindspace::pin::PinLockService;
use mindspace::prefs::{MemoryPreferences, Preferences};
use mindspace::stats::DashboardStats;
use tempfile::TempDir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_db(dir: &TempDir) -> Database {
    let db = Database::open(&dir.path().join("mindspace.db")).unwrap();
    db.initialize_schema().unwrap();
    db
}

fn register_user(db: &Database) -> i64 {
    let mut auth = AuthService::new(db, Box::new(MemoryPreferences::new()));
    auth.register(&RegisterRequest {
        email: "user@example.com".to_string(),
        password: "Passw0rd!".to_string(),
        confirm_password: "Passw0rd!".to_string(),
        agree_to_terms: true,
    })
    .unwrap()
    .id
}

fn draft(user_id: i64, date: NaiveDate, title: &str) -> EntryDraft {
    EntryDraft {
        user_id,
        date,
        title: title.to_string(),
        content: "one two three".to_string(),
        category: "Personal".to_string(),
        primary_mood: "Happy".to_string(),
        secondary_moods: vec!["Calm".to_string()],
        tags: vec!["walk".to_string()],
    }
}

#[test]
fn test_full_journal_flow() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);
    let user_id = register_user(&db);

    let conn = db.get_conn().unwrap();
    let created = entries::create_entry(&conn, &draft(user_id, day(2024, 3, 1), "Day one")).unwrap();
    entries::create_entry(&conn, &draft(user_id, day(2024, 3, 2), "Day two")).unwrap();

    // Edit replaces the mood and tag associations wholesale
    let mut edited = draft(user_id, day(2024, 3, 1), "Day one, revised");
    edited.primary_mood = "Sad".to_string();
    edited.secondary_moods = vec!["Lonely".to_string()];
    edited.tags = vec!["rain".to_string(), "indoors".to_string()];
    entries::update_entry(&conn, created.id, &edited).unwrap();

    let reloaded = entries::get_entry_by_id(&conn, created.id).unwrap().unwrap();
    assert_eq!(reloaded.title, "Day one, revised");
    assert_eq!(reloaded.primary_mood, "Sad");
    assert_eq!(reloaded.secondary_moods, vec!["Lonely"]);
    assert_eq!(reloaded.tags, vec!["rain", "indoors"]);

    let all = entries::get_all_entries(&conn, user_id).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, day(2024, 3, 2)); // newest first

    let stats = DashboardStats::compute(&all, day(2024, 3, 2));
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.mood_distribution.positive, 1);
    assert_eq!(stats.mood_distribution.negative, 1);
    assert_eq!(stats.average_word_count, 3.0);

    entries::delete_entry(&conn, created.id).unwrap();
    assert_eq!(entries::get_all_entries(&conn, user_id).unwrap().len(), 1);
}

#[test]
fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let user_id = {
        let db = open_db(&dir);
        register_user(&db)
    };

    // A second process opens the same database file
    let db = Database::open(&dir.path().join("mindspace.db")).unwrap();
    db.initialize_schema().unwrap();

    let mut prefs = MemoryPreferences::new();
    prefs.set_i64("mindspace_userid", user_id).unwrap();
    let mut auth = AuthService::new(&db, Box::new(prefs));
    auth.try_restore_session().unwrap();
    assert_eq!(auth.current_user().unwrap().id, user_id);

    let logged_in = auth
        .login(&LoginRequest {
            email: "USER@example.com".to_string(),
            password: "Passw0rd!".to_string(),
        })
        .unwrap();
    assert_eq!(logged_in.id, user_id);
}

#[test]
fn test_pin_lock_against_persisted_user() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);
    let user_id = register_user(&db);

    let mut pin_lock = PinLockService::new(&db);
    assert!(!pin_lock.is_unlocked());

    pin_lock.set_pin(user_id, "0007", "0007").unwrap();
    assert!(pin_lock.has_pin(user_id).unwrap());

    assert_eq!(
        pin_lock.unlock(user_id, "7000").unwrap_err().to_string(),
        "Incorrect PIN."
    );
    pin_lock.unlock(user_id, "0007").unwrap();
    assert!(pin_lock.is_unlocked());
}

#[test]
fn test_one_entry_per_day_enforced_across_sessions() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);
    let user_id = register_user(&db);

    let conn = db.get_conn().unwrap();
    entries::create_entry(&conn, &draft(user_id, day(2024, 3, 1), "First")).unwrap();

    let db2 = Database::open(&dir.path().join("mindspace.db")).unwrap();
    let conn2 = db2.get_conn().unwrap();
    let err = entries::create_entry(&conn2, &draft(user_id, day(2024, 3, 1), "Second"))
        .unwrap_err();
    assert_eq!(err.to_string(), "An entry already exists for this day.");
}
