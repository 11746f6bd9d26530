/*!
# Mindspace - A Personal Journaling Tool

Command-line front-end for the mindspace journaling engine: accounts,
dated entries with moods and tags, a PIN lock, and dashboard statistics.

The session persists between invocations through a user-id marker in the
preferences file, so `login` once and then use the entry commands.

## Configuration

- `MINDSPACE_DIR`: The directory for the database and preferences files
  (defaults to `~/.mindspace`)
*/

use chrono::Local;
use mindspace::auth::{AuthService, LoginRequest, RegisterRequest};
use mindspace::cli::{CliArgs, Command, EntryCommand, PinCommand};
use mindspace::db::entries::{self, EntryDraft};
use mindspace::db::users::User;
use mindspace::db::Database;
use mindspace::errors::{AppResult, ValidationError};
use mindspace::pin::PinLockService;
use mindspace::prefs::FilePreferences;
use mindspace::stats::DashboardStats;
use mindspace::theme::ThemeService;
use mindspace::{export, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir_exists()?;

    let db = Database::open(&config.database_path())?;
    db.initialize_schema()?;
    info!("Database ready");

    let prefs = FilePreferences::load(config.preferences_path())?;
    let mut auth = AuthService::new(&db, Box::new(prefs));
    auth.try_restore_session()?;

    match args.command {
        Command::Register {
            email,
            password,
            confirm_password,
            agree_to_terms,
        } => {
            let user = auth.register(&RegisterRequest {
                email,
                password,
                confirm_password,
                agree_to_terms,
            })?;
            println!("Registration successful. Logged in as {}.", user.email);
        }

        Command::Login { email, password } => {
            let user = auth.login(&LoginRequest { email, password })?;
            println!("Login successful. Welcome back, {}.", user.email);
        }

        Command::Logout => {
            auth.logout()?;
            println!("Logged out.");
        }

        Command::ChangePassword { current, new } => {
            auth.change_password(&current, &new)?;
            println!("Password updated successfully.");
        }

        Command::Entry(entry_command) => {
            let user = require_login(&auth)?;
            run_entry_command(&db, user.id, entry_command)?;
        }

        Command::Tags => {
            let conn = db.get_conn()?;
            for tag in entries::get_all_tags(&conn)? {
                println!("{}", tag);
            }
        }

        Command::Stats => {
            let user = require_login(&auth)?;
            let conn = db.get_conn()?;
            let all = entries::get_all_entries(&conn, user.id)?;
            let stats = DashboardStats::compute(&all, Local::now().date_naive());
            let rendered = serde_json::to_string_pretty(&stats)
                .map_err(|e| mindspace::AppError::Prefs(format!("Failed to render stats: {}", e)))?;
            println!("{}", rendered);
        }

        Command::Pin(pin_command) => {
            let user = require_login(&auth)?;
            let mut pin_lock = PinLockService::new(&db);
            match pin_command {
                PinCommand::Set { pin, confirm_pin } => {
                    pin_lock.set_pin(user.id, &pin, &confirm_pin)?;
                    println!("PIN created successfully.");
                }
                PinCommand::Unlock { pin } => {
                    pin_lock.unlock(user.id, &pin)?;
                    println!("Unlocked.");
                }
            }
        }

        Command::Theme { value } => {
            let prefs = FilePreferences::load(config.preferences_path())?;
            let mut theme_service = ThemeService::new(Box::new(prefs));
            match value {
                Some(value) => {
                    theme_service.set_theme(&value)?;
                    println!("Theme set to {}.", theme_service.current_theme().as_str());
                }
                None => println!("{}", theme_service.current_theme().as_str()),
            }
        }

        Command::Export { from, to } => {
            let user = require_login(&auth)?;
            let conn = db.get_conn()?;
            let path = export::export_to_file(&conn, user.id, from, to, &config.data_dir)?;
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}

fn require_login<'u>(auth: &'u AuthService<'_>) -> AppResult<&'u User> {
    auth.current_user()
        .ok_or_else(|| ValidationError::NotLoggedIn.into())
}

fn run_entry_command(db: &Database, user_id: i64, command: EntryCommand) -> AppResult<()> {
    let conn = db.get_conn()?;
    match command {
        EntryCommand::Add {
            date,
            title,
            content,
            category,
            mood,
            secondary_moods,
            tags,
        } => {
            let draft = EntryDraft {
                user_id,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                title,
                content,
                category,
                primary_mood: mood,
                secondary_moods,
                tags,
            };
            let entry = entries::create_entry(&conn, &draft)?;
            println!("Entry created successfully (id {}).", entry.id);
        }

        EntryCommand::Edit {
            id,
            date,
            title,
            content,
            category,
            mood,
            secondary_moods,
            tags,
        } => {
            let draft = EntryDraft {
                user_id,
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                title,
                content,
                category,
                primary_mood: mood,
                secondary_moods,
                tags,
            };
            entries::update_entry(&conn, id, &draft)?;
            println!("Entry updated successfully.");
        }

        EntryCommand::List => {
            for entry in entries::get_all_entries(&conn, user_id)? {
                println!(
                    "{}  #{:<4} {:12} {}",
                    entry.date, entry.id, entry.primary_mood, entry.title
                );
            }
        }

        EntryCommand::Show { id } => {
            let entry = entries::get_entry_by_id(&conn, id)?.ok_or_else(|| {
                mindspace::errors::DatabaseError::NotFound("Entry not found.".to_string())
            })?;
            println!("{} - {}", entry.date, entry.title);
            if !entry.category.is_empty() {
                println!("Category: {}", entry.category);
            }
            println!("Primary mood: {}", entry.primary_mood);
            if !entry.secondary_moods.is_empty() {
                println!("Secondary moods: {}", entry.secondary_moods.join(", "));
            }
            if !entry.tags.is_empty() {
                println!("Tags: {}", entry.tags.join(", "));
            }
            println!("Words: {}", entry.word_count);
            if !entry.content.is_empty() {
                println!("\n{}", entry.content);
            }
        }

        EntryCommand::Delete { id } => {
            entries::delete_entry(&conn, id)?;
            println!("Entry deleted successfully.");
        }
    }
    Ok(())
}
