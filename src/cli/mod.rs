//! Command-line interface for the mindspace journaling tool.

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A personal journaling tool with moods, tags, and streak statistics
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new account and start a session
    Register {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
        #[clap(long)]
        confirm_password: String,
        /// Agree to the terms of use
        #[clap(long)]
        agree_to_terms: bool,
    },
    /// Log in with an existing account
    Login {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Change the active account's password
    ChangePassword {
        #[clap(long)]
        current: String,
        #[clap(long)]
        new: String,
    },
    /// Journal entry operations
    #[clap(subcommand)]
    Entry(EntryCommand),
    /// List all known tags
    Tags,
    /// Show dashboard statistics
    Stats,
    /// PIN lock operations
    #[clap(subcommand)]
    Pin(PinCommand),
    /// Show or set the theme (light, dark, custom)
    Theme {
        /// New theme value; omit to print the current one
        value: Option<String>,
    },
    /// Export entries in a date range to a text file
    Export {
        /// Start of the range (YYYY-MM-DD, inclusive)
        #[clap(long)]
        from: NaiveDate,
        /// End of the range (YYYY-MM-DD, inclusive)
        #[clap(long)]
        to: NaiveDate,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntryCommand {
    /// Create an entry for a date
    Add {
        /// Entry date (YYYY-MM-DD); defaults to today
        #[clap(long)]
        date: Option<NaiveDate>,
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        content: String,
        #[clap(long, default_value = "")]
        category: String,
        /// Primary mood (must belong to the fixed taxonomy)
        #[clap(long)]
        mood: String,
        /// Secondary mood, at most two
        #[clap(long = "secondary")]
        secondary_moods: Vec<String>,
        /// Tag, repeatable
        #[clap(long = "tag")]
        tags: Vec<String>,
    },
    /// Overwrite an entry and its mood/tag associations
    Edit {
        id: i64,
        #[clap(long)]
        date: Option<NaiveDate>,
        #[clap(long)]
        title: String,
        #[clap(long, default_value = "")]
        content: String,
        #[clap(long, default_value = "")]
        category: String,
        #[clap(long)]
        mood: String,
        #[clap(long = "secondary")]
        secondary_moods: Vec<String>,
        #[clap(long = "tag")]
        tags: Vec<String>,
    },
    /// List all entries, newest first
    List,
    /// Show one entry by id
    Show { id: i64 },
    /// Delete an entry by id
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PinCommand {
    /// Set or replace the 4-digit PIN
    Set {
        #[clap(long)]
        pin: String,
        #[clap(long)]
        confirm_pin: String,
    },
    /// Verify the PIN and unlock
    Unlock {
        #[clap(long)]
        pin: String,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_args() {
        let args = CliArgs::parse_from(vec![
            "mindspace",
            "register",
            "--email",
            "a@b.com",
            "--password",
            "Passw0rd!",
            "--confirm-password",
            "Passw0rd!",
            "--agree-to-terms",
        ]);
        match args.command {
            Command::Register {
                email,
                agree_to_terms,
                ..
            } => {
                assert_eq!(email, "a@b.com");
                assert!(agree_to_terms);
            }
            _ => panic!("Expected Register command"),
        }
    }

    #[test]
    fn test_entry_add_collects_repeated_flags() {
        let args = CliArgs::parse_from(vec![
            "mindspace",
            "entry",
            "add",
            "--title",
            "A day",
            "--mood",
            "Happy",
            "--secondary",
            "Calm",
            "--secondary",
            "Curious",
            "--tag",
            "walk",
            "--tag",
            "outdoors",
        ]);
        match args.command {
            Command::Entry(EntryCommand::Add {
                secondary_moods,
                tags,
                date,
                ..
            }) => {
                assert_eq!(secondary_moods, vec!["Calm", "Curious"]);
                assert_eq!(tags, vec!["walk", "outdoors"]);
                assert!(date.is_none());
            }
            _ => panic!("Expected Entry Add command"),
        }
    }

    #[test]
    fn test_export_parses_dates() {
        let args = CliArgs::parse_from(vec![
            "mindspace",
            "export",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
        ]);
        match args.command {
            Command::Export { from, to } => {
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
                assert_eq!(to, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result = CliArgs::try_parse_from(vec![
            "mindspace",
            "export",
            "--from",
            "not-a-date",
            "--to",
            "2024-01-31",
        ]);
        assert!(result.is_err());
    }
}
