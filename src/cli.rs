use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "aircraft_management_system_db.db";

#[derive(Parser, Debug)]
#[command(name = "aircraft-db")]
#[command(version, about = "Browse and edit the aircraft management database")]
pub struct Cli {
    /// SQLite database file
    #[arg(short, long, global = true, env = "AIRCRAFT_DB_PATH", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Pause after each menu action, in milliseconds
    #[arg(long, global = true, default_value_t = 2000)]
    pub pause_ms: u64,

    /// Turn on SQLite foreign key enforcement
    #[arg(long, global = true)]
    pub enforce_foreign_keys: bool,

    /// Disable colored headings
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log every executed statement to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create the schema if needed and start the interactive menu (default)
    Menu {
        /// Do not load the bundled seed rows
        #[arg(long)]
        no_seed: bool,
    },

    /// Create the schema and load seed rows, then exit
    Init {
        /// Drop all tables first
        #[arg(long)]
        reset: bool,

        /// Do not load the bundled seed rows
        #[arg(long)]
        no_seed: bool,
    },

    /// List all table names
    ListTables,

    /// Print the contents of one table
    View {
        /// Table name (case sensitive)
        table: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Find rows in any table where some column equals the value
    Search {
        /// Value to look for (case sensitive)
        value: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Menu { no_seed: false }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::try_parse_from(["aircraft-db"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Commands::Menu { no_seed: false });
        assert_eq!(cli.pause_ms, 2000);
    }

    #[test]
    fn test_view_with_json() {
        let cli =
            Cli::try_parse_from(["aircraft-db", "view", "Pilot", "--format", "json", "-d", "x.db"])
                .unwrap();
        assert_eq!(cli.database, PathBuf::from("x.db"));
        assert_eq!(
            cli.command,
            Some(Commands::View {
                table: "Pilot".into(),
                format: OutputFormat::Json
            })
        );
    }
}
