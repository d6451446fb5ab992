use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::db::ConnectOptions;
use crate::menu::{MenuOptions, Theme};

/// Runtime settings collected from the command line and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: PathBuf,
    pub pause: Duration,
    pub enforce_foreign_keys: bool,
    pub color: bool,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            database: cli.database.clone(),
            pause: Duration::from_millis(cli.pause_ms),
            enforce_foreign_keys: cli.enforce_foreign_keys,
            color: !cli.no_color && std::io::stdout().is_terminal(),
            verbose: cli.verbose,
        }
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            enforce_foreign_keys: self.enforce_foreign_keys,
        }
    }

    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            pause: self.pause,
            theme: Theme { color: self.color },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "aircraft-db",
            "--database",
            "fleet.db",
            "--pause-ms",
            "0",
            "--enforce-foreign-keys",
            "--no-color",
        ])
        .unwrap();
        let config = AppConfig::from_cli(&cli);

        assert_eq!(config.database, PathBuf::from("fleet.db"));
        assert!(config.pause.is_zero());
        assert!(config.connect_options().enforce_foreign_keys);
        assert!(!config.menu_options().theme.color);
    }
}
