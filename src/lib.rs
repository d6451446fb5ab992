pub mod cli;
pub mod config;
pub mod db;
pub mod logging;
pub mod menu;
pub mod schema;
pub mod seed;
pub mod writer;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::AppConfig;
pub use db::{ConnectOptions, Database};
pub use menu::{Menu, MenuOptions};
pub use writer::{bootstrap, BootstrapOptions, BootstrapReport};
