use anyhow::Result;
use aircraft_db::{
    cli::{Cli, Commands, OutputFormat},
    config::AppConfig,
    db::{Catalog, Database},
    logging,
    menu::{render::write_table, Menu},
    writer::{bootstrap, BootstrapOptions},
};
use std::io::{self, Write};
use tracing::{info, warn};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(&cli);
    logging::init(config.verbose);

    let db = Database::open(&config.database, &config.connect_options())?;
    info!(path = %config.database.display(), "connected");

    match cli.command.unwrap_or_default() {
        Commands::Menu { no_seed } => {
            if let Some(path) = db.path() {
                println!("Successfully connected to {}", path.display());
            }

            let options = BootstrapOptions {
                reset: false,
                seed: !no_seed,
            };
            if let Err(e) = bootstrap(&db, &options) {
                warn!(error = %e, "bootstrap failed");
                eprintln!("Error: {:#}", e);
            }

            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(&db, stdin.lock(), stdout.lock(), config.menu_options()).run()?;

            db.close()?;
            println!("Connection closed");
            return Ok(());
        }

        Commands::Init { reset, no_seed } => {
            let report = bootstrap(
                &db,
                &BootstrapOptions {
                    reset,
                    seed: !no_seed,
                },
            )?;
            println!(
                "Initialized {:?}: {} tables created, {} rows inserted",
                config.database, report.tables_created, report.rows_inserted
            );
        }

        Commands::ListTables => {
            let catalog = Catalog::load(&db)?;
            if catalog.is_empty() {
                println!("Database is empty.");
            }
            for name in catalog.names() {
                println!("  {}", name);
            }
        }

        Commands::View { table, format } => {
            let catalog = Catalog::load(&db)?;
            let data = db.table_data(catalog.find(&table)?)?;

            match format {
                OutputFormat::Text => write_table(&mut io::stdout().lock(), &data)?,
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
            }
        }

        Commands::Search { value, format } => {
            let hits: Vec<_> = db
                .search_all_tables(&value)?
                .into_iter()
                .filter(|hit| !hit.rows.is_empty())
                .collect();

            match format {
                OutputFormat::Text => {
                    let mut out = io::stdout().lock();
                    if hits.is_empty() {
                        writeln!(out, "No matching records were found")?;
                    }
                    for hit in &hits {
                        writeln!(out, "\n{}:", hit.name)?;
                        write_table(&mut out, hit)?;
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
            }
        }
    }

    db.close()?;
    Ok(())
}
