use anyhow::{anyhow, Context, Result};
use tracing::info;

use super::schema_gen::{generate_create_table, generate_drop_table, generate_seed_insert};
use crate::db::{Database, Statement};
use crate::schema::DependencyResolver;
use crate::seed::seed_rows;

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Drop every known table before creating it again
    pub reset: bool,
    /// Load the bundled seed rows into tables created by this run
    pub seed: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            reset: false,
            seed: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapReport {
    pub tables_created: usize,
    pub rows_inserted: usize,
}

/// Create the aircraft schema in `db`. Seed rows only go into tables this
/// call created, so rows deleted from an existing table stay deleted.
pub fn bootstrap(db: &Database, options: &BootstrapOptions) -> Result<BootstrapReport> {
    let resolver = DependencyResolver::new();
    let mut report = BootstrapReport::default();

    if options.reset {
        for schema in resolver.drop_order().map_err(|e| anyhow!(e))? {
            db.run(&Statement::new(generate_drop_table(schema)))
                .with_context(|| format!("Failed to drop table: {}", schema.name))?;
        }
        info!("dropped existing tables");
    }

    let existing = db.list_tables()?;
    let tables = resolver.creation_order().map_err(|e| anyhow!(e))?;

    let mut created = Vec::new();

    for schema in tables {
        db.run(&Statement::new(generate_create_table(schema)))
            .with_context(|| format!("Failed to create table: {}", schema.name))?;

        if !existing.iter().any(|name| name == schema.name) {
            created.push(schema);
        }
    }
    report.tables_created = created.len();

    if options.seed {
        for schema in created {
            let sql = generate_seed_insert(schema);
            let mut inserted = 0;

            for row in seed_rows(schema)? {
                let statement = Statement {
                    sql: sql.clone(),
                    params: row.ordered(schema),
                };
                inserted += db
                    .run(&statement)
                    .with_context(|| format!("Failed to seed table: {}", schema.name))?
                    .rows_affected;
            }

            info!(table = schema.name, rows = inserted, "seeded");
            report.rows_inserted += inserted;
        }
    }

    Ok(report)
}
