use anyhow::{Context, Result};
use rusqlite::{params_from_iter, Connection};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::query::{search_all_columns, select_all, Statement};
use super::value::SqlValue;

#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Value of `PRAGMA foreign_keys` set on every new connection. The
    /// bundled SQLite enables it at compile time, so off is set explicitly.
    pub enforce_foreign_keys: bool,
}

/// Rows fetched by a statement, or the number of rows it changed
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
    pub rows_affected: usize,
}

/// Full contents of one table
#[derive(Debug, Clone, Serialize)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }
}

/// The single connection the program works through
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    pub fn open(db_path: &Path, options: &ConnectOptions) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        let db = Self {
            conn,
            path: Some(db_path.to_path_buf()),
        };
        db.configure(options)?;
        Ok(db)
    }

    pub fn open_in_memory(options: &ConnectOptions) -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to create in-memory database")?;

        let db = Self { conn, path: None };
        db.configure(options)?;
        Ok(db)
    }

    fn configure(&self, options: &ConnectOptions) -> Result<()> {
        let state = if options.enforce_foreign_keys { "ON" } else { "OFF" };
        self.conn
            .execute_batch(&format!("PRAGMA foreign_keys = {};", state))
            .with_context(|| format!("Failed to set foreign_keys = {}", state))?;
        debug!(foreign_keys = state, "configured connection");
        Ok(())
    }

    pub fn foreign_keys_enforced(&self) -> Result<bool> {
        let enabled: i64 = self
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .context("Failed to read foreign_keys")?;
        Ok(enabled != 0)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Execute any statement and fetch everything it returns
    pub fn run(&self, statement: &Statement) -> Result<QueryResult> {
        debug!(sql = %statement.sql, params = statement.params.len(), "executing");

        let mut stmt = self
            .conn
            .prepare(&statement.sql)
            .with_context(|| format!("Failed to prepare: {}", statement.sql))?;
        let params = params_from_iter(statement.params.iter());

        if stmt.column_count() == 0 {
            let rows_affected = stmt
                .execute(params)
                .with_context(|| format!("Failed to execute: {}", statement.sql))?;
            return Ok(QueryResult {
                rows_affected,
                ..QueryResult::default()
            });
        }

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let rows = stmt
            .query_map(params, |row| {
                (0..width)
                    .map(|idx| row.get::<_, SqlValue>(idx))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .with_context(|| format!("Failed to query: {}", statement.sql))?;

        Ok(QueryResult {
            columns,
            rows,
            rows_affected: 0,
        })
    }

    /// User tables in creation order
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let result = self.run(&Statement::new(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        ))?;

        Ok(result.rows.into_iter().map(first_text).collect())
    }

    /// Column names of a table in declaration order; empty for unknown tables
    pub fn column_names(&self, table: &str) -> Result<Vec<String>> {
        let result = self
            .run(&Statement::new("SELECT name FROM pragma_table_info(?1)").bind(table))
            .with_context(|| format!("Failed to read columns of {}", table))?;

        Ok(result.rows.into_iter().map(first_text).collect())
    }

    pub fn table_data(&self, table: &str) -> Result<TableData> {
        let result = self.run(&select_all(table))?;
        Ok(TableData {
            name: table.to_string(),
            columns: result.columns,
            rows: result.rows,
        })
    }

    /// Look for `value` in every column of every table, one entry per table
    pub fn search_all_tables(&self, value: &str) -> Result<Vec<TableData>> {
        let mut matches = Vec::new();

        for table in self.list_tables()? {
            let columns = self.column_names(&table)?;
            let statement = search_all_columns(&table, &columns, value)?;
            let result = self.run(&statement)?;

            matches.push(TableData {
                name: table,
                columns: result.columns,
                rows: result.rows,
            });
        }

        Ok(matches)
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")
    }
}

fn first_text(row: Vec<SqlValue>) -> String {
    row.into_iter()
        .next()
        .map(|v| v.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> Database {
        let db = Database::open_in_memory(&ConnectOptions::default()).unwrap();
        db.run(&Statement::new(
            "CREATE TABLE Destination (Airport_Destination_Code VARCHAR(25) PRIMARY KEY, Location VARCHAR(25), Country VARCHAR(25))",
        ))
        .unwrap();
        db
    }

    #[test]
    fn test_foreign_keys_follow_options() {
        let default = Database::open_in_memory(&ConnectOptions::default()).unwrap();
        assert!(!default.foreign_keys_enforced().unwrap());

        let enforced = Database::open_in_memory(&ConnectOptions {
            enforce_foreign_keys: true,
        })
        .unwrap();
        assert!(enforced.foreign_keys_enforced().unwrap());
    }

    #[test]
    fn test_default_connection_deletes_referenced_parent() {
        let db = Database::open_in_memory(&ConnectOptions::default()).unwrap();
        db.run(&Statement::new("CREATE TABLE Pilot (Pilot_ID VARCHAR(25) PRIMARY KEY)"))
            .unwrap();
        db.run(&Statement::new(
            "CREATE TABLE Pilot_Flight (Pilot_ID VARCHAR(25) REFERENCES Pilot(Pilot_ID))",
        ))
        .unwrap();
        db.run(&Statement::new("INSERT INTO Pilot VALUES ('CPL005')")).unwrap();
        db.run(&Statement::new("INSERT INTO Pilot_Flight VALUES ('CPL005')"))
            .unwrap();

        let result = db
            .run(&Statement::new("DELETE FROM Pilot WHERE Pilot_ID = ?").bind("CPL005"))
            .unwrap();
        assert_eq!(result.rows_affected, 1);
    }

    #[test]
    fn test_empty_database_has_no_tables() {
        let db = Database::open_in_memory(&ConnectOptions::default()).unwrap();
        assert!(db.list_tables().unwrap().is_empty());
    }

    #[test]
    fn test_run_reports_rows_affected() {
        let db = scratch();
        let result = db
            .run(
                &Statement::new("INSERT INTO Destination VALUES (?, ?, ?)")
                    .bind("EDI")
                    .bind("Edinburgh")
                    .bind("UK"),
            )
            .unwrap();
        assert_eq!(result.rows_affected, 1);
        assert!(result.columns.is_empty());
    }

    #[test]
    fn test_introspection() {
        let db = scratch();
        assert_eq!(db.list_tables().unwrap(), vec!["Destination"]);
        assert_eq!(
            db.column_names("Destination").unwrap(),
            vec!["Airport_Destination_Code", "Location", "Country"]
        );
        assert!(db.column_names("Nope").unwrap().is_empty());

        let data = db.table_data("Destination").unwrap();
        assert_eq!(data.columns.len(), 3);
        assert!(data.is_empty());
    }

    #[test]
    fn test_search_all_tables() {
        let db = scratch();
        db.run(&Statement::new("INSERT INTO Destination VALUES ('FCO', 'Rome', 'Italy'), ('EDI', 'Edinburgh', 'UK')"))
            .unwrap();

        let hits = db.search_all_tables("Italy").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].rows.len(), 1);
        assert_eq!(hits[0].rows[0][1], SqlValue::from("Rome"));
    }

    #[test]
    fn test_driver_errors_propagate() {
        let db = scratch();
        assert!(db.table_data("Missing").is_err());
        assert!(db.run(&Statement::new("NOT SQL")).is_err());
    }
}
