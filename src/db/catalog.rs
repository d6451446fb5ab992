//! Resolution of the 1-based indices picked from numbered menu lists.

use anyhow::Result;

use super::connection::Database;
use super::error::QueryError;
use super::query::select_column_with_rowid;
use super::value::SqlValue;

/// Snapshot of the tables present when a menu action starts
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: Vec<String>,
}

impl Catalog {
    pub fn load(db: &Database) -> Result<Self> {
        Ok(Self {
            tables: db.list_tables()?,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, index: usize) -> Result<&str, QueryError> {
        index
            .checked_sub(1)
            .and_then(|i| self.tables.get(i))
            .map(String::as_str)
            .ok_or(QueryError::TableIndexOutOfRange {
                index,
                count: self.tables.len(),
            })
    }

    /// Resolve a table by name, as typed on the command line
    pub fn find(&self, name: &str) -> Result<&str, QueryError> {
        self.tables
            .iter()
            .find(|t| t.as_str() == name)
            .map(String::as_str)
            .ok_or_else(|| QueryError::UnknownTable(name.to_string()))
    }
}

/// Columns of one table
#[derive(Debug, Clone)]
pub struct Columns {
    table: String,
    names: Vec<String>,
}

impl Columns {
    pub fn load(db: &Database, table: &str) -> Result<Self> {
        Ok(Self {
            table: table.to_string(),
            names: db.column_names(table)?,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn column(&self, index: usize) -> Result<&str, QueryError> {
        index
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
            .ok_or_else(|| QueryError::ColumnIndexOutOfRange {
                table: self.table.clone(),
                index,
                count: self.names.len(),
            })
    }
}

/// One cell of a column together with the rowid of its row
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub rowid: i64,
    pub value: SqlValue,
}

/// Every value of one column, used to pick the row to update
#[derive(Debug, Clone)]
pub struct RowListing {
    table: String,
    cells: Vec<Cell>,
}

impl RowListing {
    pub fn load(db: &Database, table: &str, column: &str) -> Result<Self> {
        let result = db.run(&select_column_with_rowid(table, column))?;

        let cells = result
            .rows
            .into_iter()
            .filter_map(|row| {
                let mut values = row.into_iter();
                match (values.next(), values.next()) {
                    (Some(SqlValue::Integer(rowid)), Some(value)) => Some(Cell { rowid, value }),
                    _ => None,
                }
            })
            .collect();

        Ok(Self {
            table: table.to_string(),
            cells,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn row(&self, index: usize) -> Result<&Cell, QueryError> {
        index
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .ok_or_else(|| QueryError::RowIndexOutOfRange {
                table: self.table.clone(),
                index,
                count: self.cells.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ConnectOptions, Statement};

    fn db() -> Database {
        let db = Database::open_in_memory(&ConnectOptions::default()).unwrap();
        for sql in [
            "CREATE TABLE Aircraft (Aircraft_Registration_Number TEXT PRIMARY KEY, Manufacturer TEXT)",
            "CREATE TABLE Destination (Airport_Destination_Code TEXT PRIMARY KEY)",
            "INSERT INTO Aircraft VALUES ('EI-DCJ', 'Boeing'), ('F-WWBY', 'Airbus')",
        ] {
            db.run(&Statement::new(sql)).unwrap();
        }
        db
    }

    #[test]
    fn test_table_indices_are_one_based() {
        let catalog = Catalog::load(&db()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.table(1).unwrap(), "Aircraft");
        assert_eq!(catalog.table(2).unwrap(), "Destination");
        assert_eq!(
            catalog.table(0).unwrap_err(),
            QueryError::TableIndexOutOfRange { index: 0, count: 2 }
        );
        assert!(catalog.table(3).is_err());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::load(&db()).unwrap();
        assert_eq!(catalog.find("Destination").unwrap(), "Destination");
        assert!(matches!(catalog.find("Pilot"), Err(QueryError::UnknownTable(_))));
    }

    #[test]
    fn test_column_indices() {
        let columns = Columns::load(&db(), "Aircraft").unwrap();
        assert_eq!(columns.column(2).unwrap(), "Manufacturer");
        assert!(matches!(
            columns.column(5),
            Err(QueryError::ColumnIndexOutOfRange { count: 2, .. })
        ));
    }

    #[test]
    fn test_row_listing_keeps_rowids() {
        let db = db();
        let rows = RowListing::load(&db, "Aircraft", "Manufacturer").unwrap();
        assert_eq!(rows.len(), 2);

        let cell = rows.row(2).unwrap();
        assert_eq!(cell.value, SqlValue::from("Airbus"));
        assert_eq!(cell.rowid, 2);
        assert!(rows.row(3).is_err());
    }
}
