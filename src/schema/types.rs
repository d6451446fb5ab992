use std::collections::HashSet;

/// Declared SQL type of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Text,
    DateTime,
    /// VARCHAR with a declared length (SQLite does not enforce it)
    Varchar(u16),
}

impl ColumnType {
    pub fn sql_name(&self) -> String {
        match self {
            ColumnType::Integer => "INT".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::DateTime => "DATETIME".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({})", len),
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
    /// Allowed values, emitted as `CHECK (name IN (...))`
    pub allowed: &'static [&'static str],
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
            allowed: &[],
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
            allowed: &[],
        }
    }

    /// Restrict the column to a fixed set of values
    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        Self { allowed, ..self }
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

impl ForeignKey {
    /// Reference a column of the same name in the parent table
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: column,
        }
    }
}

/// Table schema definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static str,
    pub foreign_keys: &'static [ForeignKey],
    /// Embedded JSON lines used to seed the table
    pub seed: &'static str,
}

impl TableSchema {
    /// Get all tables this table depends on (FK parents)
    pub fn dependencies(&self) -> HashSet<&'static str> {
        self.foreign_keys
            .iter()
            .map(|fk| fk.references_table)
            .collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn foreign_key(&self, column: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.column == column)
    }
}
