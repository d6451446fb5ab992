//! Statement builders for the generic table operations.
//!
//! Identifiers come from introspection and are always quoted; values typed
//! by the user are always bound as parameters.

use super::error::QueryError;
use super::value::SqlValue;

/// SQL text plus positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Quote an identifier for SQLite, doubling embedded quotes
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn select_all(table: &str) -> Statement {
    Statement::new(format!("SELECT * FROM {}", quote_ident(table)))
}

/// Every value of one column together with the rowid that identifies it
pub fn select_column_with_rowid(table: &str, column: &str) -> Statement {
    Statement::new(format!(
        "SELECT rowid, {} FROM {} ORDER BY rowid",
        quote_ident(column),
        quote_ident(table)
    ))
}

/// Rows where any column equals `value`
pub fn search_all_columns(
    table: &str,
    columns: &[String],
    value: &str,
) -> Result<Statement, QueryError> {
    if columns.is_empty() {
        return Err(QueryError::NoColumns(table.to_string()));
    }

    let conditions: Vec<String> = columns
        .iter()
        .map(|c| format!("{} = ?1", quote_ident(c)))
        .collect();

    Ok(Statement::new(format!(
        "SELECT * FROM {} WHERE {}",
        quote_ident(table),
        conditions.join(" OR ")
    ))
    .bind(value))
}

pub fn update_cell(table: &str, column: &str, rowid: i64, value: SqlValue) -> Statement {
    Statement::new(format!(
        "UPDATE {} SET {} = ? WHERE rowid = ?",
        quote_ident(table),
        quote_ident(column)
    ))
    .bind(value)
    .bind(rowid)
}

pub fn delete_column(table: &str, column: &str) -> Statement {
    Statement::new(format!(
        "ALTER TABLE {} DROP COLUMN {}",
        quote_ident(table),
        quote_ident(column)
    ))
}

/// Delete every row whose `column` equals `value`
pub fn delete_rows(table: &str, column: &str, value: SqlValue) -> Statement {
    Statement::new(format!(
        "DELETE FROM {} WHERE {} = ?",
        quote_ident(table),
        quote_ident(column)
    ))
    .bind(value)
}

pub fn insert_row(
    table: &str,
    columns: &[String],
    values: Vec<SqlValue>,
) -> Result<Statement, QueryError> {
    if columns.is_empty() {
        return Err(QueryError::NoColumns(table.to_string()));
    }
    if columns.len() != values.len() {
        return Err(QueryError::ValueCountMismatch {
            table: table.to_string(),
            columns: columns.len(),
            values: values.len(),
        });
    }

    let names: Vec<String> = columns.iter().map(|c| quote_ident(c)).collect();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();

    Ok(Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote_ident(table),
            names.join(", "),
            placeholders.join(", ")
        ),
        params: values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("Aircraft"), "\"Aircraft\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_search_binds_value_once() {
        let stmt = search_all_columns("Destination", &cols(&["Location", "Country"]), "Italy")
            .unwrap();
        assert_eq!(
            stmt.sql,
            "SELECT * FROM \"Destination\" WHERE \"Location\" = ?1 OR \"Country\" = ?1"
        );
        assert_eq!(stmt.params, vec![SqlValue::from("Italy")]);
    }

    #[test]
    fn test_search_without_columns() {
        let err = search_all_columns("Empty", &[], "x").unwrap_err();
        assert_eq!(err, QueryError::NoColumns("Empty".to_string()));
    }

    #[test]
    fn test_update_cell_targets_rowid() {
        let stmt = update_cell("Aircraft", "Status", 3, SqlValue::from("Retired"));
        assert_eq!(stmt.sql, "UPDATE \"Aircraft\" SET \"Status\" = ? WHERE rowid = ?");
        assert_eq!(stmt.params, vec![SqlValue::from("Retired"), SqlValue::Integer(3)]);
    }

    #[test]
    fn test_user_input_never_reaches_sql_text() {
        let stmt = delete_rows("Pilot", "First_Name", SqlValue::from("x' OR '1'='1"));
        assert!(!stmt.sql.contains("OR '1'"));
        assert_eq!(stmt.params.len(), 1);
    }

    #[test]
    fn test_insert_row() {
        let stmt = insert_row(
            "Destination",
            &cols(&["Airport_Destination_Code", "Location", "Country"]),
            vec!["DUB".into(), "Dublin".into(), "Ireland".into()],
        )
        .unwrap();
        assert_eq!(
            stmt.sql,
            "INSERT INTO \"Destination\" (\"Airport_Destination_Code\", \"Location\", \"Country\") VALUES (?, ?, ?)"
        );
        assert_eq!(stmt.params.len(), 3);
    }

    #[test]
    fn test_insert_row_count_mismatch() {
        let err = insert_row("Destination", &cols(&["Location", "Country"]), vec!["Dublin".into()])
            .unwrap_err();
        assert!(matches!(err, QueryError::ValueCountMismatch { columns: 2, values: 1, .. }));
    }

    #[test]
    fn test_delete_column() {
        assert_eq!(
            delete_column("Pilot", "Contact_Number").sql,
            "ALTER TABLE \"Pilot\" DROP COLUMN \"Contact_Number\""
        );
    }
}
