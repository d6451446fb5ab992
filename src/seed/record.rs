use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;

use crate::db::SqlValue;
use crate::schema::TableSchema;

/// A parsed row ready for insertion
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub values: HashMap<String, SqlValue>,
}

impl ParsedRow {
    /// Values in the schema's column order, NULL for absent columns
    pub fn ordered(&self, schema: &TableSchema) -> Vec<SqlValue> {
        schema
            .columns
            .iter()
            .map(|col| self.values.get(col.name).cloned().unwrap_or(SqlValue::Null))
            .collect()
    }
}

/// Parse a JSON line keyed by column name into a row for the given table schema
pub fn parse_record(line: &str, schema: &TableSchema) -> Result<ParsedRow> {
    let json: Value = serde_json::from_str(line).context("Failed to parse JSON")?;

    let Some(object) = json.as_object() else {
        bail!("Expected a JSON object for {}", schema.name);
    };

    let mut values = HashMap::new();

    for (key, raw) in object {
        let Some(col) = schema.column(key) else {
            bail!("Unknown column {} for table {}", key, schema.name);
        };

        let value = to_sql_value(raw)
            .with_context(|| format!("Unsupported value for {}.{}", schema.name, key))?;

        if !col.allowed.is_empty() {
            if let Some(text) = value.as_text() {
                if !col.allowed.contains(&text) {
                    bail!(
                        "{} is not an allowed value for {}.{} ({})",
                        text,
                        schema.name,
                        key,
                        col.allowed.join(", ")
                    );
                }
            }
        }

        values.insert(col.name.to_string(), value);
    }

    for col in schema.columns {
        if !col.nullable && values.get(col.name).map_or(true, SqlValue::is_null) {
            bail!("Missing required column {}.{}", schema.name, col.name);
        }
    }

    Ok(ParsedRow { values })
}

fn to_sql_value(value: &Value) -> Result<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(if *b { 1 } else { 0 }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        Value::Array(_) | Value::Object(_) => bail!("nested JSON is not supported"),
    })
}
