use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{self, Write};

use crate::db::{SqlValue, TableData};

/// Terminal styling applied to headings and errors
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn join_row(row: &[SqlValue]) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header line of column names, then one comma-separated line per row
pub fn write_table(out: &mut impl Write, table: &TableData) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(out, "{} table has no data.", table.name);
    }

    writeln!(out, "{}", table.columns.join(", "))?;
    for row in &table.rows {
        writeln!(out, "{}", join_row(row))?;
    }
    Ok(())
}

/// `1. first`, `2. second`, ...
pub fn write_numbered<T: Display>(out: &mut impl Write, items: &[T]) -> io::Result<()> {
    for (idx, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &TableData) -> String {
        let mut out = Vec::new();
        write_table(&mut out, table).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_table() {
        let table = TableData {
            name: "Destination".into(),
            columns: vec!["Airport_Destination_Code".into(), "Location".into()],
            rows: vec![
                vec!["EDI".into(), "Edinburgh".into()],
                vec!["FCO".into(), SqlValue::Null],
            ],
        };
        assert_eq!(
            render(&table),
            "Airport_Destination_Code, Location\nEDI, Edinburgh\nFCO, NULL\n"
        );
    }

    #[test]
    fn test_write_empty_table() {
        let table = TableData {
            name: "Pilot".into(),
            columns: vec!["First_Name".into()],
            rows: vec![],
        };
        assert_eq!(render(&table), "Pilot table has no data.\n");
    }

    #[test]
    fn test_write_numbered() {
        let mut out = Vec::new();
        write_numbered(&mut out, &["Aircraft", "Flight"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. Aircraft\n2. Flight\n");
    }

    #[test]
    fn test_plain_theme() {
        let theme = Theme::default();
        assert_eq!(theme.heading("START MENU"), "START MENU");
        assert!(Theme { color: true }.heading("START MENU").contains("\u{1b}["));
    }
}
