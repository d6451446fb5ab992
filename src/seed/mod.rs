//! Seed data shipped with the binary, one JSON-lines file per table.

pub mod record;

pub use record::*;

use anyhow::{Context, Result};

use crate::schema::TableSchema;

/// Parse the embedded seed lines of a table
pub fn seed_rows(schema: &TableSchema) -> Result<Vec<ParsedRow>> {
    schema
        .seed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_record(line, schema).with_context(|| {
                format!("Failed to parse seed record {} for {}", idx + 1, schema.name)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ALL_TABLES;

    #[test]
    fn test_all_seed_files_parse() {
        let counts: Vec<(&str, usize)> = ALL_TABLES
            .iter()
            .map(|t| (t.name, seed_rows(t).unwrap().len()))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("Aircraft", 5),
                ("Flight", 5),
                ("Pilot", 10),
                ("Destination", 5),
                ("Pilot_Flight", 10),
                ("Aircraft_Destination", 5),
                ("Aircraft_Flight", 5),
            ]
        );
    }
}
