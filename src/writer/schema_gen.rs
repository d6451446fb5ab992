use crate::db::quote_ident;
use crate::schema::TableSchema;

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", schema.name);
    let mut columns = Vec::new();

    for col in schema.columns {
        let mut def = format!("    {} {}", col.name, col.col_type.sql_name());

        if col.name == schema.primary_key {
            def.push_str(" PRIMARY KEY");
        }

        if let Some(fk) = schema.foreign_key(col.name) {
            def.push_str(&format!(
                " REFERENCES {}({})",
                fk.references_table, fk.references_column
            ));
        }

        if !col.allowed.is_empty() {
            let allowed: Vec<String> = col
                .allowed
                .iter()
                .map(|v| format!("'{}'", v.replace('\'', "''")))
                .collect();
            def.push_str(&format!(" CHECK ({} IN ({}))", col.name, allowed.join(", ")));
        }

        if !col.nullable {
            def.push_str(" NOT NULL");
        }

        columns.push(def);
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

pub fn generate_drop_table(schema: &TableSchema) -> String {
    format!("DROP TABLE IF EXISTS {}", schema.name)
}

/// Seed insert with one placeholder per column; existing keys are left alone
pub fn generate_seed_insert(schema: &TableSchema) -> String {
    let columns: Vec<String> = schema.columns.iter().map(|c| quote_ident(c.name)).collect();
    let placeholders: Vec<&str> = schema.columns.iter().map(|_| "?").collect();

    format!(
        "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
        quote_ident(schema.name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{AIRCRAFT, DESTINATION, PILOT_FLIGHT};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&AIRCRAFT);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS Aircraft"));
        assert!(sql.contains("Aircraft_Registration_Number VARCHAR(25) PRIMARY KEY"));
        assert!(sql.contains("Seat_Capacity INT,"));
        assert!(sql.contains("Manufacturer VARCHAR(25) NOT NULL"));
        assert!(sql.contains(
            "Status TEXT CHECK (Status IN ('Active', 'Maintenance', 'Retired')) NOT NULL"
        ));
    }

    #[test]
    fn test_generate_references() {
        let sql = generate_create_table(&PILOT_FLIGHT);
        assert!(sql.contains(
            "Commercial_Pilot_License_Number VARCHAR(25) REFERENCES Pilot(Commercial_Pilot_License_Number)"
        ));
        assert!(sql.contains("Flight_Number VARCHAR(25) REFERENCES Flight(Flight_Number)"));
        assert!(sql.contains("'Second officer'"));
    }

    #[test]
    fn test_generate_seed_insert() {
        assert_eq!(
            generate_seed_insert(&DESTINATION),
            "INSERT OR IGNORE INTO \"Destination\" (\"Airport_Destination_Code\", \"Location\", \"Country\") VALUES (?, ?, ?)"
        );
        assert_eq!(generate_drop_table(&DESTINATION), "DROP TABLE IF EXISTS Destination");
    }
}
