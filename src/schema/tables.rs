//! Table schema definitions for the aircraft management database

use super::types::*;

pub const AIRCRAFT_STATUSES: &[&str] = &["Active", "Maintenance", "Retired"];
pub const PILOT_RANKINGS: &[&str] = &["Cadet", "Captain"];
pub const CREW_RANKINGS: &[&str] = &["Pilot Cadet", "Second officer", "Cadet", "Captain"];

const CODE: ColumnType = ColumnType::Varchar(25);

// =============================================================================
// Entity Tables
// =============================================================================

pub static AIRCRAFT: TableSchema = TableSchema {
    name: "Aircraft",
    columns: &[
        Column::new("Aircraft_Registration_Number", CODE),
        Column::new("Seat_Capacity", ColumnType::Integer),
        Column::required("Manufacturer", CODE),
        Column::required("Status", ColumnType::Text).one_of(AIRCRAFT_STATUSES),
    ],
    primary_key: "Aircraft_Registration_Number",
    foreign_keys: &[],
    seed: include_str!("../seed/data/aircraft.jsonl"),
};

pub static FLIGHT: TableSchema = TableSchema {
    name: "Flight",
    columns: &[
        Column::new("Flight_Number", CODE),
        Column::required("Aircraft_Registration_Number", CODE),
        Column::required("Departure_Airport_Code", CODE),
        Column::required("Arrival_Airport_Code", CODE),
        Column::new("Departure_Date_Time", ColumnType::DateTime),
        Column::new("Arrival_Date_Time", ColumnType::DateTime),
        Column::new("Passenger_Count", ColumnType::Integer),
        Column::new("Flight_Duration", ColumnType::Integer),
    ],
    primary_key: "Flight_Number",
    foreign_keys: &[ForeignKey::new("Aircraft_Registration_Number", "Aircraft")],
    seed: include_str!("../seed/data/flight.jsonl"),
};

pub static PILOT: TableSchema = TableSchema {
    name: "Pilot",
    columns: &[
        Column::new("Commercial_Pilot_License_Number", CODE),
        Column::required("First_Name", CODE),
        Column::required("Last_Name", CODE),
        Column::required("License_Number", CODE),
        Column::required("Contact_Number", CODE),
        Column::required("Pilot_Ranking", ColumnType::Text).one_of(PILOT_RANKINGS),
    ],
    primary_key: "Commercial_Pilot_License_Number",
    foreign_keys: &[],
    seed: include_str!("../seed/data/pilot.jsonl"),
};

pub static DESTINATION: TableSchema = TableSchema {
    name: "Destination",
    columns: &[
        Column::new("Airport_Destination_Code", CODE),
        Column::required("Location", CODE),
        Column::required("Country", CODE),
    ],
    primary_key: "Airport_Destination_Code",
    foreign_keys: &[],
    seed: include_str!("../seed/data/destination.jsonl"),
};

// =============================================================================
// Junction Tables
// =============================================================================

pub static PILOT_FLIGHT: TableSchema = TableSchema {
    name: "Pilot_Flight",
    columns: &[
        Column::new("Pilot_Flight_ID", ColumnType::Integer),
        Column::new("Commercial_Pilot_License_Number", CODE),
        Column::new("Flight_Number", CODE),
        Column::required("Pilot_Ranking", ColumnType::Text).one_of(CREW_RANKINGS),
    ],
    primary_key: "Pilot_Flight_ID",
    foreign_keys: &[
        ForeignKey::new("Commercial_Pilot_License_Number", "Pilot"),
        ForeignKey::new("Flight_Number", "Flight"),
    ],
    seed: include_str!("../seed/data/pilot_flight.jsonl"),
};

pub static AIRCRAFT_DESTINATION: TableSchema = TableSchema {
    name: "Aircraft_Destination",
    columns: &[
        Column::new("Aircraft_Destination_ID", ColumnType::Integer),
        Column::new("Aircraft_Registration_Number", CODE),
        Column::new("Airport_Destination_Code", CODE),
    ],
    primary_key: "Aircraft_Destination_ID",
    foreign_keys: &[
        ForeignKey::new("Aircraft_Registration_Number", "Aircraft"),
        ForeignKey::new("Airport_Destination_Code", "Destination"),
    ],
    seed: include_str!("../seed/data/aircraft_destination.jsonl"),
};

pub static AIRCRAFT_FLIGHT: TableSchema = TableSchema {
    name: "Aircraft_Flight",
    columns: &[
        Column::new("Aircraft_Flight_ID", ColumnType::Integer),
        Column::new("Aircraft_Registration_Number", CODE),
        Column::new("Flight_Number", CODE),
    ],
    primary_key: "Aircraft_Flight_ID",
    foreign_keys: &[
        ForeignKey::new("Aircraft_Registration_Number", "Aircraft"),
        ForeignKey::new("Flight_Number", "Flight"),
    ],
    seed: include_str!("../seed/data/aircraft_flight.jsonl"),
};

/// All tables in creation order
pub static ALL_TABLES: &[&TableSchema] = &[
    &AIRCRAFT,
    &FLIGHT,
    &PILOT,
    &DESTINATION,
    &PILOT_FLIGHT,
    &AIRCRAFT_DESTINATION,
    &AIRCRAFT_FLIGHT,
];

/// Look up a table schema by name (case sensitive, as SQLite reports it)
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().copied().find(|t| t.name == name)
}
