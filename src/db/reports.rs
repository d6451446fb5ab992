//! Fixed queries over the aircraft schema behind menu items 7 to 9.

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use super::connection::Database;
use super::error::QueryError;
use super::query::Statement;
use super::value::SqlValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftStatus {
    Active,
    Retired,
    Maintenance,
}

impl AircraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AircraftStatus::Active => "Active",
            AircraftStatus::Retired => "Retired",
            AircraftStatus::Maintenance => "Maintenance",
        }
    }

    /// Map the numbered sub-menu choice (1 active, 2 retired, 3 in maintenance)
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(AircraftStatus::Active),
            "2" => Some(AircraftStatus::Retired),
            "3" => Some(AircraftStatus::Maintenance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotRanking {
    Captain,
    Cadet,
}

impl PilotRanking {
    pub fn as_str(&self) -> &'static str {
        match self {
            PilotRanking::Captain => "Captain",
            PilotRanking::Cadet => "Cadet",
        }
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(PilotRanking::Captain),
            "2" => Some(PilotRanking::Cadet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub flight_number: String,
    pub duration: SqlValue,
    pub passenger_count: SqlValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftListing {
    pub registration: String,
    pub manufacturer: String,
}

impl fmt::Display for AircraftListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.manufacturer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotListing {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for PilotListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

pub fn flight_numbers(db: &Database) -> Result<Vec<String>> {
    let result = db.run(&Statement::new("SELECT Flight_Number FROM Flight ORDER BY rowid"))?;
    Ok(result.rows.iter().map(|row| text_at(row, 0)).collect())
}

pub fn flight_summary(db: &Database, flight_number: &str) -> Result<FlightSummary> {
    let result = db.run(
        &Statement::new(
            "SELECT Flight_Duration, Passenger_Count FROM Flight WHERE Flight_Number = ?",
        )
        .bind(flight_number),
    )?;

    let row = result
        .rows
        .into_iter()
        .next()
        .ok_or_else(|| QueryError::UnknownFlight(flight_number.to_string()))?;
    let mut values = row.into_iter();

    Ok(FlightSummary {
        flight_number: flight_number.to_string(),
        duration: values.next().unwrap_or(SqlValue::Null),
        passenger_count: values.next().unwrap_or(SqlValue::Null),
    })
}

pub fn aircraft_by_status(db: &Database, status: AircraftStatus) -> Result<Vec<AircraftListing>> {
    let result = db.run(
        &Statement::new(
            "SELECT Aircraft_Registration_Number, Manufacturer FROM Aircraft WHERE Status = ?",
        )
        .bind(status.as_str()),
    )?;

    Ok(result
        .rows
        .iter()
        .map(|row| AircraftListing {
            registration: text_at(row, 0),
            manufacturer: text_at(row, 1),
        })
        .collect())
}

pub fn pilots_by_rank(db: &Database, ranking: PilotRanking) -> Result<Vec<PilotListing>> {
    let result = db.run(
        &Statement::new("SELECT First_Name, Last_Name FROM Pilot WHERE Pilot_Ranking = ?")
            .bind(ranking.as_str()),
    )?;

    Ok(result
        .rows
        .iter()
        .map(|row| PilotListing {
            first_name: text_at(row, 0),
            last_name: text_at(row, 1),
        })
        .collect())
}

fn text_at(row: &[SqlValue], idx: usize) -> String {
    row.get(idx).map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_choices() {
        assert_eq!(AircraftStatus::from_choice("1"), Some(AircraftStatus::Active));
        assert_eq!(AircraftStatus::from_choice("3"), Some(AircraftStatus::Maintenance));
        assert_eq!(AircraftStatus::from_choice("4"), None);
        assert_eq!(PilotRanking::from_choice("2"), Some(PilotRanking::Cadet));
        assert_eq!(PilotRanking::from_choice("x"), None);
    }

    #[test]
    fn test_listings_display() {
        let aircraft = AircraftListing {
            registration: "EI-DCJ".into(),
            manufacturer: "Boeing".into(),
        };
        assert_eq!(aircraft.to_string(), "EI-DCJ (Boeing)");

        let pilot = PilotListing {
            first_name: "John".into(),
            last_name: "Wayne".into(),
        };
        assert_eq!(pilot.to_string(), "John Wayne");
    }
}
