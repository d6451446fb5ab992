use anyhow::Result;
use std::io::{BufRead, Write};

use super::render::{join_row, write_numbered, write_table};
use super::{step, Flow, Menu, Step};
use crate::db::{
    aircraft_by_status, delete_column, delete_rows, flight_numbers, flight_summary, insert_row,
    pilots_by_rank, update_cell, AircraftStatus, Catalog, Columns, PilotRanking, QueryError,
    RowListing, SqlValue,
};

const BACK_HINT: &str = "or type 'x' to go back to the start menu";

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(super) fn list_tables(&mut self) -> Result<Flow> {
        let heading = self.options.theme.heading("===========LIST OF TABLES===========");
        writeln!(self.output, "\n{}\n", heading)?;

        let catalog = Catalog::load(self.db)?;
        if catalog.is_empty() {
            writeln!(self.output, "Database is empty.")?;
        } else {
            write_numbered(&mut self.output, catalog.names())?;
        }
        Ok(Flow::Continue)
    }

    pub(super) fn view_table(&mut self) -> Result<Flow> {
        let table = step!(self.pick_table());
        let data = self.db.table_data(&table)?;
        write_table(&mut self.output, &data)?;
        Ok(Flow::Continue)
    }

    pub(super) fn search(&mut self) -> Result<Flow> {
        let value = step!(self.ask("Input the attribute you are searching for (case sensitive): "));

        for hit in self.db.search_all_tables(&value)? {
            if hit.rows.is_empty() {
                writeln!(
                    self.output,
                    "No matching records were found in table {}",
                    hit.name
                )?;
            } else {
                writeln!(self.output, "\nMatching records in table {}:", hit.name)?;
                for row in &hit.rows {
                    writeln!(self.output, "{}", join_row(row))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    pub(super) fn update(&mut self) -> Result<Flow> {
        let db = self.db;
        let table = step!(self.pick_table());
        let column = step!(self.pick_column(&table));

        let rows = RowListing::load(db, &table, &column)?;
        if rows.is_empty() {
            writeln!(self.output, "{} table has no data.", table)?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output)?;
        let values: Vec<&SqlValue> = rows.cells().iter().map(|c| &c.value).collect();
        write_numbered(&mut self.output, &values)?;
        let prompt = format!(
            "\nNow select one of the {} rows from the {} table {}: ",
            rows.len(),
            table,
            BACK_HINT
        );
        let cell = step!(self.pick(&prompt, rows.len(), |n| rows.row(n).cloned()));

        let new_value = step!(self.ask("Type in the updated value: "));
        db.run(&update_cell(
            &table,
            &column,
            cell.rowid,
            SqlValue::from_input(&new_value),
        ))?;

        self.show_updated(&table)
    }

    pub(super) fn delete(&mut self) -> Result<Flow> {
        let db = self.db;
        let table = step!(self.pick_table());
        write_table(&mut self.output, &db.table_data(&table)?)?;

        let choice = step!(self.ask("\nType '1' to delete a column or '2' to delete a row: "));
        match choice.trim() {
            "1" => {
                let column = step!(self.pick_column(&table));
                db.run(&delete_column(&table, &column))?;
            }
            "2" => {
                let column = step!(self.pick_column(&table));
                let value = step!(self.ask(
                    "\nType in the value of the row you want to delete (case sensitive): "
                ));
                // Matched as typed; an empty answer matches empty text, not NULL
                let result = db.run(&delete_rows(&table, &column, SqlValue::Text(value)))?;
                writeln!(self.output, "Deleted {} row(s).", result.rows_affected)?;
            }
            "x" | "X" => return Ok(Flow::Continue),
            _ => {
                writeln!(self.output, "Invalid input, please try again.")?;
                return Ok(Flow::Continue);
            }
        }

        self.show_updated(&table)
    }

    pub(super) fn insert(&mut self) -> Result<Flow> {
        let db = self.db;
        let table = step!(self.pick_table());

        writeln!(self.output, "Selected table:")?;
        write_table(&mut self.output, &db.table_data(&table)?)?;

        let columns = Columns::load(db, &table)?;
        writeln!(self.output, "\nfor each column insert value\n")?;

        let mut values = Vec::with_capacity(columns.len());
        for column in columns.names() {
            let value = step!(self.ask(&format!("{}: ", column)));
            values.push(SqlValue::from_input(&value));
        }

        db.run(&insert_row(&table, columns.names(), values)?)?;
        self.show_updated(&table)
    }

    pub(super) fn flight_summary(&mut self) -> Result<Flow> {
        let numbers = flight_numbers(self.db)?;
        if numbers.is_empty() {
            writeln!(self.output, "Flight table has no data.")?;
            return Ok(Flow::Continue);
        }

        write_numbered(&mut self.output, &numbers)?;
        let prompt = format!(
            "\nNow type in the number of the desired flight (1-{}) to get flight duration and passenger count {}: ",
            numbers.len(),
            BACK_HINT
        );
        let flight = step!(self.pick(&prompt, numbers.len(), |n| {
            n.checked_sub(1)
                .and_then(|i| numbers.get(i))
                .cloned()
                .ok_or_else(|| QueryError::UnknownFlight(n.to_string()))
        }));

        let summary = flight_summary(self.db, &flight)?;
        writeln!(self.output, "Total flight duration: {}", summary.duration)?;
        writeln!(self.output, "Total passenger count: {}", summary.passenger_count)?;
        Ok(Flow::Continue)
    }

    pub(super) fn aircraft_by_status(&mut self) -> Result<Flow> {
        let choice = step!(self.ask(&format!(
            "\n Search one of the following (1-3) \n 1. active \n 2. retired \n 3. in maintenance \n {}: ",
            BACK_HINT
        )));

        let status = match choice.trim() {
            "x" | "X" => return Ok(Flow::Continue),
            other => match AircraftStatus::from_choice(other) {
                Some(status) => status,
                None => {
                    writeln!(self.output, "Invalid input, please try again.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let aircraft = aircraft_by_status(self.db, status)?;
        if aircraft.is_empty() {
            writeln!(self.output, "No {} aircraft found.", status.as_str())?;
        }
        for listing in aircraft {
            writeln!(self.output, "{}", listing)?;
        }
        Ok(Flow::Continue)
    }

    pub(super) fn pilots_by_rank(&mut self) -> Result<Flow> {
        let choice = step!(self.ask(&format!(
            "\n Search one of the following (1-2) \n 1. Captain \n 2. Cadet \n {}: ",
            BACK_HINT
        )));

        let ranking = match choice.trim() {
            "x" | "X" => return Ok(Flow::Continue),
            other => match PilotRanking::from_choice(other) {
                Some(ranking) => ranking,
                None => {
                    writeln!(self.output, "Invalid input, please try again.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let pilots = pilots_by_rank(self.db, ranking)?;
        if pilots.is_empty() {
            writeln!(self.output, "No pilots ranked {} found.", ranking.as_str())?;
        }
        for pilot in pilots {
            writeln!(self.output, "{}", pilot)?;
        }
        Ok(Flow::Continue)
    }

    /// List the tables and let the user pick one by number
    fn pick_table(&mut self) -> Result<Step<String>> {
        let catalog = Catalog::load(self.db)?;
        if catalog.is_empty() {
            writeln!(self.output, "Database is empty.")?;
            return Ok(Step::Back);
        }

        write_numbered(&mut self.output, catalog.names())?;
        let prompt = format!(
            "\nNow select one of the {} tables by typing the number of the desired table {}: ",
            catalog.len(),
            BACK_HINT
        );
        self.pick(&prompt, catalog.len(), |n| catalog.table(n).map(str::to_string))
    }

    /// List the columns of `table` and let the user pick one by number
    fn pick_column(&mut self, table: &str) -> Result<Step<String>> {
        let columns = Columns::load(self.db, table)?;

        writeln!(self.output)?;
        write_numbered(&mut self.output, columns.names())?;
        let prompt = format!(
            "\nNow select one of the {} columns from the {} table {}: ",
            columns.len(),
            table,
            BACK_HINT
        );
        self.pick(&prompt, columns.len(), |n| columns.column(n).map(str::to_string))
    }

    fn show_updated(&mut self, table: &str) -> Result<Flow> {
        writeln!(self.output, "\nUPDATED TABLE:\n")?;
        write_table(&mut self.output, &self.db.table_data(table)?)?;
        Ok(Flow::Continue)
    }
}
