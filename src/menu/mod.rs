//! Interactive start menu.
//!
//! The loop reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so tests drive it with scripted input. Errors raised by an
//! action are printed and the loop carries on; only failures of the
//! terminal itself end it.

mod actions;
pub mod prompt;
pub mod render;

use anyhow::Result;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use crate::db::{Database, QueryError};
use prompt::{parse_choice, Choice, MenuAction};
pub use render::Theme;

#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
    /// Pause after every action so the output can be read
    pub pause: Duration,
    pub theme: Theme,
}

/// Whether the start menu should be shown again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of one prompt inside an action
enum Step<T> {
    Go(T),
    /// Return to the start menu
    Back,
    /// Input ended
    Quit,
}

/// Unwrap a `Result<Step<T>>`, leaving the action early on back or quit
macro_rules! step {
    ($e:expr) => {
        match $e? {
            Step::Go(value) => value,
            Step::Back => return Ok(Flow::Continue),
            Step::Quit => return Ok(Flow::Quit),
        }
    };
}
pub(crate) use step;

pub struct Menu<'a, R, W> {
    db: &'a Database,
    input: R,
    output: W,
    options: MenuOptions,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(db: &'a Database, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            db,
            input,
            output,
            options,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_start_menu()?;

            let Some(line) = self.read_line("Select one of the following (1-10): ")? else {
                break;
            };

            let Some(action) = MenuAction::from_input(&line) else {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 10."
                )?;
                self.pause();
                continue;
            };

            if action == MenuAction::Quit {
                break;
            }

            debug!(?action, "menu action");
            match self.dispatch(action) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    warn!("{:#}", e);
                    let message = self.options.theme.error(&format!("Error: {:#}", e));
                    writeln!(self.output, "{}", message)?;
                }
            }
            self.pause();
        }

        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<Flow> {
        match action {
            MenuAction::ListTables => self.list_tables(),
            MenuAction::ViewTable => self.view_table(),
            MenuAction::Search => self.search(),
            MenuAction::Update => self.update(),
            MenuAction::Delete => self.delete(),
            MenuAction::Insert => self.insert(),
            MenuAction::FlightSummary => self.flight_summary(),
            MenuAction::AircraftByStatus => self.aircraft_by_status(),
            MenuAction::PilotsByRank => self.pilots_by_rank(),
            MenuAction::Quit => Ok(Flow::Quit),
        }
    }

    fn print_start_menu(&mut self) -> Result<()> {
        let heading = self.options.theme.heading("START MENU");
        writeln!(self.output, "\n\n{}\n", heading)?;
        for (idx, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, action.label())?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Show a prompt and read one line without its line ending; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    /// Read a free-form value
    fn ask(&mut self, prompt: &str) -> Result<Step<String>> {
        Ok(match self.read_line(prompt)? {
            Some(line) => Step::Go(line),
            None => Step::Quit,
        })
    }

    /// Read a number for a list of `count` entries and resolve it
    fn pick<T>(
        &mut self,
        prompt: &str,
        count: usize,
        resolve: impl FnOnce(usize) -> Result<T, QueryError>,
    ) -> Result<Step<T>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(Step::Quit);
        };

        let resolved = match parse_choice(&line) {
            Choice::Back => return Ok(Step::Back),
            Choice::Number(n) => resolve(n),
            Choice::Invalid => {
                self.invalid_choice(count)?;
                return Ok(Step::Back);
            }
        };

        match resolved {
            Ok(value) => Ok(Step::Go(value)),
            Err(e) => {
                debug!("{}", e);
                self.invalid_choice(count)?;
                Ok(Step::Back)
            }
        }
    }

    fn invalid_choice(&mut self, count: usize) -> Result<()> {
        writeln!(
            self.output,
            "Invalid choice. Please enter a number between 1 and {}.",
            count
        )?;
        Ok(())
    }

    fn pause(&self) {
        if !self.options.pause.is_zero() {
            thread::sleep(self.options.pause);
        }
    }
}
