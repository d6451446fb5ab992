/// What the user typed at a numbered prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// A positive number, not yet checked against the list length
    Number(usize),
    /// `x`: go back to the start menu
    Back,
    Invalid,
}

pub fn parse_choice(input: &str) -> Choice {
    let input = input.trim();

    if input.eq_ignore_ascii_case("x") {
        return Choice::Back;
    }

    match input.parse::<usize>() {
        Ok(n) if n > 0 => Choice::Number(n),
        _ => Choice::Invalid,
    }
}

/// Start menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ListTables,
    ViewTable,
    Search,
    Update,
    Delete,
    Insert,
    FlightSummary,
    AircraftByStatus,
    PilotsByRank,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 10] = [
        MenuAction::ListTables,
        MenuAction::ViewTable,
        MenuAction::Search,
        MenuAction::Update,
        MenuAction::Delete,
        MenuAction::Insert,
        MenuAction::FlightSummary,
        MenuAction::AircraftByStatus,
        MenuAction::PilotsByRank,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ListTables => "List all tables",
            MenuAction::ViewTable => "View table data",
            MenuAction::Search => "Search data",
            MenuAction::Update => "Update data",
            MenuAction::Delete => "Delete data",
            MenuAction::Insert => "Insert data",
            MenuAction::FlightSummary => {
                "Get the length of an entire flight and total passenger count"
            }
            MenuAction::AircraftByStatus => "Find available aircrafts",
            MenuAction::PilotsByRank => "Find pilots by rank",
            MenuAction::Quit => "Quit",
        }
    }

    /// Parse the start-menu selection; only exact numbers 1 to 10 are accepted
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=Self::ALL.len()).contains(&n) => Some(Self::ALL[n - 1]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("3"), Choice::Number(3));
        assert_eq!(parse_choice(" 12\n"), Choice::Number(12));
        assert_eq!(parse_choice("x"), Choice::Back);
        assert_eq!(parse_choice("X"), Choice::Back);
        assert_eq!(parse_choice("0"), Choice::Invalid);
        assert_eq!(parse_choice("-1"), Choice::Invalid);
        assert_eq!(parse_choice("two"), Choice::Invalid);
        assert_eq!(parse_choice(""), Choice::Invalid);
    }

    #[test]
    fn test_menu_action_from_input() {
        assert_eq!(MenuAction::from_input("1"), Some(MenuAction::ListTables));
        assert_eq!(MenuAction::from_input("10"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_input("11"), None);
        assert_eq!(MenuAction::from_input("0"), None);
        assert_eq!(MenuAction::from_input("quit"), None);
    }
}
