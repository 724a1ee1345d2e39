//! Menu choices for the interactive shell

/// Lines printed before every prompt for a choice
pub const MENU_LINES: [&str; 5] = [
    "Expense Tracker",
    "1. Add Expense",
    "2. List Expenses",
    "3. Show Total Expenses",
    "4. Exit",
];

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Total,
    Exit,
}

impl MenuChoice {
    /// Parse the text typed at the menu prompt
    ///
    /// Surrounding whitespace is ignored. Anything other than 1-4 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Total),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}
