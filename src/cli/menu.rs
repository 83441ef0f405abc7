use super::output;

pub const MENU_TITLE: &str = "Personal Expense Tracker";

/// Entries of the main menu, numbered 1 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddTransaction,
    ViewTransactions,
    RemoveTransaction,
    ViewBalance,
    SpendingByCategory,
    SummaryByMonth,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::AddTransaction,
        MenuOption::ViewTransactions,
        MenuOption::RemoveTransaction,
        MenuOption::ViewBalance,
        MenuOption::SpendingByCategory,
        MenuOption::SummaryByMonth,
        MenuOption::Exit,
    ];

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|option| option == self)
            .map(|index| index + 1)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::AddTransaction => "Add Transaction",
            MenuOption::ViewTransactions => "View Transactions",
            MenuOption::RemoveTransaction => "Remove Transaction",
            MenuOption::ViewBalance => "View Balance",
            MenuOption::SpendingByCategory => "View spending by Category",
            MenuOption::SummaryByMonth => "Summary by Month",
            MenuOption::Exit => "Exit",
        }
    }

    /// Maps the raw menu choice to an option. Only the bare digit is accepted,
    /// so signs and leading zeros fall through as invalid.
    pub fn from_choice(choice: &str) -> Option<Self> {
        let choice = choice.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.number().to_string() == choice)
    }
}

pub fn menu_lines() -> Vec<String> {
    MenuOption::ALL
        .iter()
        .map(|option| format!("{}. {}", option.number(), option.label()))
        .collect()
}

pub fn render() {
    output::section(MENU_TITLE);
    for line in menu_lines() {
        output::line(line);
    }
}
