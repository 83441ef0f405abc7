//! Text rendering for listings and summaries. Pure functions so the output can be tested.

use crate::{
    core::services::{CategoryTotal, MonthSummary},
    ledger::Entry,
};

pub const EMPTY_LISTING: &str = "There is no transaction to display.";

pub fn listing_lines<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<String> {
    entries.into_iter().map(Entry::to_string).collect()
}

pub fn balance_line(balance: f64) -> String {
    format!("Total Balance: {balance:.2}")
}

pub fn removed_line(entry: &Entry) -> String {
    format!(
        "Removed: {}: {} | {:.2}",
        entry.date_text(),
        entry.description(),
        entry.amount()
    )
}

pub fn category_lines(totals: &[CategoryTotal]) -> Vec<String> {
    totals
        .iter()
        .map(|total| format!("{}: {:.2}", total.display_name(), total.total))
        .collect()
}

pub fn month_lines(months: &[MonthSummary]) -> Vec<String> {
    months
        .iter()
        .map(|summary| {
            format!(
                "{} - Income: {:.2} | Expense: {:.2}",
                summary.month, summary.income, summary.expense
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::ledger::{EntryKind, Ledger};

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        for (amount, description, category, date, kind) in [
            (100.0, "Paycheck", "Salary", "2025-01-01", EntryKind::Income),
            (40.0, "Groceries", "Food", "2025-01-15", EntryKind::Expense),
            (12.5, "Takeaway", " food", "2025-02-03 19:45:00", EntryKind::Expense),
            (300.0, "Bonus", "eating out", "2024-12-20", EntryKind::Income),
        ] {
            ledger.push(Entry::new(amount, description, category, date, kind).unwrap());
        }
        ledger
    }

    #[test]
    fn listing_renders_each_entry() {
        insta::assert_snapshot!(listing_lines(&sample()).join("\n"), @r###"
        2025-01-01: Paycheck | 100.00 | Salary | income
        2025-01-15: Groceries | 40.00 | Food | expense
        2025-02-03: Takeaway | 12.50 |  food | expense
        2024-12-20: Bonus | 300.00 | eating out | income
        "###);
    }

    #[test]
    fn category_report_uses_title_case() {
        let totals = SummaryService::by_category(&sample());
        insta::assert_snapshot!(category_lines(&totals).join("\n"), @r###"
        Salary: 100.00
        Food: 52.50
        Eating Out: 300.00
        "###);
    }

    #[test]
    fn month_report_is_ascending() {
        let months = SummaryService::by_month(&sample());
        insta::assert_snapshot!(month_lines(&months).join("\n"), @r###"
        2024-12 - Income: 300.00 | Expense: 0.00
        2025-01 - Income: 100.00 | Expense: 40.00
        2025-02 - Income: 0.00 | Expense: 12.50
        "###);
    }

    #[test]
    fn balance_uses_two_decimals() {
        assert_eq!(balance_line(sample().balance()), "Total Balance: 347.50");
        assert_eq!(balance_line(0.0), "Total Balance: 0.00");
    }

    #[test]
    fn removed_line_mentions_date_and_amount() {
        let entry = Entry::new(3.0, "Coffee", "Food", "2025-05-06", EntryKind::Expense).unwrap();
        assert_eq!(removed_line(&entry), "Removed: 2025-05-06: Coffee | 3.00");
    }
}
