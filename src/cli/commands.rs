//! Handlers behind each menu option.

use chrono::NaiveDate;
use strsim::levenshtein;

use crate::{
    errors::CliError,
    ledger::{parse_amount, EntryKind, DATE_FORMAT},
};

use super::{
    io::{LineReader, ReadOutcome},
    menu::MenuOption,
    output, report,
    shell_context::{LoopControl, ShellContext},
};

/// What a prompt inside a form produced.
enum FormInput {
    Value(String),
    /// Ctrl-C inside a form abandons the form only.
    Cancelled,
    Eof,
}

fn prompt(reader: &mut dyn LineReader, text: &str) -> Result<FormInput, CliError> {
    Ok(match reader.read_line(text)? {
        ReadOutcome::Line(line) => FormInput::Value(line),
        ReadOutcome::Interrupted => FormInput::Cancelled,
        ReadOutcome::Eof => FormInput::Eof,
    })
}

macro_rules! field {
    ($reader:expr, $text:expr) => {
        match prompt($reader, $text)? {
            FormInput::Value(value) => value,
            FormInput::Cancelled => {
                output::info("Cancelled.");
                return Ok(LoopControl::Continue);
            }
            FormInput::Eof => return Ok(LoopControl::Exit),
        }
    };
}

pub(crate) fn dispatch(
    context: &mut ShellContext,
    reader: &mut dyn LineReader,
    choice: &str,
) -> Result<LoopControl, CliError> {
    let Some(option) = MenuOption::from_choice(choice) else {
        output::error("Invalid option. Please choose 1-7.");
        return Ok(LoopControl::Continue);
    };
    tracing::debug!(?option, "menu option selected");

    match option {
        MenuOption::AddTransaction => add_transaction(context, reader),
        MenuOption::ViewTransactions => {
            view_transactions(context);
            Ok(LoopControl::Continue)
        }
        MenuOption::RemoveTransaction => remove_transaction(context, reader),
        MenuOption::ViewBalance => {
            output::line(report::balance_line(context.manager.balance()));
            Ok(LoopControl::Continue)
        }
        MenuOption::SpendingByCategory => {
            spending_by_category(context);
            Ok(LoopControl::Continue)
        }
        MenuOption::SummaryByMonth => {
            summary_by_month(context);
            Ok(LoopControl::Continue)
        }
        MenuOption::Exit => {
            output::line("Auf Wiedersehen");
            Ok(LoopControl::Exit)
        }
    }
}

fn add_transaction(
    context: &mut ShellContext,
    reader: &mut dyn LineReader,
) -> Result<LoopControl, CliError> {
    let raw_amount = field!(reader, "Enter amount: ");
    let Ok(amount) = parse_amount(&raw_amount) else {
        output::error("Please enter a valid number for the amount.");
        return Ok(LoopControl::Continue);
    };

    let description = field!(reader, "Enter description: ");
    let category = field!(reader, "Enter category: ");

    let raw_date = field!(reader, "Enter date (YYYY-MM-DD): ");
    let Ok(date) = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT) else {
        output::error("Invalid date format. Please use YYYY-MM-DD.");
        return Ok(LoopControl::Continue);
    };

    let raw_kind = field!(reader, "Is this an income or expense: ");
    let kind = match raw_kind.parse::<EntryKind>() {
        Ok(kind) => kind,
        Err(_) => {
            output::error("Invalid transaction type. Enter 'income' or 'expense'.");
            if let Some(suggestion) = suggest_kind(&raw_kind) {
                output::info(format!("Did you mean `{suggestion}`?"));
            }
            return Ok(LoopControl::Continue);
        }
    };

    match context
        .manager
        .add(amount, description, category, date, kind)
    {
        Ok(_) => output::success("Transaction added successfully"),
        Err(err) => output::error(format!("Could not save transaction: {err}")),
    }
    Ok(LoopControl::Continue)
}

fn view_transactions(context: &ShellContext) {
    if context.manager.is_empty() {
        output::info(report::EMPTY_LISTING);
        return;
    }
    output::section("All transactions");
    for line in report::listing_lines(context.manager.list()) {
        output::line(line);
    }
}

fn remove_transaction(
    context: &mut ShellContext,
    reader: &mut dyn LineReader,
) -> Result<LoopControl, CliError> {
    let description = field!(
        reader,
        "Enter the description of the transaction to be removed: "
    );
    match context.manager.remove(&description) {
        Ok(Some(entry)) => output::success(report::removed_line(&entry)),
        Ok(None) => output::warning("Transaction with that description not found"),
        Err(err) => output::error(format!("Could not remove transaction: {err}")),
    }
    Ok(LoopControl::Continue)
}

fn spending_by_category(context: &ShellContext) {
    let totals = context.manager.summarize_by_category();
    output::section("Spending Summary by Category");
    if totals.is_empty() {
        output::info(report::EMPTY_LISTING);
    }
    for line in report::category_lines(&totals) {
        output::line(line);
    }
}

fn summary_by_month(context: &ShellContext) {
    let months = context.manager.summarize_by_month();
    output::section("Summary by Month");
    if months.is_empty() {
        output::info(report::EMPTY_LISTING);
    }
    for line in report::month_lines(&months) {
        output::line(line);
    }
}

/// Closest accepted kind for a mistyped one, if it is near enough.
fn suggest_kind(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    EntryKind::ALL
        .iter()
        .map(|kind| (levenshtein(kind.as_str(), &needle), kind.as_str()))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}
