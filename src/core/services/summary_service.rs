//! Aggregation helpers for balances, category totals, and monthly summaries.

use std::collections::{BTreeMap, HashMap};

use crate::ledger::{EntryKind, Ledger, NormalizedLabel};

/// Net of entry magnitudes for one normalized category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: NormalizedLabel,
    pub total: f64,
}

impl CategoryTotal {
    /// Category label in title case, e.g. `eating out` -> `Eating Out`.
    pub fn display_name(&self) -> String {
        title_case(self.category.as_str())
    }
}

/// Kind-aware totals for one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

impl MonthSummary {
    fn new(month: String) -> Self {
        Self {
            month,
            income: 0.0,
            expense: 0.0,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn balance(ledger: &Ledger) -> f64 {
        ledger.balance()
    }

    /// Groups by trimmed, lower-cased category and sums amounts regardless of kind.
    /// Groups appear in the order their category was first seen.
    pub fn by_category(ledger: &Ledger) -> Vec<CategoryTotal> {
        let mut positions: HashMap<NormalizedLabel, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for entry in ledger {
            let category = entry.normalized_category();
            match positions.get(&category) {
                Some(&index) => totals[index].total += entry.amount(),
                None => {
                    positions.insert(category.clone(), totals.len());
                    totals.push(CategoryTotal {
                        category,
                        total: entry.amount(),
                    });
                }
            }
        }
        totals
    }

    /// Income and expense totals per month, ascending by `YYYY-MM`.
    pub fn by_month(ledger: &Ledger) -> Vec<MonthSummary> {
        let mut months: BTreeMap<String, MonthSummary> = BTreeMap::new();
        for entry in ledger {
            let key = entry.month_key();
            let summary = months
                .entry(key.clone())
                .or_insert_with(|| MonthSummary::new(key));
            match entry.kind() {
                EntryKind::Income => summary.income += entry.amount(),
                EntryKind::Expense => summary.expense += entry.amount(),
            }
        }
        months.into_values().collect()
    }
}

fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut at_word_start = true;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
