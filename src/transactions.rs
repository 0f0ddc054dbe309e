//! Transaction ledger
//!
//! Typed transactions with the ledger screen's combined filters: kind,
//! portfolio, free-text search and a trailing date window. "Today" is
//! always passed in by the caller so filtering stays pure.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::format_currency;
use crate::record::Record;
use crate::table::{Column, TableView};

// =============================================================================
// Data Models
// =============================================================================

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Buy,
    Sell,
    Dividend,
    Fee,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "Buy",
            TransactionKind::Sell => "Sell",
            TransactionKind::Dividend => "Dividend",
            TransactionKind::Fee => "Fee",
        }
    }
}

/// Settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// One ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub symbol: String,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub amount: f64,
    pub portfolio: String,
    pub status: TransactionStatus,
    pub fees: f64,
}

// =============================================================================
// Filters
// =============================================================================

/// Trailing window over transaction dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    /// The last `n` days including today.
    Days(u32),
}

impl DateWindow {
    /// Earliest date still inside the window, if bounded.
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateWindow::All => None,
            DateWindow::Days(n) => today.checked_sub_days(Days::new(u64::from(*n))),
        }
    }
}

/// The ledger screen's combined filter state.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilters {
    pub kind: Option<TransactionKind>,
    pub portfolio: Option<String>,
    pub search: String,
    pub window: DateWindow,
}

impl TransactionFilters {
    pub fn matches(&self, tx: &Transaction, today: NaiveDate) -> bool {
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if let Some(portfolio) = &self.portfolio {
            if &tx.portfolio != portfolio {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !tx.symbol.to_lowercase().contains(&needle)
                && !tx.name.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(cutoff) = self.window.cutoff(today) {
            if tx.date < cutoff {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, txs: &'a [Transaction], today: NaiveDate) -> Vec<&'a Transaction> {
        txs.iter().filter(|tx| self.matches(tx, today)).collect()
    }
}

// =============================================================================
// Mock Data
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            date: date(2025, 1, 20),
            kind: TransactionKind::Buy,
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            quantity: 100.0,
            price: 185.42,
            amount: 18542.0,
            portfolio: "Growth Portfolio A".to_string(),
            status: TransactionStatus::Completed,
            fees: 9.99,
        },
        Transaction {
            id: 2,
            date: date(2025, 1, 19),
            kind: TransactionKind::Sell,
            symbol: "MSFT".to_string(),
            name: "Microsoft Corp.".to_string(),
            quantity: 50.0,
            price: 412.58,
            amount: 20629.0,
            portfolio: "Growth Portfolio A".to_string(),
            status: TransactionStatus::Completed,
            fees: 9.99,
        },
        Transaction {
            id: 3,
            date: date(2025, 1, 18),
            kind: TransactionKind::Dividend,
            symbol: "JPM".to_string(),
            name: "JPMorgan Chase & Co.".to_string(),
            quantity: 0.0,
            price: 0.0,
            amount: 450.75,
            portfolio: "Balanced Strategy C".to_string(),
            status: TransactionStatus::Completed,
            fees: 0.0,
        },
        Transaction {
            id: 4,
            date: date(2025, 1, 17),
            kind: TransactionKind::Buy,
            symbol: "GOOGL".to_string(),
            name: "Alphabet Inc.".to_string(),
            quantity: 25.0,
            price: 142.87,
            amount: 3571.75,
            portfolio: "Tech Innovation D".to_string(),
            status: TransactionStatus::Pending,
            fees: 9.99,
        },
        Transaction {
            id: 5,
            date: date(2024, 12, 2),
            kind: TransactionKind::Fee,
            symbol: "—".to_string(),
            name: "Quarterly management fee".to_string(),
            quantity: 0.0,
            price: 0.0,
            amount: 1250.0,
            portfolio: "Balanced Strategy C".to_string(),
            status: TransactionStatus::Completed,
            fees: 0.0,
        },
    ]
}

// =============================================================================
// Table View
// =============================================================================

pub fn transaction_columns() -> Vec<Column> {
    vec![
        Column::new("date", "Date"),
        Column::unsortable("kind", "Type"),
        Column::new("symbol", "Symbol"),
        Column::unsortable("name", "Name"),
        Column::new("quantity", "Quantity"),
        Column::new("price", "Price"),
        Column::new("amount", "Amount"),
        Column::unsortable("status", "Status"),
    ]
}

/// Build the ledger table. ISO dates sort lexicographically in
/// chronological order, so the date column needs no special handling.
pub fn transaction_table(txs: &[Transaction]) -> TableView {
    let records = txs
        .iter()
        .map(|tx| {
            Record::new(tx.id)
                .with_text("date", tx.date.format("%Y-%m-%d").to_string())
                .with_text("kind", tx.kind.label())
                .with_text("symbol", &tx.symbol)
                .with_text("name", &tx.name)
                .with_number("quantity", tx.quantity)
                .with_currency("price", format_currency(tx.price))
                .with_currency("amount", format_currency(tx.amount))
                .with_text("status", tx.status.label())
        })
        .collect();
    TableView::new(transaction_columns(), vec!["symbol", "name"]).with_records(records)
}

// =============================================================================
// Tests
// =============================================================================
