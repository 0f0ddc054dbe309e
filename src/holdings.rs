//! Portfolio holdings
//!
//! Typed holding positions with derived valuation fields, the mock
//! fixture set, and the conversion into the tabular view used by the
//! dashboard and portfolio screens.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_signed_currency, format_signed_percent};
use crate::record::Record;
use crate::table::{Column, TableView};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Individual holding in a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub shares: f64,
    pub avg_cost: f64,
    pub current_price: f64,
    pub day_change: f64,
    pub day_change_pct: f64,
    pub market_value: f64,
    pub gain_loss: f64,
    pub gain_loss_pct: f64,
    pub weight: f64,
}

impl Holding {
    /// Create a holding from basic data, calculating derived fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        shares: f64,
        avg_cost: f64,
        current_price: f64,
        day_change: f64,
        total_portfolio_value: f64,
    ) -> Self {
        let market_value = shares * current_price;
        let cost_basis = shares * avg_cost;
        let gain_loss = market_value - cost_basis;
        let gain_loss_pct = if cost_basis > 0.0 {
            (gain_loss / cost_basis) * 100.0
        } else {
            0.0
        };
        let previous_close = current_price - day_change;
        let day_change_pct = if previous_close > 0.0 {
            (day_change / previous_close) * 100.0
        } else {
            0.0
        };
        let weight = if total_portfolio_value > 0.0 {
            (market_value / total_portfolio_value) * 100.0
        } else {
            0.0
        };

        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            shares,
            avg_cost,
            current_price,
            day_change,
            day_change_pct,
            market_value,
            gain_loss,
            gain_loss_pct,
            weight,
        }
    }
}

// ============================================================================
// MOCK DATA
// ============================================================================

/// Mock holdings used until a data collaborator is wired in.
pub fn mock_holdings() -> Vec<Holding> {
    let positions = [
        ("AAPL", "Apple Inc.", "Technology", 100.0, 150.0, 178.50, 2.10),
        ("MSFT", "Microsoft Corp.", "Technology", 50.0, 280.0, 378.90, -1.45),
        ("GOOGL", "Alphabet Inc.", "Technology", 25.0, 120.0, 175.30, 0.85),
        ("NVDA", "NVIDIA Corp.", "Technology", 30.0, 450.0, 875.20, 12.40),
        ("AMZN", "Amazon.com Inc.", "Consumer", 40.0, 130.0, 186.40, -0.60),
        ("META", "Meta Platforms Inc.", "Technology", 35.0, 290.0, 505.75, 3.25),
        ("TSLA", "Tesla Inc.", "Automotive", 20.0, 200.0, 248.60, -4.10),
    ];

    let total_value: f64 = positions
        .iter()
        .map(|(_, _, _, shares, _, price, _)| shares * price)
        .sum();

    positions
        .iter()
        .enumerate()
        .map(|(i, (symbol, name, sector, shares, avg_cost, price, change))| {
            Holding::new(
                (i + 1) as u64,
                *symbol,
                *name,
                *sector,
                *shares,
                *avg_cost,
                *price,
                *change,
                total_value,
            )
        })
        .collect()
}

// ============================================================================
// TABLE VIEW
// ============================================================================

/// Column layout for holdings tables. Name and sector carry no sort
/// affordance, matching the dashboard layout.
pub fn holdings_columns() -> Vec<Column> {
    vec![
        Column::new("symbol", "Symbol"),
        Column::unsortable("name", "Name"),
        Column::unsortable("sector", "Sector"),
        Column::new("shares", "Shares"),
        Column::new("avg_cost", "Avg Cost"),
        Column::new("current_price", "Current Price"),
        Column::new("market_value", "Market Value"),
        Column::new("gain_loss", "Unrealized P&L"),
        Column::new("day_change", "Day Change"),
    ]
}

/// Build the holdings table view. Currency and percent cells carry their
/// display form, so ordering goes through normalization the same way the
/// rendered strings would.
pub fn holdings_table(holdings: &[Holding]) -> TableView {
    let records = holdings.iter().map(holding_record).collect();
    TableView::new(holdings_columns(), vec!["symbol", "name"]).with_records(records)
}

fn holding_record(holding: &Holding) -> Record {
    Record::new(holding.id)
        .with_text("symbol", &holding.symbol)
        .with_text("name", &holding.name)
        .with_text("sector", &holding.sector)
        .with_number("shares", holding.shares)
        .with_currency("avg_cost", format_currency(holding.avg_cost))
        .with_currency("current_price", format_currency(holding.current_price))
        .with_currency("market_value", format_currency(holding.market_value))
        .with_currency("gain_loss", format_signed_currency(holding.gain_loss))
        .with_percent("day_change", format_signed_percent(holding.day_change_pct))
}

// ============================================================================
// TESTS
// ============================================================================
