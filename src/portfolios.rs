//! Portfolio collections
//!
//! Typed portfolio summaries with the list-screen query logic: free-text
//! search over name and manager plus the strategy filter tabs.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_signed_percent};
use crate::record::Record;
use crate::table::{Column, TableView};

// =============================================================================
// Data Models
// =============================================================================

/// Investment strategy bucket, as shown on the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    Growth,
    Conservative,
    Balanced,
    Income,
}

impl StrategyType {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyType::Growth => "Growth",
            StrategyType::Conservative => "Conservative",
            StrategyType::Balanced => "Balanced",
            StrategyType::Income => "Income",
        }
    }
}

/// Lifecycle status of a managed portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStatus {
    Active,
    Rebalancing,
    UnderReview,
}

impl PortfolioStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioStatus::Active => "Active",
            PortfolioStatus::Rebalancing => "Rebalancing",
            PortfolioStatus::UnderReview => "Under Review",
        }
    }
}

/// One managed portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: u64,
    pub name: String,
    pub manager: String,
    pub strategy: StrategyType,
    pub status: PortfolioStatus,
    pub total_value: f64,
    pub ytd_return: f64,
}

// =============================================================================
// Query
// =============================================================================

/// List-screen query: search over name/manager, optional strategy tab.
#[derive(Debug, Clone, Default)]
pub struct PortfolioQuery {
    pub search: String,
    pub strategy: Option<StrategyType>,
}

impl PortfolioQuery {
    pub fn matches(&self, portfolio: &Portfolio) -> bool {
        let matches_search = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            portfolio.name.to_lowercase().contains(&needle)
                || portfolio.manager.to_lowercase().contains(&needle)
        };
        let matches_strategy = self
            .strategy
            .map(|s| portfolio.strategy == s)
            .unwrap_or(true);
        matches_search && matches_strategy
    }

    pub fn apply<'a>(&self, portfolios: &'a [Portfolio]) -> Vec<&'a Portfolio> {
        portfolios.iter().filter(|p| self.matches(p)).collect()
    }
}

// =============================================================================
// Mock Data
// =============================================================================

pub fn mock_portfolios() -> Vec<Portfolio> {
    vec![
        Portfolio {
            id: 1,
            name: "Growth Portfolio A".to_string(),
            manager: "Sarah Chen".to_string(),
            strategy: StrategyType::Growth,
            status: PortfolioStatus::Active,
            total_value: 2_450_000.0,
            ytd_return: 8.4,
        },
        Portfolio {
            id: 2,
            name: "Conservative Income B".to_string(),
            manager: "Rajesh Mehta".to_string(),
            strategy: StrategyType::Conservative,
            status: PortfolioStatus::Active,
            total_value: 1_870_000.0,
            ytd_return: 3.1,
        },
        Portfolio {
            id: 3,
            name: "Balanced Strategy C".to_string(),
            manager: "Priya Sharma".to_string(),
            strategy: StrategyType::Balanced,
            status: PortfolioStatus::Rebalancing,
            total_value: 3_120_000.0,
            ytd_return: 5.7,
        },
        Portfolio {
            id: 4,
            name: "Tech Innovation D".to_string(),
            manager: "Sarah Chen".to_string(),
            strategy: StrategyType::Growth,
            status: PortfolioStatus::UnderReview,
            total_value: 980_000.0,
            ytd_return: -2.3,
        },
        Portfolio {
            id: 5,
            name: "Dividend Income E".to_string(),
            manager: "Arjun Patel".to_string(),
            strategy: StrategyType::Income,
            status: PortfolioStatus::Active,
            total_value: 1_340_000.0,
            ytd_return: 4.2,
        },
    ]
}

// =============================================================================
// Table View
// =============================================================================

pub fn portfolio_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Portfolio"),
        Column::new("manager", "Manager"),
        Column::unsortable("strategy", "Strategy"),
        Column::unsortable("status", "Status"),
        Column::new("total_value", "Total Value"),
        Column::new("ytd_return", "YTD Return"),
    ]
}

pub fn portfolio_table(portfolios: &[Portfolio]) -> TableView {
    let records = portfolios
        .iter()
        .map(|p| {
            Record::new(p.id)
                .with_text("name", &p.name)
                .with_text("manager", &p.manager)
                .with_text("strategy", p.strategy.label())
                .with_text("status", p.status.label())
                .with_currency("total_value", format_currency(p.total_value))
                .with_percent("ytd_return", format_signed_percent(p.ytd_return))
        })
        .collect();
    TableView::new(portfolio_columns(), vec!["name", "manager"]).with_records(records)
}
