//! Report library
//!
//! Generated report metadata with the library screen's named sort modes,
//! type filter and free-text search.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_file_size;
use crate::record::Record;
use crate::table::{Column, TableView};

// =============================================================================
// Data Models
// =============================================================================

/// Category of generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Performance,
    Risk,
    Compliance,
    Summary,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Performance => "Performance",
            ReportType::Risk => "Risk",
            ReportType::Compliance => "Compliance",
            ReportType::Summary => "Summary",
        }
    }
}

/// Generation status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    Processing,
    Failed,
    Scheduled,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::Processing => "Processing",
            ReportStatus::Failed => "Failed",
            ReportStatus::Scheduled => "Scheduled",
        }
    }
}

/// One generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub name: String,
    pub report_type: ReportType,
    pub portfolio: String,
    pub created_at: NaiveDate,
    pub size_bytes: u64,
    pub status: ReportStatus,
}

impl Report {
    /// Human-readable size for list rendering.
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

// =============================================================================
// Query
// =============================================================================

/// The library's named sort modes, as offered in its sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSort {
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
    SizeDesc,
}

impl ReportSort {
    pub fn label(&self) -> &'static str {
        match self {
            ReportSort::DateDesc => "Newest First",
            ReportSort::DateAsc => "Oldest First",
            ReportSort::NameAsc => "Name A-Z",
            ReportSort::NameDesc => "Name Z-A",
            ReportSort::SizeDesc => "Largest First",
        }
    }

    fn compare(&self, a: &Report, b: &Report) -> Ordering {
        match self {
            ReportSort::DateDesc => b.created_at.cmp(&a.created_at),
            ReportSort::DateAsc => a.created_at.cmp(&b.created_at),
            ReportSort::NameAsc => a.name.cmp(&b.name),
            ReportSort::NameDesc => b.name.cmp(&a.name),
            ReportSort::SizeDesc => b.size_bytes.cmp(&a.size_bytes),
        }
    }
}

/// Library screen query: search over name/portfolio, type filter, sort.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub search: String,
    pub report_type: Option<ReportType>,
    pub sort: ReportSort,
}

impl ReportQuery {
    pub fn matches(&self, report: &Report) -> bool {
        let matches_search = if self.search.is_empty() {
            true
        } else {
            let needle = self.search.to_lowercase();
            report.name.to_lowercase().contains(&needle)
                || report.portfolio.to_lowercase().contains(&needle)
        };
        let matches_type = self
            .report_type
            .map(|t| report.report_type == t)
            .unwrap_or(true);
        matches_search && matches_type
    }

    /// Filter then stable-sort under the selected mode.
    pub fn apply<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        let mut hits: Vec<&Report> = reports.iter().filter(|r| self.matches(r)).collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));
        hits
    }
}

// =============================================================================
// Mock Data
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            name: "Q4 Performance Review".to_string(),
            report_type: ReportType::Performance,
            portfolio: "Growth Portfolio A".to_string(),
            created_at: date(2025, 1, 15),
            size_bytes: 2_516_582,
            status: ReportStatus::Completed,
        },
        Report {
            id: 2,
            name: "Annual Risk Assessment".to_string(),
            report_type: ReportType::Risk,
            portfolio: "Balanced Strategy C".to_string(),
            created_at: date(2025, 1, 10),
            size_bytes: 1_153_433,
            status: ReportStatus::Completed,
        },
        Report {
            id: 3,
            name: "Compliance Audit Trail".to_string(),
            report_type: ReportType::Compliance,
            portfolio: "All Portfolios".to_string(),
            created_at: date(2025, 1, 18),
            size_bytes: 4_718_592,
            status: ReportStatus::Processing,
        },
        Report {
            id: 4,
            name: "Monthly Client Summary".to_string(),
            report_type: ReportType::Summary,
            portfolio: "Conservative Income B".to_string(),
            created_at: date(2025, 1, 2),
            size_bytes: 524_288,
            status: ReportStatus::Scheduled,
        },
    ]
}

// =============================================================================
// Table View
// =============================================================================

pub fn report_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Report"),
        Column::unsortable("report_type", "Type"),
        Column::new("portfolio", "Portfolio"),
        Column::new("created_at", "Created"),
        Column::new("size", "Size"),
        Column::unsortable("status", "Status"),
    ]
}

pub fn report_table(reports: &[Report]) -> TableView {
    let records = reports
        .iter()
        .map(|r| {
            Record::new(r.id)
                .with_text("name", &r.name)
                .with_text("report_type", r.report_type.label())
                .with_text("portfolio", &r.portfolio)
                .with_text("created_at", r.created_at.format("%Y-%m-%d").to_string())
                .with_number("size", r.size_bytes as f64)
                .with_text("status", r.status.label())
        })
        .collect();
    TableView::new(report_columns(), vec!["name", "portfolio"]).with_records(records)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_newest_first() {
        let reports = mock_reports();
        let hits = ReportQuery::default().apply(&reports);
        assert_eq!(hits[0].name, "Compliance Audit Trail");
        assert_eq!(hits.last().unwrap().name, "Monthly Client Summary");
    }

    #[test]
    fn test_name_sort_modes() {
        let reports = mock_reports();
        let query = ReportQuery {
            sort: ReportSort::NameAsc,
            ..Default::default()
        };
        let hits = query.apply(&reports);
        assert_eq!(hits[0].name, "Annual Risk Assessment");

        let query = ReportQuery {
            sort: ReportSort::NameDesc,
            ..Default::default()
        };
        assert_eq!(query.apply(&reports)[0].name, "Q4 Performance Review");
    }

    #[test]
    fn test_size_sort_and_display() {
        let reports = mock_reports();
        let query = ReportQuery {
            sort: ReportSort::SizeDesc,
            ..Default::default()
        };
        let hits = query.apply(&reports);
        assert_eq!(hits[0].name, "Compliance Audit Trail");
        assert_eq!(hits[0].display_size(), "4.5 MB");
    }

    #[test]
    fn test_report_table_sorts_by_size_cell() {
        let reports = mock_reports();
        let mut view = report_table(&reports);
        view.toggle_sort("size");
        let visible = view.visible_records();
        assert_eq!(visible[0].raw("name"), Some("Compliance Audit Trail"));
        assert_eq!(
            visible.last().unwrap().raw("name"),
            Some("Monthly Client Summary")
        );
    }

    #[test]
    fn test_type_filter_and_search() {
        let reports = mock_reports();
        let query = ReportQuery {
            report_type: Some(ReportType::Risk),
            ..Default::default()
        };
        assert_eq!(query.apply(&reports).len(), 1);

        let query = ReportQuery {
            search: "growth".to_string(),
            ..Default::default()
        };
        let hits = query.apply(&reports);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].report_type, ReportType::Performance);
    }
}
