//! Calendar events
//!
//! Typed calendar entries with the lookups the calendar and dashboard
//! screens need: events on a day, the upcoming projection, and relative
//! day labels. "Today" is injected by the caller.

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Data Models
// =============================================================================

/// Category of calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    EarningsCall,
    ClientMeeting,
    Rebalance,
    Dividend,
    Review,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::EarningsCall => "Earnings Call",
            EventKind::ClientMeeting => "Client Meeting",
            EventKind::Rebalance => "Rebalance",
            EventKind::Dividend => "Dividend",
            EventKind::Review => "Review",
        }
    }
}

/// One calendar entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub kind: EventKind,
    pub location: Option<String>,
}

// =============================================================================
// Lookups
// =============================================================================

/// Events scheduled on one day, in fixture order.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.date == day).collect()
}

/// The next `limit` events from today onward, ordered by date then time.
/// Untimed events sort before timed ones on the same day.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate, limit: usize) -> Vec<&CalendarEvent> {
    let mut future: Vec<&CalendarEvent> = events.iter().filter(|e| e.date >= today).collect();
    future.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
    future.truncate(limit);
    future
}

/// "Today", "Tomorrow", or a short date like "Mon, Jan 20".
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.checked_add_days(Days::new(1)) {
        "Tomorrow".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

// =============================================================================
// Mock Data
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

pub fn mock_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: 1,
            title: "AAPL Q1 Earnings Call".to_string(),
            date: date(2025, 1, 21),
            time: time(16, 30),
            kind: EventKind::EarningsCall,
            location: None,
        },
        CalendarEvent {
            id: 2,
            title: "Quarterly Review - Growth Portfolio A".to_string(),
            date: date(2025, 1, 22),
            time: time(10, 0),
            kind: EventKind::Review,
            location: Some("Conference Room 2".to_string()),
        },
        CalendarEvent {
            id: 3,
            title: "Client Meeting - Mehta Family Trust".to_string(),
            date: date(2025, 1, 22),
            time: time(14, 0),
            kind: EventKind::ClientMeeting,
            location: Some("Mumbai Office".to_string()),
        },
        CalendarEvent {
            id: 4,
            title: "Balanced Strategy C Rebalance".to_string(),
            date: date(2025, 1, 27),
            time: None,
            kind: EventKind::Rebalance,
            location: None,
        },
        CalendarEvent {
            id: 5,
            title: "JPM Dividend Payment".to_string(),
            date: date(2025, 1, 15),
            time: None,
            kind: EventKind::Dividend,
            location: None,
        },
    ]
}
