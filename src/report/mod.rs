//! Reports that write tracked hours into a spreadsheet tab

pub mod hours;
pub mod lane;
pub mod timestamp;

pub use hours::{HoursLayout, HoursReport, LeaderboardRow, WriteBlock};
pub use lane::{LaneLayout, LaneReport};
pub use timestamp::TimestampReport;

use std::fmt::Display;

/// The spreadsheet document and tab every report writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTarget {
    pub spreadsheet_id: String,
    pub tab_id: String,
}

impl SheetTarget {
    pub fn new(spreadsheet_id: impl Into<String>, tab_id: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            tab_id: tab_id.into(),
        }
    }
}

/// Per-row progress line shared by the reports
fn log_row(index: usize, tag: &str, hours: impl Display) {
    log::info!("{}: {} {}", index, tag, hours);
}
