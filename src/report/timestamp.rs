//! Marks when the tool last ran

use super::SheetTarget;
use crate::error::Result;
use crate::model::{CellRange, CellRef, Column};
use crate::sheets::{SheetsApi, ValueInputOption};
use chrono::{DateTime, Local, TimeZone};
use serde_json::json;
use std::fmt::Display;

/// Written as user-entered text so the sheet stores a date-time value
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct TimestampReport<'a> {
    target: SheetTarget,
    client: &'a dyn SheetsApi,
    cell: CellRef,
}

impl<'a> TimestampReport<'a> {
    pub fn new(target: SheetTarget, client: &'a dyn SheetsApi) -> Self {
        Self {
            target,
            client,
            cell: CellRef {
                column: Column::B,
                row: 1,
            },
        }
    }

    pub fn with_cell(mut self, cell: CellRef) -> Self {
        self.cell = cell;
        self
    }

    pub fn update(&self) -> Result<()> {
        self.update_at(Local::now())
    }

    pub fn update_at<Tz>(&self, now: DateTime<Tz>) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        let range = CellRange::single(self.cell).to_a1(&self.target.tab_id);
        log::info!("last run: {} -> {}", stamp, range);

        self.client.write_range(
            &self.target.spreadsheet_id,
            &range,
            vec![vec![json!(stamp)]],
            ValueInputOption::UserEntered,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::fake::{Call, FakeSheets};
    use chrono::NaiveDate;

    #[test]
    fn test_writes_formatted_time() {
        let sheets = FakeSheets::default();
        let now = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap()
            .and_utc();

        TimestampReport::new(SheetTarget::new("doc", "Status"), &sheets)
            .update_at(now)
            .unwrap();

        assert_eq!(
            sheets.calls(),
            vec![Call::Write {
                range: "Status!B1".to_string(),
                values: vec![vec![json!("2024-03-07 09:05:03")]],
                input: ValueInputOption::UserEntered,
            }]
        );
    }

    #[test]
    fn test_custom_cell() {
        let sheets = FakeSheets::default();
        TimestampReport::new(SheetTarget::new("doc", "Status"), &sheets)
            .with_cell("D2".parse().unwrap())
            .update()
            .unwrap();

        assert_eq!(sheets.writes()[0].0, "Status!D2");
    }
}
