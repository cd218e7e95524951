//! Ranked top-N leaderboard of hours per tag

use super::{log_row, SheetTarget};
use crate::error::Result;
use crate::model::{format_hours, CellRange, CellRef, Column, HoursSequence};
use crate::sheets::{SheetsApi, ValueInputOption, ValueRange};
use serde_json::json;

/// Where the leaderboard block goes and how many rows it has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursLayout {
    /// Column for tags; hours go in the next column
    pub start_column: Column,
    pub anchor_row: u32,
    pub max_entries: u32,
}

impl Default for HoursLayout {
    fn default() -> Self {
        Self {
            start_column: Column::G,
            anchor_row: 19,
            max_entries: 50,
        }
    }
}

/// One leaderboard line; both fields are empty for padding rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub tag: String,
    pub hours: String,
}

impl LeaderboardRow {
    fn blank() -> Self {
        Self {
            tag: String::new(),
            hours: String::new(),
        }
    }
}

/// The rectangular block the report writes
#[derive(Debug, Clone, PartialEq)]
pub struct WriteBlock {
    pub range: CellRange,
    pub rows: Vec<LeaderboardRow>,
}

pub struct HoursReport<'a> {
    target: SheetTarget,
    client: &'a dyn SheetsApi,
    entries: HoursSequence,
    layout: HoursLayout,
}

impl<'a> HoursReport<'a> {
    pub fn new(target: SheetTarget, client: &'a dyn SheetsApi, entries: HoursSequence) -> Self {
        Self {
            target,
            client,
            entries,
            layout: HoursLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: HoursLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Rank the entries and lay them out, without touching the sheet
    ///
    /// Returns `None` when the layout asks for zero rows.
    pub fn plan(&self) -> Result<Option<WriteBlock>> {
        if self.layout.max_entries == 0 {
            return Ok(None);
        }
        let anchor = CellRef::new(self.layout.start_column, self.layout.anchor_row)?;
        let range = CellRange::from_anchor(anchor, 2, self.layout.max_entries)?;

        let ranked = self.entries.ranked();
        let mut rows: Vec<LeaderboardRow> = ranked
            .entries()
            .iter()
            .take(self.layout.max_entries as usize)
            .map(|e| LeaderboardRow {
                tag: e.tag.clone(),
                hours: format_hours(e.hours),
            })
            .collect();
        rows.resize(self.layout.max_entries as usize, LeaderboardRow::blank());

        Ok(Some(WriteBlock { range, rows }))
    }

    /// Write the leaderboard in one batched request
    pub fn update(&self) -> Result<()> {
        let Some(block) = self.plan()? else {
            log::warn!("max entries is 0, nothing to write");
            return Ok(());
        };

        let mut values = Vec::with_capacity(block.rows.len());
        for (idx, row) in block.rows.iter().enumerate() {
            log_row(idx, &row.tag, &row.hours);
            values.push(vec![json!(row.tag), json!(row.hours)]);
        }

        let data = vec![ValueRange::new(block.range.to_a1(&self.target.tab_id), values)];
        self.client
            .batch_write_ranges(&self.target.spreadsheet_id, data, ValueInputOption::UserEntered)
    }
}
