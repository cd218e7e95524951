//! Hours for tags already listed in a column of the sheet

use super::{log_row, SheetTarget};
use crate::error::{GsheetError, Result};
use crate::model::{CellRange, CellRef, Column, HoursIndex};
use crate::sheets::{SheetsApi, ValueInputOption};
use serde_json::json;

/// Where the lane tags live; hours are written one column to the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLayout {
    pub tag_column: Column,
    pub anchor_row: u32,
    pub lanes: u32,
}

impl Default for LaneLayout {
    fn default() -> Self {
        Self {
            tag_column: Column::A,
            anchor_row: 4,
            lanes: 10,
        }
    }
}

impl LaneLayout {
    fn anchor(&self) -> Result<CellRef> {
        CellRef::new(self.tag_column, self.anchor_row)
    }

    pub fn tag_range(&self) -> Result<CellRange> {
        CellRange::from_anchor(self.anchor()?, 1, self.lanes)
    }

    /// The hours cell next to the tag in lane `index` (0-based)
    pub fn hours_cell(&self, index: usize) -> Result<CellRef> {
        self.anchor()?.down(index as u32)?.right(1)
    }
}

/// Writes hours next to each tag found in the lane column
pub struct LaneReport<'a> {
    target: SheetTarget,
    client: &'a dyn SheetsApi,
    hours_by_tag: HoursIndex,
    layout: LaneLayout,
}

impl<'a> LaneReport<'a> {
    pub fn new(target: SheetTarget, client: &'a dyn SheetsApi, hours_by_tag: HoursIndex) -> Self {
        Self {
            target,
            client,
            hours_by_tag,
            layout: LaneLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: LaneLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Read the lane tags and write each tag's hours beside it
    ///
    /// Rows are written one at a time from top to bottom. A failure stops the
    /// run; rows written before it stay written. Returns the number of lanes
    /// written, which is less than the layout size when the sheet has
    /// trailing empty rows.
    pub fn update(&self) -> Result<usize> {
        let read_range = self.layout.tag_range()?.to_a1(&self.target.tab_id);
        let rows = self
            .client
            .read_range(&self.target.spreadsheet_id, &read_range)?;

        if rows.is_empty() {
            return Err(GsheetError::Read(format!("no data found in {}", read_range)));
        }

        for (idx, row) in rows.iter().enumerate() {
            let tag = match row.first() {
                Some(serde_json::Value::String(tag)) => tag,
                Some(other) => {
                    return Err(GsheetError::Schema(format!(
                        "tag in lane {} must be text, found {}",
                        idx, other
                    )))
                }
                None => {
                    return Err(GsheetError::Schema(format!("lane {} has an empty tag cell", idx)))
                }
            };

            let hours = self.hours_by_tag.hours_or_zero(tag);
            let write_range =
                CellRange::single(self.layout.hours_cell(idx)?).to_a1(&self.target.tab_id);
            self.client.write_range(
                &self.target.spreadsheet_id,
                &write_range,
                vec![vec![json!(hours)]],
                ValueInputOption::Raw,
            )?;

            log_row(idx, tag, hours);
        }

        Ok(rows.len())
    }
}
