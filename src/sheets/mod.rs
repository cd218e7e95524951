//! Access to remote spreadsheet values

pub mod client;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use client::SheetsClient;

/// A row of cell values as exchanged with the Sheets API
pub type Row = Vec<Value>;

/// How the spreadsheet should interpret written values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueInputOption {
    /// Store values exactly as sent
    #[serde(rename = "RAW")]
    Raw,
    /// Parse values as if typed into the UI (numbers, dates, formulas)
    #[serde(rename = "USER_ENTERED")]
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// Values for one A1 range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Row>,
}

impl ValueRange {
    pub fn new(range: impl Into<String>, values: Vec<Row>) -> Self {
        Self {
            range: range.into(),
            major_dimension: Some("ROWS".to_string()),
            values,
        }
    }
}

/// The spreadsheet operations the reports rely on
///
/// Every call blocks until the remote side has answered.
pub trait SheetsApi {
    /// Fetch the values of `range`; trailing empty rows are omitted by the server
    fn read_range(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>>;

    fn write_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Row>,
        input: ValueInputOption,
    ) -> Result<()>;

    /// Write several ranges in a single request
    fn batch_write_ranges(
        &self,
        spreadsheet_id: &str,
        data: Vec<ValueRange>,
        input: ValueInputOption,
    ) -> Result<()>;
}
