//! Blocking client for the Google Sheets v4 values API

use super::{Row, SheetsApi, ValueInputOption, ValueRange};
use crate::error::{GsheetError, Result};
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Sheets API client authenticating with an already-issued OAuth access token
pub struct SheetsClient {
    client: reqwest::blocking::Client,
    base_url: Url,
    access_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest<'a> {
    value_input_option: ValueInputOption,
    data: &'a [ValueRange],
}

impl SheetsClient {
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Create a client talking to a different endpoint (e.g. a proxy)
    pub fn with_base_url(access_token: impl Into<String>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| GsheetError::Endpoint(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GsheetError::Endpoint(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("gsheet-updater/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GsheetError::Endpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> Result<Url> {
        self.endpoint(&[spreadsheet_id, "values", range])
    }

    fn batch_update_url(&self, spreadsheet_id: &str) -> Result<Url> {
        self.endpoint(&[spreadsheet_id, "values:batchUpdate"])
    }
}

/// Turn a non-2xx response into an error carrying status and body
fn ensure_success(
    response: reqwest::blocking::Response,
    what: &str,
    make_err: fn(String) -> GsheetError,
) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(status_error(what, status, &body, make_err))
}

fn status_error(
    what: &str,
    status: reqwest::StatusCode,
    body: &str,
    make_err: fn(String) -> GsheetError,
) -> GsheetError {
    make_err(format!("{}: HTTP {} {}", what, status.as_u16(), body.trim()))
}

impl SheetsApi for SheetsClient {
    fn read_range(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Row>> {
        let url = self.values_url(spreadsheet_id, range)?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|e| GsheetError::Read(format!("reading {}: {}", range, e)))?;
        let response = ensure_success(response, &format!("reading {}", range), GsheetError::Read)?;

        let body: ValueRange = response
            .json()
            .map_err(|e| GsheetError::Read(format!("invalid response for {}: {}", range, e)))?;
        Ok(body.values)
    }

    fn write_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Row>,
        input: ValueInputOption,
    ) -> Result<()> {
        let mut url = self.values_url(spreadsheet_id, range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", input.as_str());
        log::debug!("PUT {} ({} rows)", url, values.len());

        let body = ValueRange::new(range, values);
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(|e| GsheetError::Write(format!("writing {}: {}", range, e)))?;
        ensure_success(response, &format!("writing {}", range), GsheetError::Write)?;
        Ok(())
    }

    fn batch_write_ranges(
        &self,
        spreadsheet_id: &str,
        data: Vec<ValueRange>,
        input: ValueInputOption,
    ) -> Result<()> {
        let url = self.batch_update_url(spreadsheet_id)?;
        log::debug!("POST {} ({} ranges)", url, data.len());

        let body = BatchUpdateRequest {
            value_input_option: input,
            data: &data,
        };
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(|e| GsheetError::Write(format!("batch update: {}", e)))?;
        ensure_success(response, "batch update", GsheetError::Write)?;
        Ok(())
    }
}
