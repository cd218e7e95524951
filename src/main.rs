use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use gsheet_updater::loader;
use gsheet_updater::report::{
    HoursLayout, HoursReport, LaneLayout, LaneReport, SheetTarget, TimestampReport,
};
use gsheet_updater::sheets::SheetsClient;
use gsheet_updater::{CellRef, Column};

#[derive(Parser)]
#[command(name = "gsheet-updater")]
#[command(about = "Update lanes and hour reports in a Google Sheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to write and how to authenticate
#[derive(Args)]
struct SheetArgs {
    /// Spreadsheet ID, the part after /spreadsheets/d/ in the sheet URL
    #[arg(long, env = "SPREADSHEET_ID")]
    spreadsheet_id: String,

    /// Name of the tab to write to
    #[arg(long, env = "TAB_ID")]
    tab_id: String,

    /// OAuth access token with the spreadsheets scope
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,
}

impl SheetArgs {
    fn target(&self) -> SheetTarget {
        SheetTarget::new(&self.spreadsheet_id, &self.tab_id)
    }

    fn client(&self) -> Result<SheetsClient> {
        SheetsClient::new(&self.access_token).context("Failed to create Sheets client")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the client version information
    Version {
        /// Print the version number only, with no additional output
        #[arg(long)]
        short: bool,
    },

    /// Write spent hours next to each lane tag in the sheet
    Lane {
        #[command(flatten)]
        sheet: SheetArgs,

        /// CSV file with hours per tag
        #[arg(long, env = "FILE")]
        file: PathBuf,

        /// Column holding the lane tags
        #[arg(long, default_value = "A")]
        tag_column: Column,

        /// First row of the lane tags
        #[arg(long, default_value_t = 4)]
        anchor_row: u32,

        /// Number of lanes to read
        #[arg(long, default_value_t = 10)]
        lanes: u32,
    },

    /// Write a ranked list of hours per tag
    Hours {
        #[command(flatten)]
        sheet: SheetArgs,

        /// CSV file with hours per tag
        #[arg(long, env = "FILE")]
        file: PathBuf,

        /// Max entries to consider
        #[arg(short, long, default_value_t = 50)]
        max_entries: u32,

        /// What column to write entries to
        #[arg(short = 'c', long, default_value = "G")]
        start_column: Column,

        /// First row of the written block
        #[arg(long, default_value_t = 19)]
        anchor_row: u32,
    },

    /// Write the current time into the sheet to show when the tool last ran
    LastRunTimestamp {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Cell receiving the timestamp
        #[arg(long, default_value = "B1")]
        cell: CellRef,
    },
}

fn main() -> Result<()> {
    logger(env_logger::Env::default()).init();

    let cli = Cli::parse();
    run(cli)
}

/// Per-row progress is logged at info, so show it unless RUST_LOG says otherwise
fn logger(env: env_logger::Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("info"))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version { short } => {
            version(short);
        }
        Commands::Lane { sheet, file, tag_column, anchor_row, lanes } => {
            let layout = LaneLayout { tag_column, anchor_row, lanes };
            lane(&sheet, &file, layout)?;
        }
        Commands::Hours { sheet, file, max_entries, start_column, anchor_row } => {
            let layout = HoursLayout { start_column, anchor_row, max_entries };
            hours(&sheet, &file, layout)?;
        }
        Commands::LastRunTimestamp { sheet, cell } => {
            last_run_timestamp(&sheet, cell)?;
        }
    }

    Ok(())
}

fn version(short: bool) {
    let version = env!("CARGO_PKG_VERSION");
    if short {
        println!("{}", version);
    } else {
        println!("Client version: {}", version);
    }
}

fn lane(sheet: &SheetArgs, file: &PathBuf, layout: LaneLayout) -> Result<()> {
    let hours_by_tag = loader::read_hours_index_file(file)
        .context("Failed to parse CSV file with hours per tag")?;
    log::info!("Loaded hours for {} tags from {}", hours_by_tag.len(), file.display());

    let client = sheet.client()?;
    let written = LaneReport::new(sheet.target(), &client, hours_by_tag)
        .with_layout(layout)
        .update()
        .context("Failed to update lanes")?;

    println!("Updated {} lanes in tab {}", written, sheet.tab_id);
    Ok(())
}

fn hours(sheet: &SheetArgs, file: &PathBuf, layout: HoursLayout) -> Result<()> {
    let entries = loader::read_hours_sequence_file(file)
        .context("Failed to parse CSV file with hours per tag")?;
    log::info!("Loaded {} entries from {}", entries.len(), file.display());

    let client = sheet.client()?;
    HoursReport::new(sheet.target(), &client, entries)
        .with_layout(layout)
        .update()
        .context("Failed to write hours report")?;

    println!("Wrote {} rows to tab {}", layout.max_entries, sheet.tab_id);
    Ok(())
}

fn last_run_timestamp(sheet: &SheetArgs, cell: CellRef) -> Result<()> {
    let client = sheet.client()?;
    TimestampReport::new(sheet.target(), &client)
        .with_cell(cell)
        .update()
        .context("Failed to write last run timestamp")?;
    Ok(())
}
