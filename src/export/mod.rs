mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::Booking;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the booking ledger to `path` in the requested format.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_bookings(
    format: &ExportFormat,
    path: &str,
    bookings: &[Booking],
    force: bool,
) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "{path} already exists (use --force to overwrite)"
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, bookings),
        ExportFormat::Json => json::write_json(path, bookings),
    }
}
