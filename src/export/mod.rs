// src/export/mod.rs

pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{REPORT_HEADERS, ReportRow};

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// `attendance-report-<day>.<ext>`
    pub fn default_file_name(&self, day: NaiveDate) -> String {
        format!("attendance-report-{}.{}", day.format("%Y-%m-%d"), self.as_str())
    }
}
