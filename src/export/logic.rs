// src/export/logic.rs

use crate::core::stats::{self, Thresholds};
use crate::db::{KvBackend, RecordStore};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRow;
use crate::export::range::parse_optional_range;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date;
use std::path::PathBuf;
use tracing::debug;

/// High-level export of the per-student attendance report.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the report and write it in `format`.
    ///
    /// - `file`: output path; defaults to `attendance-report-<today>.<ext>`
    ///   in the working directory
    /// - `range`: `None`, `"all"` or a range expression (see `export::range`);
    ///   only records inside the range are counted
    ///
    /// Returns the path that was written.
    pub fn export<B: KvBackend>(
        store: &RecordStore<B>,
        format: ExportFormat,
        file: Option<&str>,
        range: Option<&str>,
        force: bool,
        thresholds: Thresholds,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(format.default_file_name(date::today())),
        };

        let bounds = parse_optional_range(range)?;
        ensure_writable(&path, force)?;

        let rows = Self::build_rows(store, bounds)?;
        debug!(rows = rows.len(), format = format.as_str(), "exporting report");

        if rows.is_empty() {
            warning("No students registered: the report only contains the header.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path, thresholds)?,
        }

        Ok(path)
    }

    pub fn build_rows<B: KvBackend>(
        store: &RecordStore<B>,
        bounds: Option<(chrono::NaiveDate, chrono::NaiveDate)>,
    ) -> AppResult<Vec<ReportRow>> {
        let students = store.list_students()?;
        let mut records = store.list_attendance_records()?;

        if let Some((from, to)) = bounds {
            records = stats::filter_range(&records, from, to);
        }

        Ok(stats::student_reports(&students, &records)
            .iter()
            .map(ReportRow::from)
            .collect())
    }
}
