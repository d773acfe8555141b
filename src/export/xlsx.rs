// src/export/xlsx.rs

use crate::core::stats::{AttendanceBand, Thresholds};
use crate::errors::{AppError, AppResult};
use crate::export::model::{REPORT_HEADERS, ReportRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const PCT_COL: u16 = 5;

/// Export XLSX with a styled header, banded rows and a colour-coded
/// attendance percentage column.
pub(crate) fn export_xlsx(rows: &[ReportRow], path: &Path, thresholds: Thresholds) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = REPORT_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (index, report) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        let band = if index % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };

        let text = cell_format(band);
        let number = cell_format(band).set_align(FormatAlign::Right);

        worksheet
            .write_with_format(row, 0, report.roll_number.as_str(), &text)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, report.student_name.as_str(), &text)
            .map_err(to_export_error)?;

        for (col, value) in [
            (2u16, report.total_days),
            (3, report.present),
            (4, report.absent),
        ] {
            worksheet
                .write_with_format(row, col, value as f64, &number)
                .map_err(to_export_error)?;
        }

        let pct_format = number
            .clone()
            .set_num_format("0%")
            .set_bold()
            .set_font_color(band_color(AttendanceBand::classify(
                report.percentage,
                thresholds,
            )));
        worksheet
            .write_with_format(row, PCT_COL, report.percentage as f64 / 100.0, &pct_format)
            .map_err(to_export_error)?;

        for (col, cell) in report.cells().iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    set_widths(worksheet, &col_widths)?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_color(band: AttendanceBand) -> Color {
    match band {
        AttendanceBand::Good => Color::RGB(0x2E7D32),
        AttendanceBand::Warning => Color::RGB(0xB26A00),
        AttendanceBand::Low => Color::RGB(0xC62828),
    }
}

fn set_widths(worksheet: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
