use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{AttendanceBand, Thresholds};
use crate::db::open_store;
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::export::{ExportLogic, REPORT_HEADERS};
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_percentage;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { range } = cmd {
        let bounds = parse_optional_range(range.as_deref())?;
        let store = open_store(cfg)?;
        let rows = ExportLogic::build_rows(&store, bounds)?;

        match bounds {
            Some((from, to)) => header(format!("Student attendance summary ({} → {})", from, to)),
            None => header("Student attendance summary"),
        }

        if rows.is_empty() {
            info("No attendance records found. Start marking attendance to see reports.");
            return Ok(());
        }

        let thresholds = Thresholds::from(cfg);
        let mut table = Table::new(vec![
            Column::left(REPORT_HEADERS[0]),
            Column::left(REPORT_HEADERS[1]),
            Column::right(REPORT_HEADERS[2]),
            Column::right(REPORT_HEADERS[3]),
            Column::right(REPORT_HEADERS[4]),
            Column::right(REPORT_HEADERS[5]),
        ]);

        for r in &rows {
            let band = AttendanceBand::classify(r.percentage, thresholds);
            table.add_row(vec![
                r.roll_number.clone(),
                r.student_name.clone(),
                r.total_days.to_string(),
                r.present.to_string(),
                r.absent.to_string(),
                colorize_percentage(r.percentage, band),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
