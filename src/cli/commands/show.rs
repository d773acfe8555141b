use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::stats::{self, AttendanceBand, Thresholds};
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_percentage, colorize_status};
use crate::utils::date;
use crate::utils::formatting::ratio;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        date: date_arg,
        student,
    } = cmd
    {
        let store = open_store(cfg)?;

        //
        // One student's history
        //
        if let Some(key) = student {
            let (student, records) = AttendanceLogic::history(&store, key)?;
            header(format!("{} (roll {})", student.name, student.roll_no));

            if records.is_empty() {
                info("No attendance recorded yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("Date"),
                Column::left("Day"),
                Column::left("Status"),
            ]);
            for r in &records {
                table.add_row(vec![
                    r.date_str(),
                    date::weekday_name(r.date),
                    colorize_status(Some(r.status)),
                ]);
            }
            print!("{}", table.render());

            let present = records.iter().filter(|r| r.status.is_present()).count();
            let pct = stats::percentage(present, records.len());
            let band = AttendanceBand::classify(pct, Thresholds::from(cfg));
            println!(
                "\nPresent on {} days: {}",
                ratio(present, records.len()),
                colorize_percentage(pct, band)
            );
            return Ok(());
        }

        //
        // Sheet for one day
        //
        let day = date::parse_optional_date(date_arg.as_deref())?;
        let sheet = AttendanceLogic::sheet(&store, day)?;

        header(format!("Attendance for {} ({})", day, date::weekday_name(day)));

        if sheet.is_empty() {
            info("No students registered yet. Add one with `rattendance add <NAME> <ROLL>`.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Roll No"),
            Column::left("Name"),
            Column::left("Status"),
        ]);
        for row in &sheet {
            table.add_row(vec![
                row.student.roll_no.clone(),
                row.student.name.clone(),
                colorize_status(row.status),
            ]);
        }
        print!("{}", table.render());

        let present = sheet
            .iter()
            .filter(|r| r.status.is_some_and(|s| s.is_present()))
            .count();
        let marked = sheet.iter().filter(|r| r.status.is_some()).count();
        println!(
            "\nPresent: {} | Absent: {} | Not marked: {}",
            present,
            marked - present,
            sheet.len() - marked
        );
    }

    Ok(())
}
