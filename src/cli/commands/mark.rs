use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        date: date_arg,
        present,
        absent,
        toggle,
        all_present,
    } = cmd
    {
        let day = date::parse_optional_date(date_arg.as_deref())?;
        let mut store = open_store(cfg)?;

        if let Some(key) = toggle {
            let (student, status) = AttendanceLogic::toggle(&mut store, day, key)?;
            success(format!("{} marked {} on {}", student.name, status, day));
            return Ok(());
        }

        let marked = if *all_present {
            AttendanceLogic::mark_all_present(&mut store, day)?
        } else {
            AttendanceLogic::mark(&mut store, day, present, absent)?
        };

        if marked.is_empty() {
            warning("No students registered: nothing to mark.");
            return Ok(());
        }

        let present_count = marked.iter().filter(|(_, s)| s.is_present()).count();
        success(format!(
            "Attendance saved successfully for {}: {} present, {} absent",
            day,
            present_count,
            marked.len() - present_count
        ));
    }

    Ok(())
}
