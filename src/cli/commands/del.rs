use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::students::StudentLogic;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::formatting::plural;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { student: key, yes } = cmd {
        let mut store = open_store(cfg)?;

        let students = store.list_students()?;
        let Some(student) = StudentLogic::resolve(&students, key)?.cloned() else {
            warning(format!("No student found for '{}': nothing deleted.", key));
            return Ok(());
        };

        let records = store.get_attendance_for_student(&student.id)?.len();

        //
        // Confirmation prompt
        //
        if !*yes {
            warning(format!(
                "Delete {} (roll {}) and {}? This action is irreversible.",
                student.name,
                student.roll_no,
                plural(records, "attendance record")
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        StudentLogic::delete(&mut store, &student.id)?;
        success(format!("Student deleted successfully: {}", student.name));
    }

    Ok(())
}
