use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::students::StudentLogic;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a new student.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, roll_no } = cmd {
        let mut store = open_store(cfg)?;
        let student = StudentLogic::add(&mut store, name, roll_no)?;

        success(format!(
            "Student added successfully: {} (roll {}, id {})",
            student.name, student.roll_no, student.id
        ));
    }

    Ok(())
}
