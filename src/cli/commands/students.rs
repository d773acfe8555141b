use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::plural;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Students) {
        let store = open_store(cfg)?;
        let students = store.list_students()?;

        if students.is_empty() {
            info("No students registered yet. Add one with `rattendance add <NAME> <ROLL>`.");
            return Ok(());
        }

        header(format!("Students ({})", plural(students.len(), "student")));

        let mut table = Table::new(vec![
            Column::left("Roll No"),
            Column::left("Name"),
            Column::left("Id"),
        ]);
        for s in &students {
            table.add_row(vec![s.roll_no.clone(), s.name.clone(), s.id.clone()]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
