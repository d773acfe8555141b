use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{KvBackend, open_store};
use crate::db::store::{RECORDS_KEY, STUDENTS_KEY};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::resolve_db_path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the storage file with both collections present and empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom_db = cli
        .db
        .as_deref()
        .map(resolve_db_path);

    let cfg = Config::init_all(custom_db.as_deref(), cli.backend, cli.test)?;

    info("Initializing rAttendance…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Storage     : {} ({})", cfg.database, cfg.backend.as_str());

    let mut store = open_store(&cfg)?;

    // Existing data is left untouched; only missing collections are created.
    if store.backend().get(STUDENTS_KEY)?.is_none() {
        store.save_students(&[])?;
    }
    if store.backend().get(RECORDS_KEY)?.is_none() {
        store.save_attendance_records(&[])?;
    }

    success(format!("Storage initialized at {}", cfg.database));
    Ok(())
}
