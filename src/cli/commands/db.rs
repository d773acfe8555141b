use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::check::{check_store, prune_orphans, sqlite_integrity};
use crate::db::stats::{print_storage_info, storage_info};
use crate::db::{BackendKind, SqliteBackend, open_store};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use crate::utils::formatting::plural;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        prune,
        vacuum,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let nothing_requested = !(*info || *check || *prune || *vacuum);

        //
        // 1) INFO (also the default)
        //
        if *info || nothing_requested {
            let info = storage_info(&store, &cfg.database)?;
            print_storage_info(&info);
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            if cfg.backend == BackendKind::Sqlite {
                for problem in sqlite_integrity(&cfg.database)? {
                    println!("{}✘ SQLite:{} {}", RED, RESET, problem);
                }
            }

            let report = match check_store(&store) {
                Ok(r) => r,
                Err(e) => {
                    println!("{}✘ Stored data cannot be read:{} {}\n", RED, RESET, e);
                    return Err(e);
                }
            };

            if report.is_clean() {
                println!(
                    "{}✔ Integrity check passed{} ({}, {}).\n",
                    GREEN,
                    RESET,
                    plural(report.students, "student"),
                    plural(report.records, "record")
                );
            } else {
                println!("{}✘ Integrity check found problems:{}", RED, RESET);
                for id in &report.duplicate_student_ids {
                    println!("  - duplicate student id {}", id);
                }
                for r in &report.orphan_records {
                    println!("  - orphaned record {} (no student {})", r.id, r.student_id);
                }
                for (student_id, day) in &report.duplicate_pairs {
                    println!("  - more than one record for student {} on {}", student_id, day);
                }
                println!();
            }
        }

        //
        // 3) PRUNE
        //
        if *prune {
            let removed = prune_orphans(&mut store)?;
            println!(
                "{}✔ Removed {}.{}\n",
                GREEN,
                plural(removed, "orphaned record"),
                RESET
            );
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            if cfg.backend != BackendKind::Sqlite {
                warning("VACUUM only applies to the SQLite backend.");
            } else {
                drop(store);
                println!("{}▶ Running VACUUM…{}", CYAN, RESET);
                let mut sqlite = SqliteBackend::open(&cfg.database)?;
                sqlite.pool_mut().conn.execute_batch("VACUUM;")?;
                println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
            }
        }
    }

    Ok(())
}
