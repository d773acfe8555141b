use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::Thresholds;
use crate::db::open_store;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let file = file
            .as_deref()
            .map(|f| expand_tilde(f).to_string_lossy().to_string());

        ExportLogic::export(
            &store,
            *format,
            file.as_deref(),
            range.as_deref(),
            *force,
            Thresholds::from(cfg),
        )?;
    }
    Ok(())
}
