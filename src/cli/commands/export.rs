use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let (store, snapshot) = open_store(cfg)?;
        let rows = ExportLogic::export(&snapshot, format.clone(), file, range, *force)?;

        if rows > 0
            && let Err(e) = ttlog(
                &store.dir,
                "export",
                file,
                &format!("{rows} session(s) exported as {}", format.as_str()),
            )
        {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}
