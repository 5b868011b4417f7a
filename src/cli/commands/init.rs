use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::ttlog;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory with empty collection files
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;
    let data_dir = cfg.data_path();

    println!("⚙️  Initializing rBankroll…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Data dir    : {}", data_dir.display());

    let store = RecordStore::new(&data_dir);
    store.init()?;

    println!("✅ Data directory initialized at {}", data_dir.display());

    if let Err(e) = ttlog(
        &store.dir,
        "init",
        "",
        &format!("Data directory initialized at {}", data_dir.display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 rBankroll initialization completed!");
    Ok(())
}
