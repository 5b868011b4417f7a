use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Location { add, list } = cmd {
        let (store, mut snapshot) = open_store(cfg)?;

        if let Some(name) = add {
            let loc = AddLogic::add_location(&store, &mut snapshot, name)?;
            success(format!("Location '{}' available", loc.name));
        }

        if *list || add.is_none() {
            if snapshot.locations.is_empty() {
                info("No locations recorded yet.");
            }
            let mut names: Vec<&str> = snapshot.locations.iter().map(|l| l.name.as_str()).collect();
            names.sort_by_key(|n| n.to_lowercase());
            for n in names {
                println!("- {n}");
            }
        }
    }
    Ok(())
}
