use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file in the requested editor, falling back to
    /// $EDITOR / $VISUAL and then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        for ed in [&requested, &default_editor] {
            if let Ok(s) = Command::new(ed).arg(path).status()
                && s.success()
            {
                return Ok(ed.clone());
            }
        }

        Err(AppError::Config(format!(
            "Failed to edit configuration file with '{requested}' or '{default_editor}'"
        )))
    }
}
