use crate::errors::{AppError, AppResult};
use crate::models::CurrencyType;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default)]
    pub currency: CurrencyType,
    /// Lead the cumulative chart with a 0 baseline
    #[serde(default = "default_chart_baseline")]
    pub chart_baseline: bool,
    #[serde(default = "default_game")]
    pub default_game: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_chart_baseline() -> bool {
    true
}
fn default_game() -> String {
    "NL Texas Hold Em".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            currency: CurrencyType::default(),
            chart_baseline: default_chart_baseline(),
            default_game: default_game(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbankroll")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rbankroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbankroll.conf")
    }

    /// Data directory with `~` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration file, creating its directory if needed
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    /// Initialize configuration with an optional custom data directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(dir) = custom_data {
            config.data_dir = dir;
        }

        if !is_test {
            let path = config.save()?;
            println!("✅ Config file: {:?}", path);
        }

        Ok(config)
    }
}
