use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::services::summary_service::DEFAULT_SERIES_LABEL;
use crate::errors::BillError;

const DEFAULT_DIR_NAME: &str = ".bill_core";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "BILL_CORE_HOME";
const TMP_SUFFIX: &str = "tmp";

const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food & Dining",
    "Utility",
    "Shopping",
    "Education",
    "Personal Care",
    "Travel",
];

/// User preferences. Bills themselves are never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_budget: f64,
    pub categories: Vec<String>,
    pub chart_label: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_budget: 50_000.0,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            chart_label: DEFAULT_SERIES_LABEL.into(),
            log_filter: "bill_core=info".into(),
        }
    }
}

/// Returns the application directory, defaulting to `~/.bill_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Targets `config.json` inside [`app_data_dir`].
    pub fn new() -> Self {
        Self::at(app_data_dir().join(CONFIG_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Config, BillError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            debug!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BillError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{ext}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(extension);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), BillError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
