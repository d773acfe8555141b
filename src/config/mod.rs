use crate::db::BackendKind;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub backend: BackendKind,
    /// Percentages at or above this value are shown as good attendance.
    #[serde(default = "default_good_threshold")]
    pub good_threshold: u32,
    /// Percentages at or above this value (and below `good_threshold`) are
    /// shown as a warning; anything lower is low attendance.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u32,
}

fn default_good_threshold() -> u32 {
    75
}
fn default_warning_threshold() -> u32 {
    50
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            backend: BackendKind::default(),
            good_threshold: default_good_threshold(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the default path of the storage file
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.warning_threshold > self.good_threshold {
            return Err(AppError::Config(format!(
                "warning_threshold ({}) must not exceed good_threshold ({})",
                self.warning_threshold, self.good_threshold
            )));
        }
        if self.good_threshold > 100 {
            return Err(AppError::Config(format!(
                "good_threshold must be a percentage, got {}",
                self.good_threshold
            )));
        }
        Ok(())
    }

    /// Apply `--db` / `--backend` overrides from the command line.
    ///
    /// Callers pass the path through `utils::path::resolve_db_path` first.
    ///
    /// Without an explicit backend, a `.json` storage file selects the JSON
    /// backend and a `.sqlite`/`.db` file the SQLite one.
    pub fn with_overrides(mut self, db: Option<&str>, backend: Option<BackendKind>) -> Self {
        if let Some(path) = db {
            self.database = path.to_string();
            if let Some(kind) = BackendKind::from_path(path) {
                self.backend = kind;
            }
        }
        if let Some(kind) = backend {
            self.backend = kind;
        }
        self
    }

    /// Initialize configuration directory and file.
    ///
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(
        custom_db: Option<&str>,
        backend: Option<BackendKind>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let config = Config::default().with_overrides(custom_db, backend);

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
