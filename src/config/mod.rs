use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

pub mod migrate;

/// Which persistence backend the CLI talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Json,
    Remote,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Json => "json",
            Backend::Remote => "remote",
        }
    }
}

/// How raw Jira status names map onto internal statuses. Both tables
/// were observed in the wild; neither is canonical, so the choice is
/// configuration rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusMapping {
    /// Substring match: done/closed/review → review,
    /// progress/development → in-progress, else pending.
    #[default]
    Substring,
    /// Exact match: To Do → pending, In Progress → in-progress,
    /// Done/Closed → review, else pending.
    Exact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default)]
    pub default_project: String,
    #[serde(default)]
    pub auto_sync: bool,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub status_mapping: StatusMapping,
    #[serde(default = "default_due_days")]
    pub default_due_days: i64,
}

fn default_due_days() -> i64 {
    7
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            email: String::new(),
            api_token: String::new(),
            default_project: String::new(),
            auto_sync: false,
            connected: false,
            status_mapping: StatusMapping::Substring,
            default_due_days: default_due_days(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    pub database: String,
    #[serde(default = "Config::default_data_file_string")]
    pub data_file: String,
    #[serde(default)]
    pub remote_url: String,
    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default)]
    pub jira: JiraConfig,
}

fn default_backend() -> Backend {
    Backend::Sqlite
}
fn default_sync_interval() -> u64 {
    10
}
fn default_share_base_url() -> String {
    "https://rtracker.local/app".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database: Self::database_file().to_string_lossy().to_string(),
            data_file: Self::default_data_file_string(),
            remote_url: String::new(),
            sync_interval_secs: default_sync_interval(),
            share_base_url: default_share_base_url(),
            jira: JiraConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".rtracker"),
            None => PathBuf::from(".rtracker"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtracker.sqlite")
    }

    /// Return the full path of the JSON document store
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("rtracker.json")
    }

    fn default_data_file_string() -> String {
        Self::default_data_file().to_string_lossy().to_string()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Write the configuration back to disk.
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and storage files.
    ///
    /// Creates the config directory, the config file (skipped in test
    /// mode) and an empty database file when missing.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
