//! Journal configuration.
//!
//! # Responsibility
//! - Load `config.toml` and fill every missing field with a default.
//! - Derive the on-disk locations of the database, photos and logs.
//!
//! # Invariants
//! - A missing config file is not an error; defaults apply.
//! - Malformed TOML is reported, never silently replaced by defaults.

use crate::calendar::CalendarDate;
use crate::logging::LogLevel;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "redthread";
const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "redthread.sqlite3";
const PHOTOS_DIR_SEGMENTS: [&str; 5] = ["storage", "v1", "object", "public", "photos"];
const LOGS_DIR_NAME: &str = "logs";

const DEFAULT_PASSWORD: &str = "incandescent";
const DEFAULT_PARTNERS: [&str; 2] = ["keya", "tai"];
const DEFAULT_PLAYLIST_URL: &str =
    "https://open.spotify.com/playlist/3ytkKbz8DTVpWtod4RxzAF?si=aed292895d3842f0";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Shared secret checked by the password gate.
    pub password: String,
    /// Pinned note slots, one per partner.
    pub partners: Vec<String>,
    /// Start of the "days since we met" counter.
    pub met_date: CalendarDate,
    /// Milestone anchor and start of the "days together" counter.
    pub together_date: CalendarDate,
    pub playlist_url: Option<String>,
    /// Origin photo URLs are published under; `None` serves them from
    /// `data_dir` as `file://` URLs.
    pub photo_base_url: Option<String>,
    /// Holds the database, the photo bucket and the logs.
    pub data_dir: PathBuf,
    /// `None` falls back to `LogLevel::default()`.
    pub log_level: Option<String>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
            partners: DEFAULT_PARTNERS.iter().map(|name| name.to_string()).collect(),
            met_date: CalendarDate::from_ymd(2025, 10, 5).expect("valid default met date"),
            together_date: CalendarDate::from_ymd(2025, 11, 20)
                .expect("valid default together date"),
            playlist_url: Some(DEFAULT_PLAYLIST_URL.to_string()),
            photo_base_url: None,
            data_dir: default_data_dir(),
            log_level: None,
        }
    }
}

impl JournalConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Bucket directory. Mirrors the public URL layout so that
    /// `<photo_base_url()>/storage/v1/object/public/photos/<path>` resolves to
    /// `<blob_root()>/<path>` when serving from `data_dir`.
    pub fn blob_root(&self) -> PathBuf {
        PHOTOS_DIR_SEGMENTS
            .iter()
            .fold(self.data_dir.clone(), |dir, segment| dir.join(segment))
    }

    pub fn photo_base_url(&self) -> String {
        match self.photo_base_url.as_deref() {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("file://{}", self.data_dir.display()),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOGS_DIR_NAME)
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| LogLevel::default().as_str())
    }
}

/// `<platform config dir>/redthread/config.toml`, when the platform has one.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<JournalConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(JournalConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_config(&text).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parses TOML text into a config, defaulting absent fields.
pub fn parse_config(text: &str) -> Result<JournalConfig, String> {
    toml::from_str(text).map_err(|err| err.to_string())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
