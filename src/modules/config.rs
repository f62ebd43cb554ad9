use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::{DATABASE_FILE, LOG_FILE};

/// Application settings, read from an optional JSON file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: String,
    pub log_file: String,
    pub log_level: String, // off, error, warn, info, debug, trace
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: DATABASE_FILE.to_string(),
            log_file: LOG_FILE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = match fs::read_to_string(path.as_ref()) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        serde_json::from_str(&data).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid configuration in {}: {}", path.as_ref().display(), e),
            )
        })
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }

    /// Parsed log level; unknown names fall back to Info
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
