use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles loading and validating the settings that shape how
/// subtitle files are selected, backed up and rewritten.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// File name suffix selecting subtitle files (case-sensitive, no dot required)
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Suffix appended to a file's path for its backup copy
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,

    /// Index written for the first block of a cleaned file
    #[serde(default)]
    pub first_index: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_suffix: default_file_suffix(),
            backup_suffix: default_backup_suffix(),
            first_index: 0,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open config file {:?}: {}", path, e)))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AppError> {
        if self.file_suffix.is_empty() {
            return Err(AppError::Config("file_suffix must not be empty".to_string()));
        }

        // An empty backup suffix would rename the file onto itself
        if self.backup_suffix.is_empty() {
            return Err(AppError::Config("backup_suffix must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// Default value functions

fn default_file_suffix() -> String {
    "srt".to_string()
}

fn default_backup_suffix() -> String {
    ".bak".to_string()
}
