//! Application configuration
//!
//! Loaded through confy from the platform configuration directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent application settings
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the registry data files
    pub data_directory: String,
    /// File name of the user registry inside `data_directory`
    pub users_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        let data_directory = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verdict")
            .to_string_lossy()
            .into_owned();

        Self {
            data_directory,
            users_filename: "users.json".to_string(),
        }
    }
}
