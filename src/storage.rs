//! JSON file storage adapter for the user directory
//!
//! Handles persistence of registered users to a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::user::UserDirectory;

/// JSON storage adapter
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a new storage adapter for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the storage path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the directory from the JSON file
    pub fn load(&self) -> Result<UserDirectory> {
        if !self.path.exists() {
            return Ok(UserDirectory::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        parse_directory(&contents)
    }

    /// Save the directory to the JSON file
    pub fn save(&self, directory: &UserDirectory) -> Result<()> {
        // Create backup before overwriting
        self.backup()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format_directory(directory)?)?;
        Ok(())
    }

    /// Create a backup of the users file
    pub fn backup(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(()); // Nothing to backup
        }

        let backup_path = self.path.with_extension("json.bak");
        fs::copy(&self.path, &backup_path)?;
        Ok(())
    }

    /// Recover the directory from the backup file
    pub fn recover(&self) -> Result<UserDirectory> {
        let backup_path = self.path.with_extension("json.bak");

        if !backup_path.exists() {
            return Err(AppError::storage("Backup file not found"));
        }

        let contents = fs::read_to_string(&backup_path)?;
        parse_directory(&contents)
    }

    /// Check if backup exists
    pub fn backup_exists(&self) -> bool {
        self.path.with_extension("json.bak").exists()
    }
}

/// Parse a JSON document into a directory
fn parse_directory(contents: &str) -> Result<UserDirectory> {
    serde_json::from_str(contents)
        .map_err(|e| AppError::parse_with_source("Invalid users file", e))
}

/// Format a directory as a JSON document
fn format_directory(directory: &UserDirectory) -> Result<String> {
    Ok(serde_json::to_string_pretty(directory)?)
}
