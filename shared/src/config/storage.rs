//! Persistent session storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Keys and location of the persisted session
///
/// The three keys mirror the browser storage keys the web client writes,
/// so a session saved by one front end can be read by another.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Key holding the bearer token
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// Key holding the role string
    #[serde(default = "default_role_key")]
    pub role_key: String,

    /// Key holding the role-specific profile id
    #[serde(default = "default_user_id_key")]
    pub user_id_key: String,

    /// Directory holding one storage file per origin
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Origin the storage is scoped to
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            role_key: default_role_key(),
            user_id_key: default_user_id_key(),
            directory: default_directory(),
            origin: default_origin(),
        }
    }
}

impl StorageConfig {
    /// Scope storage to another origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Store files under another directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }
}

fn default_token_key() -> String {
    String::from("token")
}

fn default_role_key() -> String {
    String::from("role")
}

fn default_user_id_key() -> String {
    String::from("userId")
}

fn default_directory() -> PathBuf {
    PathBuf::from(".gig/storage")
}

fn default_origin() -> String {
    String::from("http://localhost:3000")
}
