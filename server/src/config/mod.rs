//! Configuration management for the slug server
//!
//! Configuration is stored in RON format and loaded with fallback discovery;
//! every setting has a default so the server runs with no config file at all.

pub mod loader;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub slugs: SlugSettings,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Slug generation settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SlugSettings {
    /// Substring a target URL must contain to be accepted
    #[serde(default = "default_url_marker")]
    pub url_marker: String,

    /// Length of the random suffix appended on collision
    #[serde(default = "default_suffix_len")]
    pub suffix_len: usize,

    /// Maximum number of store lookups before generation gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for SlugSettings {
    fn default() -> Self {
        SlugSettings {
            url_marker: default_url_marker(),
            suffix_len: default_suffix_len(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_url_marker() -> String {
    "script.google.com/macros/s/".to_string()
}

fn default_suffix_len() -> usize {
    4
}

fn default_max_attempts() -> u32 {
    10
}
