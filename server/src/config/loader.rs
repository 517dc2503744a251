//! Configuration file loading and parsing
//!
//! Loads server configuration from RON files with fallback strategies for
//! finding config files in standard locations.

use super::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Standard config file names to search for
const CONFIG_FILENAMES: &[&str] = &["slug.ron", ".slug/config.ron"];

/// Load configuration from a specific file path
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_ron(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration with automatic file discovery
///
/// Searches for config files in the following locations (in order):
/// 1. Path specified in SLUG_CONFIG_PATH environment variable
/// 2. slug.ron in current directory
/// 3. .slug/config.ron relative to current directory
///
/// If no config file is found, returns a default configuration.
pub fn load_with_discovery() -> Result<Config> {
    // Check environment variable first
    if let Ok(env_path) = std::env::var("SLUG_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            tracing::info!("Loading config from SLUG_CONFIG_PATH: {}", path.display());
            return load_from_file(&path);
        } else {
            tracing::warn!(
                "SLUG_CONFIG_PATH specified but file not found: {}",
                path.display()
            );
        }
    }

    // Search standard locations
    for filename in CONFIG_FILENAMES {
        let path = PathBuf::from(filename);
        if path.exists() {
            tracing::info!("Loading config from: {}", path.display());
            return load_from_file(&path);
        }
    }

    // No config file found, use defaults
    tracing::info!("No config file found, using defaults");
    Ok(Config::default())
}

/// Parse RON configuration string
fn parse_ron(content: &str) -> Result<Config> {
    ron::from_str(content).context("Failed to parse RON configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_ron("Config()").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.slugs.url_marker, "script.google.com/macros/s/");
        assert_eq!(config.slugs.suffix_len, 4);
        assert_eq!(config.slugs.max_attempts, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let ron = r#"
Config(
    server: ServerSettings(
        bind_addr: "127.0.0.1:9000",
    ),
    slugs: SlugSettings(
        url_marker: "example.com/apps/",
        suffix_len: 6,
        max_attempts: 3,
    ),
)
"#;
        let config = parse_ron(ron).unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.slugs.url_marker, "example.com/apps/");
        assert_eq!(config.slugs.suffix_len, 6);
        assert_eq!(config.slugs.max_attempts, 3);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let ron = r#"
Config(
    slugs: SlugSettings(
        max_attempts: 5,
    ),
)
"#;
        let config = parse_ron(ron).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.slugs.max_attempts, 5);
        assert_eq!(config.slugs.suffix_len, 4);
    }

    #[test]
    fn test_parse_invalid_ron_fails() {
        assert!(parse_ron("Config(server: )").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slug.ron");
        std::fs::write(
            &path,
            r#"Config(server: ServerSettings(bind_addr: "[::]:8080"))"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.bind_addr, "[::]:8080");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(load_from_file(dir.path().join("nope.ron")).is_err());
    }
}
