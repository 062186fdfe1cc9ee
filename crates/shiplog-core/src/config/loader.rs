//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `shiplog.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/shiplog.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            // Check the directory itself
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            // Check .github/ subdirectory
            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(_) => {
            warn!(dir = %dir.display(), "no config found, using defaults");
            (Config::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("shiplog.toml");
        std::fs::write(&config_path, "[ticket]\nproject_code = \"M3\"").unwrap();

        let found = find_config(temp.path());
        assert!(found.is_some());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_find_config_prefers_yaml_over_toml() {
        let temp = TempDir::new().unwrap();
        let yaml_path = temp.path().join("shiplog.yaml");
        let toml_path = temp.path().join("shiplog.toml");
        std::fs::write(&yaml_path, "ticket:\n  project_code: M3").unwrap();
        std::fs::write(&toml_path, "[ticket]\nproject_code = \"M3\"").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, yaml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github = temp.path().join(".github");
        std::fs::create_dir_all(&github).unwrap();
        let config_path = github.join("shiplog.toml");
        std::fs::write(&config_path, "[ticket]\nproject_code = \"M3\"").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found.unwrap(), config_path);
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("shiplog.toml");
        std::fs::write(
            &config_path,
            "[changelog]\nfile = \"HISTORY.md\"\n[ticket]\nproject_code = \"OBS\"",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.file.to_str(), Some("HISTORY.md"));
        assert_eq!(config.ticket.project_code, "OBS");
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("shiplog.toml");
        std::fs::write(&config_path, "[ticket]\nproject_code = \"\"").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_load_config_or_default_falls_back() {
        let temp = TempDir::new().unwrap();
        let (config, path) = load_config_or_default(temp.path());
        // No config anywhere above a fresh temp dir is not guaranteed, but
        // defaults must hold when none is found.
        if path.is_none() {
            assert_eq!(config.ticket.project_code, "M3");
        }
    }
}
