// config module: persistent settings stored as JSON in the home directory
use crate::core::SelectionPointerOption;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const APP_DIR: &str = ".selection-pointer";
const CONFIG_FILE: &str = "config.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selection_pointer: SelectionPointerOption,
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selection_pointer: SelectionPointerOption::Enabled,
            debounce_ms: 50,
        }
    }
}

impl Config {
    // ~/.selection-pointer, falling back to the working directory
    pub fn app_dir() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let mut path = PathBuf::from(home);
        path.push(APP_DIR);
        path
    }

    pub fn default_path() -> PathBuf {
        Self::app_dir().join(CONFIG_FILE)
    }

    // A missing file means defaults; a malformed one is an error
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    // Command line values win over the file
    pub fn with_overrides(
        mut self,
        pointer: Option<SelectionPointerOption>,
        debounce_ms: Option<u64>,
    ) -> Self {
        if let Some(pointer) = pointer {
            self.selection_pointer = pointer;
        }
        if let Some(ms) = debounce_ms {
            self.debounce_ms = ms;
        }
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "selection_pointer": "grab" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.selection_pointer,
            SelectionPointerOption::Style("grab".to_string())
        );
        assert_eq!(config.debounce_ms, 50);
    }

    #[test]
    fn test_disabled_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "selection_pointer": false, "debounce_ms": 120 }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.selection_pointer, SelectionPointerOption::Disabled);
        assert_eq!(config.debounce(), Duration::from_millis(120));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ selection_pointer: ").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_command_line_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "selection_pointer": "grab", "debounce_ms": 80 }"#).unwrap();

        let config = Config::load(&path).unwrap().with_overrides(None, Some(10));
        assert_eq!(
            config.selection_pointer,
            SelectionPointerOption::Style("grab".to_string())
        );
        assert_eq!(config.debounce(), Duration::from_millis(10));

        let config = config.with_overrides(Some(SelectionPointerOption::Disabled), None);
        assert_eq!(config.selection_pointer, SelectionPointerOption::Disabled);
        assert_eq!(config.debounce_ms, 10);
    }
}
