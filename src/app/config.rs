use crate::app::debounce::DEFAULT_DEBOUNCE;
use crate::app::keymap::KeyConfig;
use crate::domain::models::{TextDirection, WidgetProps};
use crate::infrastructure::open_library::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub placeholder: String,
    pub lang: String,
    pub dir: TextDirection,
    pub api_url: String,
    pub debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub keys: KeyConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let props = WidgetProps::default();
        Self {
            placeholder: props.placeholder,
            lang: props.lang,
            dir: props.dir,
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            keys: KeyConfig::default(),
        }
    }
}

impl Settings {
    /// Loads `explicit` if given, otherwise the default config path when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => match get_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn props(&self) -> WidgetProps {
        WidgetProps {
            placeholder: self.placeholder.clone(),
            lang: self.lang.clone(),
            dir: self.dir,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("typeahead");
        path.push("config.toml");
        path
    })
}

pub fn get_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("typeahead");
        path.push("typeahead.log");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.placeholder, "Search...");
        assert_eq!(settings.lang, "en");
        assert_eq!(settings.dir, TextDirection::Ltr);
        assert_eq!(settings.api_url, "https://openlibrary.org/search.json");
        assert_eq!(settings.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
lang = "ar"
dir = "rtl"
debounce_ms = 150

[keys]
profile = "emacs"

[keys.custom]
tab = "accept_inline"
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.lang, "ar");
        assert_eq!(settings.dir, TextDirection::Rtl);
        assert_eq!(settings.debounce(), Duration::from_millis(150));
        assert_eq!(settings.placeholder, "Search...");
        assert_eq!(settings.keys.profile, "emacs");
        assert_eq!(
            settings
                .keys
                .custom
                .as_ref()
                .and_then(|c| c.get("tab"))
                .map(String::as_str),
            Some("accept_inline")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dir = \"sideways\"").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
