//! Session configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use lexon_lookup::DEFAULT_ENDPOINT;
use lexon_primitives::HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::debounce::DEFAULT_DEBOUNCE;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config {}: {error}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},
	#[error("invalid config {}: {error}", path.display())]
	Toml {
		path: PathBuf,
		#[source]
		error: toml::de::Error,
	},
	#[error("no data directory available; pass --data-dir")]
	MissingDataDir,
}

/// User-tunable settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
	/// Quiet period before typed input triggers a lookup.
	pub debounce_ms: u64,
	/// Maximum number of recent lookups kept.
	pub history_limit: usize,
	/// Dictionary service base URL.
	pub endpoint: String,
	/// Where history, favorites and theme are stored.
	pub data_dir: Option<PathBuf>,
	/// Command used to play pronunciation audio; receives the clip URL as its
	/// last argument.
	pub audio_player: Option<String>,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
			history_limit: HISTORY_LIMIT,
			endpoint: DEFAULT_ENDPOINT.to_owned(),
			data_dir: None,
			audio_player: None,
		}
	}
}

impl SessionConfig {
	/// Default config file location, `<config dir>/lexon/config.toml`.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("lexon").join("config.toml"))
	}

	/// Reads `path`. A missing file yields defaults; a malformed one is an error.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "config.missing, using defaults");
				return Ok(Self::default());
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		Self::parse(&content).map_err(|error| ConfigError::Toml {
			path: path.to_path_buf(),
			error,
		})
	}

	pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Configured data directory, else `<data dir>/lexon`.
	pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
		if let Some(dir) = &self.data_dir {
			return Ok(dir.clone());
		}
		dirs::data_dir()
			.map(|dir| dir.join("lexon"))
			.ok_or(ConfigError::MissingDataDir)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tempfile::TempDir;

	use super::*;

	#[test]
	fn missing_file_yields_defaults() {
		let dir = TempDir::new().unwrap();
		let config = SessionConfig::load(&dir.path().join("config.toml")).unwrap();
		assert_eq!(config, SessionConfig::default());
		assert_eq!(config.debounce(), Duration::from_millis(600));
		assert_eq!(config.history_limit, 10);
		assert_eq!(config.endpoint, "https://api.dictionaryapi.dev/api/v2");
	}

	#[test]
	fn partial_file_keeps_other_defaults() {
		let config = SessionConfig::parse(
			r#"
debounce_ms = 250
audio_player = "mpv --no-video"
data_dir = "/tmp/lexon"
"#,
		)
		.unwrap();
		assert_eq!(config.debounce(), Duration::from_millis(250));
		assert_eq!(config.audio_player.as_deref(), Some("mpv --no-video"));
		assert_eq!(config.resolved_data_dir().unwrap(), PathBuf::from("/tmp/lexon"));
		assert_eq!(config.history_limit, HISTORY_LIMIT);
	}

	#[test]
	fn malformed_file_is_an_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "debounce_ms = \"soon\"").unwrap();
		assert!(matches!(SessionConfig::load(&path), Err(ConfigError::Toml { .. })));

		std::fs::write(&path, "colour = \"blue\"").unwrap();
		assert!(matches!(SessionConfig::load(&path), Err(ConfigError::Toml { .. })));
	}
}
