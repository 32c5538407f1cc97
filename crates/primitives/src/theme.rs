use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Persisted light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
	#[default]
	Light,
	Dark,
}

impl ThemePreference {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}

impl fmt::Display for ThemePreference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a string names neither theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError(pub String);

impl fmt::Display for ParseThemeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "invalid theme: {} (expected 'dark' or 'light')", self.0)
	}
}

impl std::error::Error for ParseThemeError {}

impl FromStr for ThemePreference {
	type Err = ParseThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(ParseThemeError(s.to_owned())),
		}
	}
}
