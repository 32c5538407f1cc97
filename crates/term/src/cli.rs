use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lexon_session::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "lexon")]
#[command(about = "Look up English words from the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to <config dir>/lexon/config.toml)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Directory holding history, favorites and theme
	#[arg(long, global = true, value_name = "PATH")]
	pub data_dir: Option<PathBuf>,

	/// Dictionary service base URL
	#[arg(long, global = true, value_name = "URL")]
	pub endpoint: Option<String>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute (interactive mode if omitted).
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Interactive lookup: each line typed replaces the query
	Repl,
	/// Look up one word and print it
	Define {
		/// Word to look up.
		word: String,
	},
	/// Show recent lookups
	History {
		/// Forget all recent lookups
		#[arg(long)]
		clear: bool,
	},
	/// Show favorited words
	Favorites,
	/// Add a word to favorites, or remove it if already there
	Favorite {
		/// Word to toggle.
		word: String,
	},
	/// Show or change the theme preference
	Theme {
		/// New theme (prints the current one if omitted).
		#[arg(value_enum)]
		action: Option<ThemeAction>,
	},
}

/// Theme subcommand argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
	Light,
	Dark,
	Toggle,
}

impl Cli {
	/// Applies flags on top of file configuration.
	pub fn apply_overrides(&self, config: &mut SessionConfig) {
		if let Some(dir) = &self.data_dir {
			config.data_dir = Some(dir.clone());
		}
		if let Some(endpoint) = &self.endpoint {
			config.endpoint = endpoint.clone();
		}
	}
}
