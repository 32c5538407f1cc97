//! Interpretation of one line of interactive input.
//!
//! Plain lines replace the query. Lines starting with `:` are commands.

use lexon_primitives::ThemePreference;
use lexon_session::Intent;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
	/// A session intent to apply.
	Intent(Intent),
	/// Set the theme explicitly.
	SetTheme(ThemePreference),
	ShowHistory,
	ShowFavorites,
	Help,
	Quit,
	/// Unrecognised command; carries the message to show.
	Invalid(String),
}

pub const HELP: &str = "\
type a word to look it up, or a command:
  :fav                toggle the shown word as a favorite
  :history            list recent lookups
  :favorites          list favorites
  :clear-history      forget recent lookups
  :theme [light|dark] toggle or set the theme
  :play               play the pronunciation
  :copy M D           copy definition D of meaning M (1-based)
  :select WORD        look up WORD (as if clicked)
  :clear              clear the query
  :quit               exit";

pub fn parse(line: &str) -> Line {
	let Some(command) = line.trim_start().strip_prefix(':') else {
		return Line::Intent(Intent::SetQuery(line.to_owned()));
	};
	let mut parts = command.split_whitespace();
	let name = parts.next().unwrap_or_default();
	let args: Vec<&str> = parts.collect();

	match (name, args.as_slice()) {
		("fav", []) => Line::Intent(Intent::ToggleFavorite),
		("history", []) => Line::ShowHistory,
		("favorites", []) => Line::ShowFavorites,
		("clear-history", []) => Line::Intent(Intent::ClearHistory),
		("theme", []) => Line::Intent(Intent::ToggleTheme),
		("theme", [theme]) => match theme.parse::<ThemePreference>() {
			Ok(theme) => Line::SetTheme(theme),
			Err(error) => Line::Invalid(error.to_string()),
		},
		("play", []) => Line::Intent(Intent::PlayPronunciation),
		("copy", [meaning, definition]) => match (one_based(meaning), one_based(definition)) {
			(Some(meaning), Some(definition)) => Line::Intent(Intent::CopyDefinition { meaning, definition }),
			_ => Line::Invalid("usage: :copy MEANING DEFINITION (numbers from 1)".into()),
		},
		("select", words) if !words.is_empty() => Line::Intent(Intent::SelectWord(words.join(" "))),
		("clear", []) => Line::Intent(Intent::ClearQuery),
		("help" | "h" | "?", []) => Line::Help,
		("quit" | "q", []) => Line::Quit,
		_ => Line::Invalid(format!("unknown command `:{command}`; try :help")),
	}
}

fn one_based(arg: &str) -> Option<usize> {
	arg.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_lines_are_queries() {
		assert_eq!(parse("hello"), Line::Intent(Intent::SetQuery("hello".into())));
		assert_eq!(parse("  ice cream "), Line::Intent(Intent::SetQuery("  ice cream ".into())));
		assert_eq!(parse(""), Line::Intent(Intent::SetQuery(String::new())));
	}

	#[test]
	fn commands_map_to_intents() {
		assert_eq!(parse(":fav"), Line::Intent(Intent::ToggleFavorite));
		assert_eq!(parse(":clear-history"), Line::Intent(Intent::ClearHistory));
		assert_eq!(parse(":theme"), Line::Intent(Intent::ToggleTheme));
		assert_eq!(parse(":play"), Line::Intent(Intent::PlayPronunciation));
		assert_eq!(parse(":clear"), Line::Intent(Intent::ClearQuery));
		assert_eq!(parse(":select ice cream"), Line::Intent(Intent::SelectWord("ice cream".into())));
		assert_eq!(parse(":history"), Line::ShowHistory);
		assert_eq!(parse(" :q"), Line::Quit);
	}

	#[test]
	fn copy_indices_are_one_based() {
		assert_eq!(
			parse(":copy 1 2"),
			Line::Intent(Intent::CopyDefinition { meaning: 0, definition: 1 })
		);
		assert!(matches!(parse(":copy 0 1"), Line::Invalid(_)));
		assert!(matches!(parse(":copy one two"), Line::Invalid(_)));
		assert!(matches!(parse(":copy 1"), Line::Invalid(_)));
	}

	#[test]
	fn theme_argument_is_parsed() {
		assert_eq!(parse(":theme Dark"), Line::SetTheme(ThemePreference::Dark));
		assert!(matches!(parse(":theme sepia"), Line::Invalid(msg) if msg.contains("sepia")));
	}

	#[test]
	fn unknown_commands_are_reported() {
		assert!(matches!(parse(":frobnicate"), Line::Invalid(msg) if msg.contains(":frobnicate")));
		assert!(matches!(parse(":"), Line::Invalid(_)));
	}
}
