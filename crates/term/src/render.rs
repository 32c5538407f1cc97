//! Plain-text rendering of session state for the line-oriented front end.

use std::fmt::Write;

use lexon_primitives::{Entry, ThemePreference};
use lexon_session::SearchState;

/// ANSI styling for headings, chosen by theme. Empty when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	heading: &'static str,
	dim: &'static str,
	reset: &'static str,
}

impl Palette {
	pub const PLAIN: Self = Self {
		heading: "",
		dim: "",
		reset: "",
	};

	pub fn new(theme: ThemePreference, color: bool) -> Self {
		if !color {
			return Self::PLAIN;
		}
		match theme {
			ThemePreference::Light => Self {
				heading: "\x1b[1;34m",
				dim: "\x1b[2m",
				reset: "\x1b[0m",
			},
			ThemePreference::Dark => Self {
				heading: "\x1b[1;96m",
				dim: "\x1b[37m",
				reset: "\x1b[0m",
			},
		}
	}
}

/// Text shown after the search state changed.
pub fn render_state(state: &SearchState, favorite: bool, palette: Palette) -> String {
	match state {
		SearchState::Idle => String::new(),
		SearchState::Loading { word } => format!("Looking up \"{word}\"..."),
		SearchState::Success { entry, .. } => render_entry(entry, favorite, palette),
		SearchState::Failure { .. } => state.error_message().unwrap_or_default().to_owned(),
	}
}

/// Entry with 1-based meaning and definition numbers matching `:copy`.
pub fn render_entry(entry: &Entry, favorite: bool, palette: Palette) -> String {
	let Palette { heading, dim, reset } = palette;
	let mut out = String::new();

	let _ = write!(out, "{heading}{}{reset}", entry.word);
	if let Some(phonetic) = &entry.phonetic {
		let _ = write!(out, "  {phonetic}");
	}
	if favorite {
		out.push_str("  *");
	}
	out.push('\n');
	if entry.pronunciation_audio().is_some() {
		let _ = writeln!(out, "{dim}audio available, :play to listen{reset}");
	}

	for (m, meaning) in entry.meanings.iter().enumerate() {
		let _ = writeln!(out, "\n{heading}[{}] {}{reset}", m + 1, meaning.part_of_speech);
		for (d, def) in meaning.definitions.iter().enumerate() {
			let _ = writeln!(out, "  {}. {}", d + 1, def.text);
			if let Some(example) = &def.example {
				let _ = writeln!(out, "     {dim}\"{example}\"{reset}");
			}
		}
		let synonyms = meaning.all_synonyms();
		if !synonyms.is_empty() {
			let _ = writeln!(out, "  synonyms: {}", synonyms.join(", "));
		}
	}

	if let Some(origin) = &entry.origin {
		let _ = write!(out, "\norigin: {origin}\n");
	}
	out
}

/// Numbered word list, or a placeholder when empty.
pub fn render_list(title: &str, words: &[String]) -> String {
	if words.is_empty() {
		return format!("{title}: (none)");
	}
	let mut out = format!("{title}:");
	for (idx, word) in words.iter().enumerate() {
		let _ = write!(out, "\n  {}. {word}", idx + 1);
	}
	out
}
