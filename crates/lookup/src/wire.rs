//! Response schema of the dictionary service and its mapping onto [`Entry`].

use lexon_primitives::{Definition, Entry, Meaning, Phonetic};
use serde::Deserialize;

use crate::FailureReason;

#[derive(Debug, Deserialize)]
struct WireEntry {
	word: String,
	#[serde(default)]
	phonetic: Option<String>,
	#[serde(default)]
	phonetics: Vec<WirePhonetic>,
	#[serde(default)]
	origin: Option<String>,
	#[serde(default)]
	meanings: Vec<WireMeaning>,
}

#[derive(Debug, Deserialize)]
struct WirePhonetic {
	#[serde(default)]
	text: Option<String>,
	#[serde(default)]
	audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMeaning {
	#[serde(default)]
	part_of_speech: String,
	#[serde(default)]
	definitions: Vec<WireDefinition>,
	#[serde(default)]
	synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireDefinition {
	definition: String,
	#[serde(default)]
	example: Option<String>,
	#[serde(default)]
	synonyms: Vec<String>,
}

impl From<WireEntry> for Entry {
	fn from(wire: WireEntry) -> Self {
		let phonetics: Vec<Phonetic> = wire
			.phonetics
			.into_iter()
			.map(|p| Phonetic {
				text: p.text,
				audio: p.audio,
			})
			.collect();

		Entry {
			phonetic: Entry::resolve_phonetic(wire.phonetic.as_deref(), &phonetics),
			word: wire.word,
			phonetics,
			origin: wire.origin.filter(|o| !o.trim().is_empty()),
			meanings: wire.meanings.into_iter().map(Meaning::from).collect(),
		}
	}
}

impl From<WireMeaning> for Meaning {
	fn from(wire: WireMeaning) -> Self {
		Meaning {
			part_of_speech: wire.part_of_speech,
			definitions: wire
				.definitions
				.into_iter()
				.map(|d| Definition {
					text: d.definition,
					example: d.example.filter(|e| !e.trim().is_empty()),
					synonyms: d.synonyms,
				})
				.collect(),
			synonyms: wire.synonyms,
		}
	}
}

/// Decodes a success body and keeps the first candidate entry.
///
/// An empty array is [`FailureReason::NotFound`]; anything undecodable is
/// [`FailureReason::Transport`].
pub fn parse_entries(body: &[u8]) -> Result<Entry, FailureReason> {
	let entries: Vec<WireEntry> = serde_json::from_slice(body).map_err(|e| FailureReason::Transport(format!("invalid response body: {e}")))?;
	entries.into_iter().next().map(Entry::from).ok_or(FailureReason::NotFound)
}
