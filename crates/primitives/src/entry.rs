/// Full definition record for one word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
	/// Headword as reported by the service.
	pub word: String,
	/// Resolved phonetic transcription, see [`Entry::resolve_phonetic`].
	pub phonetic: Option<String>,
	/// Phonetic sub-records in service order. Carries the audio URLs.
	pub phonetics: Vec<Phonetic>,
	/// Etymology, when the service provides one.
	pub origin: Option<String>,
	/// Meanings grouped by part of speech, in service order.
	pub meanings: Vec<Meaning>,
}

/// One phonetic sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Phonetic {
	pub text: Option<String>,
	pub audio: Option<String>,
}

/// Definitions grouped under a single part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Meaning {
	pub part_of_speech: String,
	pub definitions: Vec<Definition>,
	/// Meaning-level synonyms. Definition-level ones live on [`Definition`].
	pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Definition {
	pub text: String,
	pub example: Option<String>,
	pub synonyms: Vec<String>,
}

impl Entry {
	/// Picks the transcription to display.
	///
	/// The top-level field wins when non-empty; otherwise the first sub-record
	/// with non-empty text is used.
	pub fn resolve_phonetic(top_level: Option<&str>, phonetics: &[Phonetic]) -> Option<String> {
		non_empty(top_level)
			.or_else(|| phonetics.iter().find_map(|p| non_empty(p.text.as_deref())))
			.map(str::to_owned)
	}

	/// Returns the first phonetic audio URL that is non-empty.
	pub fn pronunciation_audio(&self) -> Option<&str> {
		self.phonetics.iter().find_map(|p| non_empty(p.audio.as_deref()))
	}

	/// Looks up a definition by meaning and definition index.
	pub fn definition(&self, meaning: usize, definition: usize) -> Option<&Definition> {
		self.meanings.get(meaning)?.definitions.get(definition)
	}
}

impl Meaning {
	/// Definition-level and meaning-level synonyms merged, first occurrence wins.
	pub fn all_synonyms(&self) -> Vec<&str> {
		let mut seen: Vec<&str> = Vec::new();
		let candidates = self
			.definitions
			.iter()
			.flat_map(|d| d.synonyms.iter())
			.chain(self.synonyms.iter());
		for synonym in candidates {
			if !synonym.is_empty() && !seen.contains(&synonym.as_str()) {
				seen.push(synonym);
			}
		}
		seen
	}
}

impl Definition {
	/// Text written to the clipboard by the copy-definition action.
	pub fn to_plain_text(&self) -> String {
		match &self.example {
			Some(example) => format!("{}\nExample: {example}", self.text),
			None => self.text.clone(),
		}
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|s| !s.trim().is_empty())
}
