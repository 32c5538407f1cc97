/// Default maximum number of remembered lookups.
pub const HISTORY_LIMIT: usize = 10;

/// Recent successful lookups, most recent first.
///
/// No two words compare equal ignoring case, and the list never grows past
/// its limit. Every constructor and mutation preserves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
	words: Vec<String>,
	limit: usize,
}

impl Default for History {
	fn default() -> Self {
		Self::new(HISTORY_LIMIT)
	}
}

impl History {
	/// Creates an empty history holding at most `limit` words (minimum 1).
	pub fn new(limit: usize) -> Self {
		Self {
			words: Vec::new(),
			limit: limit.max(1),
		}
	}

	/// Rebuilds a history from stored words, most recent first.
	///
	/// Later case-insensitive duplicates and blank words are dropped, then the
	/// list is truncated to `limit`.
	pub fn from_words(words: impl IntoIterator<Item = String>, limit: usize) -> Self {
		let mut history = Self::new(limit);
		for word in words {
			let word = word.trim();
			if word.is_empty() || history.position(word).is_some() {
				continue;
			}
			history.words.push(word.to_owned());
		}
		history.words.truncate(history.limit);
		history
	}

	/// Moves `word` to the front, replacing any case-insensitive match.
	pub fn record(&mut self, word: &str) {
		let word = word.trim();
		if word.is_empty() {
			return;
		}
		if let Some(idx) = self.position(word) {
			self.words.remove(idx);
		}
		self.words.insert(0, word.to_owned());
		self.words.truncate(self.limit);
	}

	pub fn clear(&mut self) {
		self.words.clear();
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub const fn limit(&self) -> usize {
		self.limit
	}

	fn position(&self, word: &str) -> Option<usize> {
		let needle = word.to_lowercase();
		self.words.iter().position(|w| w.to_lowercase() == needle)
	}
}
