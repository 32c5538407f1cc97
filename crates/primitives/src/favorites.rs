/// Favorited words, case-sensitive, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
	words: Vec<String>,
}

impl Favorites {
	/// Rebuilds favorites from stored words, dropping duplicates and blanks.
	pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
		let mut favorites = Self::default();
		for word in words {
			if !word.trim().is_empty() && !favorites.contains(&word) {
				favorites.words.push(word);
			}
		}
		favorites
	}

	/// Flips membership of `word`. Returns `true` if it is now a favorite.
	pub fn toggle(&mut self, word: &str) -> bool {
		match self.words.iter().position(|w| w == word) {
			Some(idx) => {
				self.words.remove(idx);
				false
			}
			None => {
				self.words.push(word.to_owned());
				true
			}
		}
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}
