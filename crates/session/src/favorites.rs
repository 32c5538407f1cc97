//! Favorite words, toggled by the user and persisted on every change.

use lexon_primitives::Favorites;
use tracing::debug;

use crate::msg::Dirty;
use crate::persist::PersistHandle;

#[derive(Debug)]
pub struct FavoritesManager {
	favorites: Favorites,
	persist: PersistHandle,
}

impl FavoritesManager {
	pub fn new(favorites: Favorites, persist: PersistHandle) -> Self {
		Self { favorites, persist }
	}

	/// Adds `word` if absent, removes it otherwise, then persists.
	///
	/// Blank words are ignored.
	pub fn toggle(&mut self, word: &str) -> Dirty {
		let word = word.trim();
		if word.is_empty() {
			return Dirty::NONE;
		}
		let added = self.favorites.toggle(word);
		debug!(word, added, count = self.favorites.len(), "favorites.toggle");
		self.persist.save_favorites(&self.favorites);
		Dirty::FAVORITES
	}

	pub fn contains(&self, word: &str) -> bool {
		self.favorites.contains(word)
	}

	pub fn favorites(&self) -> &Favorites {
		&self.favorites
	}

	/// Words in insertion order.
	pub fn words(&self) -> &[String] {
		self.favorites.words()
	}
}
