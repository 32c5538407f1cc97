use std::sync::Arc;

use lexon_primitives::{Favorites, HISTORY_LIMIT, History, ThemePreference};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{KeyValueStore, Result, StoreError};

/// Logical keys written by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistKey {
	History,
	Favorites,
	Theme,
}

impl PersistKey {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::History => "history",
			Self::Favorites => "favorites",
			Self::Theme => "theme",
		}
	}
}

/// Typed view over a [`KeyValueStore`].
///
/// Loads never fail: a read error or an undecodable payload is logged and the
/// default is returned (empty history, empty favorites, light theme). Saves
/// report errors so the caller decides whether to surface them.
#[derive(Clone)]
pub struct PersistedStore {
	backend: Arc<dyn KeyValueStore>,
	history_limit: usize,
}

impl std::fmt::Debug for PersistedStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PersistedStore")
			.field("history_limit", &self.history_limit)
			.finish_non_exhaustive()
	}
}

impl PersistedStore {
	pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
		Self {
			backend,
			history_limit: HISTORY_LIMIT,
		}
	}

	/// Overrides the cap applied when loading history.
	#[must_use]
	pub fn with_history_limit(mut self, limit: usize) -> Self {
		self.history_limit = limit;
		self
	}

	pub fn load_history(&self) -> History {
		let words: Vec<String> = self.load_or_default(PersistKey::History);
		History::from_words(words, self.history_limit)
	}

	pub fn save_history(&self, history: &History) -> Result<()> {
		self.save(PersistKey::History, history.words())
	}

	pub fn load_favorites(&self) -> Favorites {
		let words: Vec<String> = self.load_or_default(PersistKey::Favorites);
		Favorites::from_words(words)
	}

	pub fn save_favorites(&self, favorites: &Favorites) -> Result<()> {
		self.save(PersistKey::Favorites, favorites.words())
	}

	pub fn load_theme(&self) -> ThemePreference {
		self.load_or_default(PersistKey::Theme)
	}

	pub fn save_theme(&self, theme: ThemePreference) -> Result<()> {
		self.save(PersistKey::Theme, &theme)
	}

	fn load_or_default<T: DeserializeOwned + Default>(&self, key: PersistKey) -> T {
		let raw = match self.backend.get(key.as_str()) {
			Ok(Some(raw)) => raw,
			Ok(None) => {
				debug!(key = key.as_str(), "store.load.absent");
				return T::default();
			}
			Err(error) => {
				warn!(key = key.as_str(), %error, "store.load.failed, using default");
				return T::default();
			}
		};

		serde_json::from_str(&raw).unwrap_or_else(|error| {
			warn!(key = key.as_str(), %error, "store.load.malformed, using default");
			T::default()
		})
	}

	fn save<T: Serialize + ?Sized>(&self, key: PersistKey, value: &T) -> Result<()> {
		let raw = serde_json::to_string(value).map_err(|error| StoreError::Encode { key: key.as_str(), error })?;
		self.backend.set(key.as_str(), &raw)?;
		debug!(key = key.as_str(), bytes = raw.len(), "store.save");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::MemoryStore;

	fn store_with(values: &[(&str, &str)]) -> (Arc<MemoryStore>, PersistedStore) {
		let backend = Arc::new(MemoryStore::with_values(values.iter().copied()));
		let store = PersistedStore::new(backend.clone());
		(backend, store)
	}

	#[test]
	fn empty_storage_yields_defaults() {
		let (_, store) = store_with(&[]);
		assert!(store.load_history().is_empty());
		assert!(store.load_favorites().is_empty());
		assert_eq!(store.load_theme(), ThemePreference::Light);
	}

	#[test]
	fn corrupt_storage_yields_defaults() {
		let (_, store) = store_with(&[("history", "{not json"), ("favorites", "42"), ("theme", "\"purple\"")]);
		assert!(store.load_history().is_empty());
		assert!(store.load_favorites().is_empty());
		assert_eq!(store.load_theme(), ThemePreference::Light);
	}

	#[test]
	fn round_trips_all_keys() {
		let (backend, store) = store_with(&[]);

		let mut history = History::default();
		history.record("cat");
		history.record("dog");
		store.save_history(&history).unwrap();

		let mut favorites = Favorites::default();
		favorites.toggle("serendipity");
		store.save_favorites(&favorites).unwrap();

		store.save_theme(ThemePreference::Dark).unwrap();

		assert_eq!(backend.raw("history").as_deref(), Some(r#"["dog","cat"]"#));
		assert_eq!(backend.raw("theme").as_deref(), Some(r#""dark""#));
		assert_eq!(store.load_history(), history);
		assert_eq!(store.load_favorites(), favorites);
		assert_eq!(store.load_theme(), ThemePreference::Dark);
	}

	#[test]
	fn loaded_history_is_normalised() {
		let (_, store) = store_with(&[("history", r#"["a","A","b","c"]"#)]);
		let history = store.with_history_limit(2).load_history();
		assert_eq!(history.words(), ["a", "b"]);
	}
}
