use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{KeyValueStore, Result, validate_key};

/// In-process store. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated with raw values, bypassing key validation.
	///
	/// Lets tests seed malformed payloads.
	pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			values: Mutex::new(values.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
		}
	}

	/// Returns a copy of the raw value under `key`.
	pub fn raw(&self, key: &str) -> Option<String> {
		self.values.lock().get(key).cloned()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		validate_key(key)?;
		Ok(self.values.lock().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		validate_key(key)?;
		self.values.lock().insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}
