//! Persistence for the lookup client's small lists.
//!
//! The durable substrate is a plain string store ([`KeyValueStore`]). Two
//! backends ship here: [`FileStore`] (one JSON file per key) and
//! [`MemoryStore`] (tests and ephemeral sessions). [`PersistedStore`] layers
//! typed load/save on top and never fails a load: absent or malformed data
//! yields the documented default.

pub mod error;
pub mod file;
pub mod memory;
pub mod persisted;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::{PersistKey, PersistedStore};

/// Durable key to string mapping.
///
/// Implementations must be safe to call from a blocking worker thread while
/// the control thread holds another handle.
pub trait KeyValueStore: Send + Sync {
	/// Returns the stored value, or `None` if the key was never written.
	fn get(&self, key: &str) -> Result<Option<String>>;

	/// Replaces the value stored under `key`.
	fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub(crate) fn validate_key(key: &str) -> Result<()> {
	let valid = !key.is_empty()
		&& key
			.bytes()
			.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
	if valid { Ok(()) } else { Err(StoreError::InvalidKey(key.to_owned())) }
}
