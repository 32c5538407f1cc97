use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{KeyValueStore, Result, StoreError, validate_key};

/// Directory-backed store: each key lives in `<dir>/<key>.json`.
///
/// Writes go through a temporary file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	/// Creates a store rooted at `dir`. The directory is created on first write.
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_for(&self, key: &str) -> Result<PathBuf> {
		validate_key(key)?;
		Ok(self.dir.join(format!("{key}.json")))
	}
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
	move |error| StoreError::Io {
		path: path.to_path_buf(),
		error,
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;
		match std::fs::read_to_string(&path) {
			Ok(raw) => Ok(Some(raw)),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(io_err(&path)(e)),
		}
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		std::fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

		let mut tmp = NamedTempFile::new_in(&self.dir).map_err(io_err(&self.dir))?;
		tmp.write_all(value.as_bytes()).map_err(io_err(tmp.path()))?;
		tmp.persist(&path).map_err(|e| io_err(&path)(e.error))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_key_reads_as_none() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let store = FileStore::new(dir.path());
		assert!(store.get("history").unwrap().is_none());
	}

	#[test]
	fn set_then_get_round_trips() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let store = FileStore::new(dir.path().join("nested"));
		store.set("theme", "\"dark\"").unwrap();
		assert_eq!(store.get("theme").unwrap().as_deref(), Some("\"dark\""));
		assert!(dir.path().join("nested/theme.json").exists());

		store.set("theme", "\"light\"").unwrap();
		assert_eq!(store.get("theme").unwrap().as_deref(), Some("\"light\""));
	}

	#[test]
	fn rejects_path_like_keys() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let store = FileStore::new(dir.path());
		assert!(matches!(store.set("../escape", "x"), Err(StoreError::InvalidKey(_))));
		assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
	}
}
