//! Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`crate::KeyValueStore`] backends.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// File that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Keys are restricted to `[a-z0-9_-]+` so they map to file names.
	#[error("invalid store key: {0:?}")]
	InvalidKey(String),

	/// A typed value could not be encoded.
	#[error("failed to encode value for {key}: {error}")]
	Encode {
		key: &'static str,
		error: serde_json::Error,
	},
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
