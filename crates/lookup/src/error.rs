use thiserror::Error;

/// Message shown for every failed lookup, whatever the cause.
pub const NOT_FOUND_MESSAGE: &str = "Word not found. Please try another word.";

/// Why a lookup produced no entry.
///
/// The two causes are kept apart for logging, but
/// [`FailureReason::user_message`] renders them identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
	/// The service answered with a non-success status or no entries.
	#[error("word not found")]
	NotFound,
	/// Network fault or undecodable body.
	#[error("transport failure: {0}")]
	Transport(String),
}

impl FailureReason {
	pub const fn user_message(&self) -> &'static str {
		NOT_FOUND_MESSAGE
	}
}

/// Errors constructing an [`crate::HttpLookupClient`].
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("invalid endpoint URL: {0}")]
	InvalidEndpoint(#[from] url::ParseError),

	/// The endpoint cannot carry path segments (e.g. `mailto:`).
	#[error("endpoint cannot be used as a base URL: {0}")]
	NotABase(String),

	#[error("failed to build HTTP client: {0}")]
	Build(#[from] reqwest::Error),
}
