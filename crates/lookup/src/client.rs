//! HTTP client for the dictionary service.

use async_trait::async_trait;
use lexon_primitives::Entry;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::wire::parse_entries;
use crate::{ClientError, FailureReason};

/// Public Free Dictionary API base.
pub const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2";

/// One outbound lookup per call.
#[async_trait]
pub trait LookupClient: Send + Sync {
	async fn lookup(&self, word: &str) -> Result<Entry, FailureReason>;
}

/// reqwest-backed [`LookupClient`] issuing `GET {endpoint}/entries/en/{word}`.
///
/// No request timeout is configured; a hung connection stays pending for as
/// long as the transport allows.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
	client: Client,
	endpoint: Url,
}

impl HttpLookupClient {
	pub fn new(endpoint: &str) -> Result<Self, ClientError> {
		let endpoint = Url::parse(endpoint)?;
		if endpoint.cannot_be_a_base() {
			return Err(ClientError::NotABase(endpoint.to_string()));
		}

		let client = Client::builder()
			.user_agent(concat!("lexon/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self { client, endpoint })
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Builds the request URL. `word` becomes a single escaped path segment.
	///
	/// Returns `None` for `.` and `..`: URL parsing resolves them, escaped or
	/// not, as dot segments, so no request can name them.
	pub fn entry_url(&self, word: &str) -> Option<Url> {
		if matches!(word, "." | "..") {
			return None;
		}
		let mut url = self.endpoint.clone();
		url.path_segments_mut().ok()?.pop_if_empty().extend(["entries", "en", word]);
		Some(url)
	}
}

#[async_trait]
impl LookupClient for HttpLookupClient {
	async fn lookup(&self, word: &str) -> Result<Entry, FailureReason> {
		let Some(url) = self.entry_url(word) else {
			debug!(word, "lookup.unaddressable_word");
			return Err(FailureReason::NotFound);
		};
		debug!(word, %url, "lookup.request");

		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(|e| FailureReason::Transport(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			debug!(word, %status, "lookup.not_found");
			return Err(FailureReason::NotFound);
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| FailureReason::Transport(e.to_string()))?;
		parse_entries(&body)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("hello", "https://api.dictionaryapi.dev/api/v2/entries/en/hello")]
	#[case("ice cream", "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream")]
	#[case("AC/DC", "https://api.dictionaryapi.dev/api/v2/entries/en/AC%2FDC")]
	#[case("what?", "https://api.dictionaryapi.dev/api/v2/entries/en/what%3F")]
	#[case("café", "https://api.dictionaryapi.dev/api/v2/entries/en/caf%C3%A9")]
	#[case("...", "https://api.dictionaryapi.dev/api/v2/entries/en/...")]
	#[case("a.b", "https://api.dictionaryapi.dev/api/v2/entries/en/a.b")]
	fn entry_url_escapes_word(#[case] word: &str, #[case] expected: &str) {
		let client = HttpLookupClient::new(DEFAULT_ENDPOINT).unwrap();
		assert_eq!(client.entry_url(word).as_ref().map(Url::as_str), Some(expected));
	}

	#[rstest]
	#[case(".")]
	#[case("..")]
	fn dot_segments_have_no_url(#[case] word: &str) {
		let client = HttpLookupClient::new(DEFAULT_ENDPOINT).unwrap();
		assert_eq!(client.entry_url(word), None);
	}

	#[test]
	fn trailing_slash_endpoint_is_normalised() {
		let client = HttpLookupClient::new("http://localhost:8080/api/v2/").unwrap();
		assert_eq!(
			client.entry_url("cat").map(String::from).as_deref(),
			Some("http://localhost:8080/api/v2/entries/en/cat")
		);
	}

	#[test]
	fn rejects_unusable_endpoints() {
		assert!(matches!(HttpLookupClient::new("not a url"), Err(ClientError::InvalidEndpoint(_))));
		assert!(matches!(HttpLookupClient::new("mailto:someone@example.com"), Err(ClientError::NotABase(_))));
	}

	#[test]
	fn failures_share_one_user_message() {
		assert_eq!(FailureReason::NotFound.user_message(), FailureReason::Transport("reset".into()).user_message());
		assert_eq!(FailureReason::NotFound.user_message(), "Word not found. Please try another word.");
	}
}
