//! End-to-end lookups against a throwaway local HTTP responder.

use lexon_lookup::{FailureReason, HttpLookupClient, LookupClient};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves exactly one canned response and reports the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
	let addr = listener.local_addr().expect("local addr");
	let (seen_tx, seen_rx) = oneshot::channel();

	tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.expect("accept");
		let mut request = Vec::new();
		let mut buf = [0u8; 1024];
		while !request.windows(4).any(|w| w == b"\r\n\r\n") {
			let n = socket.read(&mut buf).await.expect("read");
			if n == 0 {
				break;
			}
			request.extend_from_slice(&buf[..n]);
		}
		let request = String::from_utf8_lossy(&request);
		let request_line = request.lines().next().unwrap_or_default().to_string();
		let _ = seen_tx.send(request_line);

		let response = format!(
			"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		);
		socket.write_all(response.as_bytes()).await.expect("write");
		socket.shutdown().await.ok();
	});

	(format!("http://{addr}/api/v2"), seen_rx)
}

#[tokio::test]
async fn success_maps_first_entry() {
	let body = r#"[{"word":"hello","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a greeting"}]}]},{"word":"hullo"}]"#;
	let (endpoint, seen) = serve_once("200 OK", body).await;
	let client = HttpLookupClient::new(&endpoint).unwrap();

	let entry = client.lookup("hello").await.unwrap();

	assert_eq!(entry.word, "hello");
	assert_eq!(entry.meanings[0].part_of_speech, "noun");
	assert_eq!(entry.meanings[0].definitions[0].text, "a greeting");
	assert_eq!(seen.await.unwrap(), "GET /api/v2/entries/en/hello HTTP/1.1");
}

#[rstest]
#[case("404 Not Found", r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":"Try again"}"#)]
#[case("500 Internal Server Error", "oops")]
#[tokio::test]
async fn error_status_is_not_found(#[case] status: &'static str, #[case] body: &'static str) {
	let (endpoint, seen) = serve_once(status, body).await;
	let client = HttpLookupClient::new(&endpoint).unwrap();

	assert_eq!(client.lookup("xyzzy").await, Err(FailureReason::NotFound));
	assert_eq!(seen.await.unwrap(), "GET /api/v2/entries/en/xyzzy HTTP/1.1");
}

#[tokio::test]
async fn malformed_body_is_transport_failure() {
	let (endpoint, _seen) = serve_once("200 OK", "{truncated").await;
	let client = HttpLookupClient::new(&endpoint).unwrap();

	assert!(matches!(client.lookup("hello").await, Err(FailureReason::Transport(_))));
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let client = HttpLookupClient::new(&format!("http://{addr}/api/v2")).unwrap();
	assert!(matches!(client.lookup("hello").await, Err(FailureReason::Transport(_))));
}

#[rstest]
#[case(".")]
#[case("..")]
#[tokio::test]
async fn dot_words_are_not_found_without_a_request(#[case] word: &str) {
	// Nothing listens here, so any request would be a transport failure.
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let client = HttpLookupClient::new(&format!("http://{addr}/api/v2")).unwrap();
	assert_eq!(client.lookup(word).await, Err(FailureReason::NotFound));
}
