//! Test doubles shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use lexon_lookup::{FailureReason, LookupClient};
use lexon_primitives::{Definition, Entry, Meaning, Phonetic};
use parking_lot::Mutex;
use tokio::sync::oneshot;

type Reply = Result<Entry, FailureReason>;

/// Lookup whose calls stay pending until the test resolves them.
#[derive(Default)]
pub(crate) struct GatedLookup {
	gates: Mutex<HashMap<String, VecDeque<oneshot::Sender<Reply>>>>,
	calls: Mutex<Vec<String>>,
}

impl GatedLookup {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Completes the oldest pending call for `word`. Returns false if none is pending.
	pub(crate) fn resolve(&self, word: &str, reply: Reply) -> bool {
		let sender = self.gates.lock().get_mut(word).and_then(VecDeque::pop_front);
		match sender {
			Some(tx) => tx.send(reply).is_ok(),
			None => false,
		}
	}

	pub(crate) fn calls(&self) -> Vec<String> {
		self.calls.lock().clone()
	}
}

#[async_trait]
impl LookupClient for GatedLookup {
	async fn lookup(&self, word: &str) -> Reply {
		let (tx, rx) = oneshot::channel();
		self.calls.lock().push(word.to_owned());
		self.gates.lock().entry(word.to_owned()).or_default().push_back(tx);
		rx.await.unwrap_or_else(|_| Err(FailureReason::Transport("gate dropped".into())))
	}
}

/// Single-meaning, single-definition entry.
pub(crate) fn entry(word: &str, part_of_speech: &str, definition: &str) -> Entry {
	Entry {
		word: word.to_owned(),
		phonetic: None,
		phonetics: Vec::new(),
		origin: None,
		meanings: vec![Meaning {
			part_of_speech: part_of_speech.to_owned(),
			definitions: vec![Definition {
				text: definition.to_owned(),
				example: None,
				synonyms: Vec::new(),
			}],
			synonyms: Vec::new(),
		}],
	}
}

pub(crate) fn with_audio(mut entry: Entry, url: &str) -> Entry {
	entry.phonetics.push(Phonetic {
		text: Some("/x/".into()),
		audio: Some(url.to_owned()),
	});
	entry
}

/// Lets spawned tasks on the current-thread runtime make progress.
pub(crate) async fn run_tasks() {
	for _ in 0..8 {
		tokio::task::yield_now().await;
	}
}
