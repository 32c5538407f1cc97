//! Search state machine.
//!
//! ```text
//!            settle(Clear)                      settle(Query w)
//!   * ───────────────────► Idle        * ─────────────────────► Loading(w)
//!
//!   Loading(w) ──lookup ok (current tag)──► Success(w, entry)   + history
//!   Loading(w) ──lookup err (current tag)─► Failure(w, reason)
//! ```
//!
//! Each lookup is tagged with a [`QueryTag`]. Results are committed only when
//! their tag equals the tag of the live `Loading` state; anything else is a
//! superseded request and is dropped without touching state. In-flight
//! requests are never cancelled.

use std::sync::Arc;

use lexon_lookup::{FailureReason, LookupClient};
use lexon_primitives::{Entry, History};
use tracing::debug;

use crate::debounce::Settle;
use crate::msg::{Dirty, MsgSender, SessionMsg};
use crate::persist::PersistHandle;

/// Authoritative result state for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
	#[default]
	Idle,
	Loading {
		word: String,
	},
	Success {
		word: String,
		entry: Entry,
	},
	Failure {
		word: String,
		reason: FailureReason,
	},
}

impl SearchState {
	/// The word this state was produced for, if any.
	pub fn word(&self) -> Option<&str> {
		match self {
			Self::Idle => None,
			Self::Loading { word } | Self::Success { word, .. } | Self::Failure { word, .. } => Some(word),
		}
	}

	pub fn entry(&self) -> Option<&Entry> {
		match self {
			Self::Success { entry, .. } => Some(entry),
			_ => None,
		}
	}

	pub const fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}

	/// User-facing error text for failure states.
	pub fn error_message(&self) -> Option<&'static str> {
		match self {
			Self::Failure { reason, .. } => Some(reason.user_message()),
			_ => None,
		}
	}

	pub const fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading { .. } => "loading",
			Self::Success { .. } => "success",
			Self::Failure { .. } => "failure",
		}
	}
}

/// Supersession tag: the query a lookup was issued for.
///
/// `seq` distinguishes repeated submissions of the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryTag {
	pub seq: u64,
	pub word: String,
}

/// Completion message for a lookup task.
#[derive(Debug)]
pub struct LookupDone {
	pub tag: QueryTag,
	pub result: Result<Entry, FailureReason>,
}

/// Owns search state and the history list.
pub struct SearchOrchestrator {
	lookup: Arc<dyn LookupClient>,
	state: SearchState,
	current: Option<QueryTag>,
	seq: u64,
	history: History,
	persist: PersistHandle,
	msg_tx: MsgSender,
}

impl std::fmt::Debug for SearchOrchestrator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchOrchestrator")
			.field("state", &self.state.label())
			.field("current", &self.current)
			.field("history_len", &self.history.len())
			.finish()
	}
}

impl SearchOrchestrator {
	pub fn new(lookup: Arc<dyn LookupClient>, history: History, persist: PersistHandle, msg_tx: MsgSender) -> Self {
		Self {
			lookup,
			state: SearchState::Idle,
			current: None,
			seq: 0,
			history,
			persist,
			msg_tx,
		}
	}

	pub fn state(&self) -> &SearchState {
		&self.state
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	/// Tag of the lookup whose result may still commit.
	pub fn current_tag(&self) -> Option<&QueryTag> {
		self.current.as_ref()
	}

	/// Applies a settle event. Must be called within a Tokio runtime.
	pub fn settle(&mut self, settle: Settle) -> Dirty {
		match settle {
			Settle::Clear => {
				self.current = None;
				if self.state == SearchState::Idle {
					return Dirty::NONE;
				}
				debug!(from = self.state.label(), "search.clear");
				self.state = SearchState::Idle;
				Dirty::SEARCH
			}
			Settle::Query(word) => {
				self.begin_lookup(word);
				Dirty::SEARCH
			}
		}
	}

	fn begin_lookup(&mut self, word: String) {
		self.seq = self.seq.wrapping_add(1);
		let tag = QueryTag { seq: self.seq, word: word.clone() };
		debug!(seq = tag.seq, word = %tag.word, "search.loading");

		self.current = Some(tag.clone());
		self.state = SearchState::Loading { word };

		let lookup = self.lookup.clone();
		let tx = self.msg_tx.clone();
		lexon_worker::spawn(lexon_worker::TaskClass::Network, async move {
			let result = lookup.lookup(&tag.word).await;
			let _ = tx.send(SessionMsg::LookupDone(LookupDone { tag, result }));
		});
	}

	/// Commits a lookup result if its tag is still current.
	pub fn apply_lookup_done(&mut self, done: LookupDone) -> Dirty {
		if self.current.as_ref() != Some(&done.tag) {
			debug!(seq = done.tag.seq, word = %done.tag.word, "search.stale_result");
			return Dirty::NONE;
		}
		self.current = None;
		let word = done.tag.word;

		match done.result {
			Ok(entry) => {
				debug!(word = %word, meanings = entry.meanings.len(), "search.success");
				self.history.record(&word);
				self.persist.save_history(&self.history);
				self.state = SearchState::Success { word, entry };
				Dirty::SEARCH | Dirty::HISTORY
			}
			Err(reason) => {
				debug!(word = %word, %reason, "search.failure");
				self.state = SearchState::Failure { word, reason };
				Dirty::SEARCH
			}
		}
	}

	/// Empties history and persists the change.
	pub fn clear_history(&mut self) -> Dirty {
		if self.history.is_empty() {
			return Dirty::NONE;
		}
		self.history.clear();
		self.persist.save_history(&self.history);
		Dirty::HISTORY
	}
}
