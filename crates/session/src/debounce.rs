//! Debounced conversion of keystrokes into settle events.
//!
//! Every [`DebounceScheduler::on_input`] aborts the live timer and starts a new
//! one carrying a fresh token. When a timer elapses it sends
//! [`SessionMsg::Settled`]; the session hands that back to
//! [`DebounceScheduler::apply_fired`], which only honours the token of the
//! live timer. A timer that fired just before being replaced is therefore
//! dropped even if its message was already queued.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::msg::{MsgSender, SessionMsg};

/// Quiet period before input is considered settled.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Outcome of a settled input window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle {
	/// The input was blank: drop any shown result.
	Clear,
	/// Look up this trimmed word.
	Query(String),
}

impl Settle {
	/// Classifies raw input text.
	pub fn from_input(text: &str) -> Self {
		match text.trim() {
			"" => Self::Clear,
			word => Self::Query(word.to_owned()),
		}
	}
}

/// Payload sent when a debounce timer elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleFired {
	pub token: u64,
	pub text: String,
}

struct PendingSettle {
	handle: JoinHandle<()>,
	token: u64,
}

/// Owns the single cancellable debounce timer.
pub struct DebounceScheduler {
	delay: Duration,
	pending: Option<PendingSettle>,
	seq: u64,
	msg_tx: MsgSender,
}

impl std::fmt::Debug for DebounceScheduler {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DebounceScheduler")
			.field("delay", &self.delay)
			.field("pending_token", &self.pending.as_ref().map(|p| p.token))
			.field("seq", &self.seq)
			.finish()
	}
}

impl DebounceScheduler {
	pub fn new(delay: Duration, msg_tx: MsgSender) -> Self {
		Self {
			delay,
			pending: None,
			seq: 0,
			msg_tx,
		}
	}

	/// Restarts the quiet period with `text` as the candidate to settle.
	///
	/// Never emits synchronously. Must be called within a Tokio runtime.
	pub fn on_input(&mut self, text: impl Into<String>) {
		self.cancel();
		self.seq = self.seq.wrapping_add(1);
		let token = self.seq;
		let text = text.into();
		let tx = self.msg_tx.clone();

		let handle = lexon_worker::spawn_delayed(lexon_worker::TaskClass::Interactive, self.delay, async move {
			let _ = tx.send(SessionMsg::Settled(SettleFired { token, text }));
		});
		self.pending = Some(PendingSettle { handle, token });
	}

	/// Drops the live timer, if any, without emitting.
	pub fn cancel(&mut self) {
		if let Some(pending) = self.pending.take() {
			pending.handle.abort();
		}
	}

	/// Returns true while a timer is live.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Validates a fired timer against the live token.
	///
	/// Returns the settle event for the live timer and `None` for stale ones.
	pub fn apply_fired(&mut self, fired: SettleFired) -> Option<Settle> {
		match &self.pending {
			Some(pending) if pending.token == fired.token => {}
			_ => {
				debug!(token = fired.token, "debounce.stale_fire");
				return None;
			}
		}
		self.pending = None;
		let settle = Settle::from_input(&fired.text);
		debug!(token = fired.token, ?settle, "debounce.settled");
		Some(settle)
	}
}

impl Drop for DebounceScheduler {
	fn drop(&mut self) {
		self.cancel();
	}
}

#[cfg(test)]
mod tests;
