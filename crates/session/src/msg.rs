//! Message bus between spawned tasks and the session's control thread.
//!
//! Timer and lookup tasks never touch session state. They send a
//! [`SessionMsg`] and the owner of the [`crate::Session`] applies messages one
//! at a time, so every state transition happens on a single logical thread.
//!
//! ```text
//! debounce timer ─┐
//!                 ├──► SessionMsg ──► Session::apply ──► state update + Dirty
//! lookup task ────┘
//! ```

use bitflags::bitflags;
use tokio::sync::mpsc;

use crate::debounce::SettleFired;
use crate::orchestrator::LookupDone;

/// Channel sender handed to spawned tasks.
pub type MsgSender = mpsc::UnboundedSender<SessionMsg>;

/// Channel receiver owned by the session.
pub type MsgReceiver = mpsc::UnboundedReceiver<SessionMsg>;

/// Creates a new message channel pair.
pub fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// Events produced by background work.
#[derive(Debug)]
pub enum SessionMsg {
	/// A debounce timer elapsed.
	Settled(SettleFired),
	/// A lookup finished, successfully or not.
	LookupDone(LookupDone),
}

bitflags! {
	/// Which parts of observable session state changed.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct Dirty: u8 {
		const QUERY = 1 << 0;
		const SEARCH = 1 << 1;
		const HISTORY = 1 << 2;
		const FAVORITES = 1 << 3;
		const THEME = 1 << 4;
		const NOTICE = 1 << 5;
	}
}

impl Dirty {
	pub const NONE: Self = Self::empty();

	pub const fn needs_redraw(self) -> bool {
		!self.is_empty()
	}
}
