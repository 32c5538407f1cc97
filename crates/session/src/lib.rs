//! Search orchestration for the lexon dictionary client.
//!
//! A [`Session`] owns every piece of observable state and is driven from one
//! task. Typed input goes through the [`debounce`] scheduler, settled queries
//! become lookups in the [`orchestrator`], and history, favorites and theme are
//! mirrored to storage through an ordered writer ([`persist`]).
//!
//! Background work communicates only through [`SessionMsg`]; apply messages
//! with [`Session::drain_messages`] or [`Session::pump`] and redraw when the
//! returned [`Dirty`] flags ask for it.

pub mod config;
pub mod debounce;
pub mod favorites;
pub mod msg;
pub mod orchestrator;
pub mod persist;
pub mod session;
pub mod side_channel;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, SessionConfig};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceScheduler, Settle};
pub use favorites::FavoritesManager;
pub use msg::{Dirty, SessionMsg};
pub use orchestrator::{QueryTag, SearchOrchestrator, SearchState};
pub use persist::PersistHandle;
pub use session::{Intent, Session, SessionBuilder};
pub use side_channel::{AudioPlayer, Clipboard, NoAudio, NoClipboard, Notice, SideChannelError};
