//! Fire-and-forget effects outside the search pipeline: pronunciation audio
//! and clipboard writes.
//!
//! Neither effect changes session state. Failures are logged and dropped; the
//! only user-visible outcome is an optional [`Notice`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SideChannelError {
	#[error("{0} is not available")]
	Unsupported(&'static str),
	#[error("failed to launch `{command}`: {error}")]
	Spawn {
		command: String,
		#[source]
		error: std::io::Error,
	},
	#[error("clipboard write failed: {0}")]
	Clipboard(#[source] std::io::Error),
}

/// Starts playback of a pronunciation clip. Must not block on playback.
pub trait AudioPlayer: Send + Sync {
	fn play(&self, url: &str) -> Result<(), SideChannelError>;
}

/// Receives plain-text copies of definitions.
pub trait Clipboard: Send + Sync {
	fn set_text(&self, text: &str) -> Result<(), SideChannelError>;
}

/// Default player for sessions built without audio support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioPlayer for NoAudio {
	fn play(&self, _url: &str) -> Result<(), SideChannelError> {
		Err(SideChannelError::Unsupported("audio playback"))
	}
}

/// Default clipboard for sessions built without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
	fn set_text(&self, _text: &str) -> Result<(), SideChannelError> {
		Err(SideChannelError::Unsupported("clipboard"))
	}
}

/// Transient message for the user. Never an error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	NoPronunciationAudio,
	NoDefinitionToCopy,
	Copied,
}

impl Notice {
	pub const fn message(self) -> &'static str {
		match self {
			Self::NoPronunciationAudio => "No pronunciation audio available.",
			Self::NoDefinitionToCopy => "No definition to copy.",
			Self::Copied => "Definition copied.",
		}
	}
}

impl std::fmt::Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}
