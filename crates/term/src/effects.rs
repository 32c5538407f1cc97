//! Terminal implementations of the session's audio and clipboard hooks.

use std::io::{IsTerminal, Write};
use std::process::Stdio;

use base64::Engine;
use lexon_session::{AudioPlayer, Clipboard, SideChannelError};
use tracing::debug;

/// Runs a user-configured player with the clip URL as its last argument.
///
/// The child is not awaited; Tokio reaps it in the background.
#[derive(Debug, Clone)]
pub struct CommandAudioPlayer {
	program: String,
	args: Vec<String>,
}

impl CommandAudioPlayer {
	/// Splits `command` on whitespace. Returns `None` for a blank command.
	pub fn parse(command: &str) -> Option<Self> {
		let mut parts = command.split_whitespace().map(str::to_owned);
		let program = parts.next()?;
		Some(Self {
			program,
			args: parts.collect(),
		})
	}
}

impl AudioPlayer for CommandAudioPlayer {
	fn play(&self, url: &str) -> Result<(), SideChannelError> {
		debug!(program = %self.program, url, "audio.spawn");
		tokio::process::Command::new(&self.program)
			.args(&self.args)
			.arg(url)
			.stdin(Stdio::null())
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.spawn()
			.map(drop)
			.map_err(|error| SideChannelError::Spawn {
				command: self.program.clone(),
				error,
			})
	}
}

/// Fallback when no player is configured: show the clip URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintAudio;

impl AudioPlayer for PrintAudio {
	fn play(&self, url: &str) -> Result<(), SideChannelError> {
		println!("pronunciation: {url}");
		Ok(())
	}
}

/// Sets the terminal's clipboard with an OSC 52 escape sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
	fn set_text(&self, text: &str) -> Result<(), SideChannelError> {
		let mut stdout = std::io::stdout().lock();
		if !stdout.is_terminal() {
			return Err(SideChannelError::Unsupported("clipboard outside a terminal"));
		}
		stdout
			.write_all(osc52_sequence(text).as_bytes())
			.and_then(|()| stdout.flush())
			.map_err(SideChannelError::Clipboard)
	}
}

pub fn osc52_sequence(text: &str) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
	format!("\x1b]52;c;{encoded}\x07")
}
