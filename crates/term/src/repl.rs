//! Interactive loop: stdin lines in, rendered state out.
//!
//! Input lines and session messages are multiplexed on one task, so the
//! session is only ever touched from here. When input ends, whatever was
//! typed last is looked up immediately and the loop exits once it resolves.

use std::io::Write;
use std::ops::ControlFlow;

use lexon_session::{Dirty, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::line::{self, HELP, Line};
use crate::render::{self, Palette};

pub struct Repl<'a, W> {
	session: &'a mut Session,
	out: W,
	color: bool,
}

impl<'a, W: Write> Repl<'a, W> {
	pub fn new(session: &'a mut Session, out: W, color: bool) -> Self {
		Self { session, out, color }
	}

	pub async fn run<R>(mut self, input: R) -> anyhow::Result<()>
	where
		R: AsyncBufRead + Unpin,
	{
		let mut lines = input.lines();
		let mut input_open = true;

		loop {
			let flow = tokio::select! {
				line = lines.next_line(), if input_open => match line? {
					Some(line) => self.on_line(&line)?,
					None => {
						debug!("repl.input_closed");
						input_open = false;
						if self.session.is_settling() {
							let dirty = self.session.submit_now();
							self.show(dirty)?;
						}
						self.idle_flow()
					}
				},
				msg = self.session.next_message() => match msg {
					Some(msg) => {
						let dirty = self.session.apply(msg) | self.session.drain_messages();
						self.show(dirty)?;
						if input_open { ControlFlow::Continue(()) } else { self.idle_flow() }
					}
					None => ControlFlow::Break(()),
				},
			};
			if flow.is_break() {
				break;
			}
		}

		self.session.flush_persistence().await;
		Ok(())
	}

	/// Stops once input is closed and nothing is pending.
	fn idle_flow(&self) -> ControlFlow<()> {
		if self.session.is_settling() || self.session.state().is_loading() {
			ControlFlow::Continue(())
		} else {
			ControlFlow::Break(())
		}
	}

	fn on_line(&mut self, text: &str) -> std::io::Result<ControlFlow<()>> {
		match line::parse(text) {
			Line::Intent(intent) => {
				let dirty = self.session.handle_intent(intent);
				self.show(dirty)?;
			}
			Line::SetTheme(theme) => {
				let dirty = self.session.set_theme(theme);
				self.show(dirty)?;
			}
			Line::ShowHistory => {
				writeln!(self.out, "{}", render::render_list("history", self.session.history().words()))?;
			}
			Line::ShowFavorites => {
				writeln!(self.out, "{}", render::render_list("favorites", self.session.favorites().words()))?;
			}
			Line::Help => writeln!(self.out, "{HELP}")?,
			Line::Quit => return Ok(ControlFlow::Break(())),
			Line::Invalid(message) => writeln!(self.out, "{message}")?,
		}
		Ok(ControlFlow::Continue(()))
	}

	fn palette(&self) -> Palette {
		Palette::new(self.session.theme(), self.color)
	}

	fn show(&mut self, dirty: Dirty) -> std::io::Result<()> {
		if !dirty.needs_redraw() {
			return Ok(());
		}
		if dirty.contains(Dirty::SEARCH) {
			let favorite = self.session.current_word().is_some_and(|w| self.session.is_favorite(w));
			let text = render::render_state(self.session.state(), favorite, self.palette());
			if !text.is_empty() {
				writeln!(self.out, "{text}")?;
			}
		}
		if dirty.contains(Dirty::FAVORITES)
			&& let Some(word) = self.session.current_word()
		{
			let verb = if self.session.is_favorite(word) { "added to" } else { "removed from" };
			writeln!(self.out, "{word} {verb} favorites")?;
		}
		if dirty.contains(Dirty::HISTORY) && self.session.history().is_empty() {
			writeln!(self.out, "history cleared")?;
		}
		if dirty.contains(Dirty::THEME) {
			writeln!(self.out, "theme: {}", self.session.theme())?;
		}
		if dirty.contains(Dirty::NOTICE)
			&& let Some(notice) = self.session.take_notice()
		{
			writeln!(self.out, "{notice}")?;
		}
		self.out.flush()
	}
}
