//! The session: sole owner of query, search, history, favorites and theme.
//!
//! Presentation code feeds [`Intent`]s in and reads state back through the
//! accessors. Background completions arrive as [`SessionMsg`]s and must be
//! applied through [`Session::apply`], [`Session::drain_messages`] or
//! [`Session::pump`] on the same task that owns the session.

use std::sync::Arc;
use std::time::Duration;

use lexon_lookup::LookupClient;
use lexon_primitives::{Entry, Favorites, History, ThemePreference};
use lexon_store::PersistedStore;
use tracing::{debug, warn};

use crate::debounce::{DEFAULT_DEBOUNCE, DebounceScheduler, Settle};
use crate::favorites::FavoritesManager;
use crate::msg::{self, Dirty, MsgReceiver, SessionMsg};
use crate::orchestrator::{SearchOrchestrator, SearchState};
use crate::persist::PersistHandle;
use crate::side_channel::{AudioPlayer, Clipboard, NoAudio, NoClipboard, Notice};

/// User actions the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
	/// The input text changed.
	SetQuery(String),
	/// The clear button: empty the input and drop the shown result now.
	ClearQuery,
	ToggleTheme,
	/// Toggle the word currently shown as a result.
	ToggleFavorite,
	ClearHistory,
	/// A history, favorite or synonym click. Replaces the input text.
	SelectWord(String),
	PlayPronunciation,
	CopyDefinition {
		meaning: usize,
		definition: usize,
	},
}

/// Configures and spawns a [`Session`].
pub struct SessionBuilder {
	lookup: Arc<dyn LookupClient>,
	store: PersistedStore,
	debounce: Duration,
	history_limit: Option<usize>,
	audio: Arc<dyn AudioPlayer>,
	clipboard: Arc<dyn Clipboard>,
}

impl SessionBuilder {
	pub fn new(lookup: Arc<dyn LookupClient>, store: PersistedStore) -> Self {
		Self {
			lookup,
			store,
			debounce: DEFAULT_DEBOUNCE,
			history_limit: None,
			audio: Arc::new(NoAudio),
			clipboard: Arc::new(NoClipboard),
		}
	}

	pub fn debounce(mut self, delay: Duration) -> Self {
		self.debounce = delay;
		self
	}

	pub fn history_limit(mut self, limit: usize) -> Self {
		self.history_limit = Some(limit);
		self
	}

	pub fn audio_player(mut self, audio: Arc<dyn AudioPlayer>) -> Self {
		self.audio = audio;
		self
	}

	pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
		self.clipboard = clipboard;
		self
	}

	/// Loads persisted state and starts the writer task.
	///
	/// Must be called within a Tokio runtime.
	pub fn build(self) -> Session {
		let store = match self.history_limit {
			Some(limit) => self.store.with_history_limit(limit),
			None => self.store,
		};
		let history = store.load_history();
		let favorites = store.load_favorites();
		let theme = store.load_theme();
		debug!(
			history = history.len(),
			favorites = favorites.len(),
			theme = theme.as_str(),
			"session.loaded"
		);

		let (msg_tx, msg_rx) = msg::channel();
		let persist = PersistHandle::spawn(store);

		Session {
			query: String::new(),
			debounce: DebounceScheduler::new(self.debounce, msg_tx.clone()),
			search: SearchOrchestrator::new(self.lookup, history, persist.clone(), msg_tx),
			favorites: FavoritesManager::new(favorites, persist.clone()),
			theme,
			notice: None,
			audio: self.audio,
			clipboard: self.clipboard,
			persist,
			msg_rx,
		}
	}
}

pub struct Session {
	query: String,
	debounce: DebounceScheduler,
	search: SearchOrchestrator,
	favorites: FavoritesManager,
	theme: ThemePreference,
	notice: Option<Notice>,
	audio: Arc<dyn AudioPlayer>,
	clipboard: Arc<dyn Clipboard>,
	persist: PersistHandle,
	msg_rx: MsgReceiver,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("query", &self.query)
			.field("debounce", &self.debounce)
			.field("search", &self.search)
			.field("favorites", &self.favorites.words().len())
			.field("theme", &self.theme)
			.field("notice", &self.notice)
			.finish()
	}
}

impl Session {
	pub fn builder(lookup: Arc<dyn LookupClient>, store: PersistedStore) -> SessionBuilder {
		SessionBuilder::new(lookup, store)
	}

	pub fn handle_intent(&mut self, intent: Intent) -> Dirty {
		match intent {
			Intent::SetQuery(text) => self.set_query(text),
			Intent::ClearQuery => self.clear_query(),
			Intent::ToggleTheme => self.toggle_theme(),
			Intent::ToggleFavorite => self.toggle_favorite(),
			Intent::ClearHistory => self.clear_history(),
			Intent::SelectWord(word) => self.select_word(word),
			Intent::PlayPronunciation => self.play_pronunciation(),
			Intent::CopyDefinition { meaning, definition } => self.copy_definition(meaning, definition),
		}
	}

	/// Replaces the input text and restarts the debounce window.
	pub fn set_query(&mut self, text: impl Into<String>) -> Dirty {
		self.query = text.into();
		self.debounce.on_input(self.query.clone());
		Dirty::QUERY
	}

	/// Empties the input, cancels any pending settle and returns to idle.
	pub fn clear_query(&mut self) -> Dirty {
		self.query.clear();
		self.debounce.cancel();
		Dirty::QUERY | self.search.settle(Settle::Clear)
	}

	pub fn select_word(&mut self, word: impl Into<String>) -> Dirty {
		self.set_query(word)
	}

	/// Settles the current input immediately, skipping the quiet period.
	pub fn submit_now(&mut self) -> Dirty {
		self.debounce.cancel();
		self.search.settle(Settle::from_input(&self.query))
	}

	/// Toggles the word of the displayed result. No-op without a result.
	pub fn toggle_favorite(&mut self) -> Dirty {
		let Some(word) = self.current_word().map(str::to_owned) else {
			return Dirty::NONE;
		};
		self.favorites.toggle(&word)
	}

	pub fn toggle_favorite_word(&mut self, word: &str) -> Dirty {
		self.favorites.toggle(word)
	}

	pub fn toggle_theme(&mut self) -> Dirty {
		self.set_theme(self.theme.toggled())
	}

	pub fn set_theme(&mut self, theme: ThemePreference) -> Dirty {
		if self.theme == theme {
			return Dirty::NONE;
		}
		debug!(from = self.theme.as_str(), to = theme.as_str(), "theme.set");
		self.theme = theme;
		self.persist.save_theme(theme);
		Dirty::THEME
	}

	pub fn clear_history(&mut self) -> Dirty {
		self.search.clear_history()
	}

	/// Plays the first pronunciation clip of the displayed entry.
	pub fn play_pronunciation(&mut self) -> Dirty {
		let Some(entry) = self.search.state().entry() else {
			return Dirty::NONE;
		};
		match entry.pronunciation_audio() {
			Some(url) => {
				if let Err(error) = self.audio.play(url) {
					warn!(url, %error, "audio.play_failed");
				}
				Dirty::NONE
			}
			None => self.post_notice(Notice::NoPronunciationAudio),
		}
	}

	/// Copies one definition of the displayed entry as plain text.
	pub fn copy_definition(&mut self, meaning: usize, definition: usize) -> Dirty {
		let Some(text) = self
			.search
			.state()
			.entry()
			.and_then(|entry| entry.definition(meaning, definition))
			.map(|def| def.to_plain_text())
		else {
			return self.post_notice(Notice::NoDefinitionToCopy);
		};
		match self.clipboard.set_text(&text) {
			Ok(()) => self.post_notice(Notice::Copied),
			Err(error) => {
				warn!(meaning, definition, %error, "clipboard.write_failed");
				Dirty::NONE
			}
		}
	}

	fn post_notice(&mut self, notice: Notice) -> Dirty {
		self.notice = Some(notice);
		Dirty::NOTICE
	}

	/// Applies one background message.
	pub fn apply(&mut self, msg: SessionMsg) -> Dirty {
		match msg {
			SessionMsg::Settled(fired) => match self.debounce.apply_fired(fired) {
				Some(settle) => self.search.settle(settle),
				None => Dirty::NONE,
			},
			SessionMsg::LookupDone(done) => self.search.apply_lookup_done(done),
		}
	}

	/// Applies every message already queued without waiting.
	pub fn drain_messages(&mut self) -> Dirty {
		let mut dirty = Dirty::NONE;
		while let Ok(msg) = self.msg_rx.try_recv() {
			dirty |= self.apply(msg);
		}
		dirty
	}

	/// Waits for the next background message.
	///
	/// The session holds a sender itself, so this only returns `None` if the
	/// channel was closed externally.
	pub async fn next_message(&mut self) -> Option<SessionMsg> {
		self.msg_rx.recv().await
	}

	/// Waits for one message, applies it, then drains whatever else is queued.
	pub async fn pump(&mut self) -> Dirty {
		let Some(msg) = self.next_message().await else {
			return Dirty::NONE;
		};
		self.apply(msg) | self.drain_messages()
	}

	/// Resolves once every persistence write issued so far has been applied.
	pub async fn flush_persistence(&self) {
		self.persist.flush().await;
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn state(&self) -> &SearchState {
		self.search.state()
	}

	pub fn entry(&self) -> Option<&Entry> {
		self.search.state().entry()
	}

	/// Word of the displayed result, if a lookup succeeded.
	pub fn current_word(&self) -> Option<&str> {
		match self.search.state() {
			SearchState::Success { word, .. } => Some(word),
			_ => None,
		}
	}

	pub fn history(&self) -> &History {
		self.search.history()
	}

	pub fn favorites(&self) -> &Favorites {
		self.favorites.favorites()
	}

	pub fn is_favorite(&self, word: &str) -> bool {
		self.favorites.contains(word)
	}

	pub fn theme(&self) -> ThemePreference {
		self.theme
	}

	/// True while typed input is waiting out the quiet period.
	pub fn is_settling(&self) -> bool {
		self.debounce.is_pending()
	}

	pub fn take_notice(&mut self) -> Option<Notice> {
		self.notice.take()
	}
}
