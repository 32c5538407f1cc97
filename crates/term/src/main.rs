//! lexon: terminal dictionary client.

mod cli;
mod effects;
mod line;
mod render;
mod repl;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, ThemeAction};
use effects::{CommandAudioPlayer, Osc52Clipboard, PrintAudio};
use lexon_lookup::HttpLookupClient;
use lexon_primitives::ThemePreference;
use lexon_session::{AudioPlayer, Dirty, SearchState, Session, SessionConfig};
use lexon_store::{FileStore, PersistedStore};
use render::Palette;
use repl::Repl;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = load_config(&cli)?;
	let mut session = build_session(&config)?;
	let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

	match cli.command.unwrap_or(Command::Repl) {
		Command::Repl => {
			if std::io::stdin().is_terminal() {
				println!("{}", line::HELP);
			}
			let stdin = tokio::io::BufReader::new(tokio::io::stdin());
			Repl::new(&mut session, std::io::stdout(), color).run(stdin).await?;
		}
		Command::Define { word } => define(&mut session, &word, color).await?,
		Command::History { clear } => {
			if clear {
				session.clear_history();
				println!("history cleared");
			} else {
				println!("{}", render::render_list("history", session.history().words()));
			}
		}
		Command::Favorites => println!("{}", render::render_list("favorites", session.favorites().words())),
		Command::Favorite { word } => {
			anyhow::ensure!(!word.trim().is_empty(), "cannot favorite an empty word");
			session.toggle_favorite_word(&word);
			let verb = if session.is_favorite(word.trim()) { "added to" } else { "removed from" };
			println!("{} {verb} favorites", word.trim());
		}
		Command::Theme { action } => {
			match action {
				Some(ThemeAction::Light) => session.set_theme(ThemePreference::Light),
				Some(ThemeAction::Dark) => session.set_theme(ThemePreference::Dark),
				Some(ThemeAction::Toggle) => session.toggle_theme(),
				None => Dirty::NONE,
			};
			println!("{}", session.theme());
		}
	}

	session.flush_persistence().await;
	Ok(())
}

/// One-shot lookup. Exits with an error when the word is not found.
async fn define(session: &mut Session, word: &str, color: bool) -> anyhow::Result<()> {
	session.set_query(word);
	session.submit_now();
	while session.state().is_loading() {
		session.pump().await;
	}
	match session.state() {
		SearchState::Success { entry, word } => {
			let palette = Palette::new(session.theme(), color);
			print!("{}", render::render_entry(entry, session.is_favorite(word), palette));
			Ok(())
		}
		SearchState::Failure { .. } => anyhow::bail!("{}", session.state().error_message().unwrap_or_default()),
		SearchState::Idle | SearchState::Loading { .. } => anyhow::bail!("nothing to look up"),
	}
}

fn load_config(cli: &Cli) -> anyhow::Result<SessionConfig> {
	let mut config = match cli.config.clone().or_else(SessionConfig::default_path) {
		Some(path) => SessionConfig::load(&path)?,
		None => SessionConfig::default(),
	};
	cli.apply_overrides(&mut config);
	Ok(config)
}

fn build_session(config: &SessionConfig) -> anyhow::Result<Session> {
	let data_dir = config.resolved_data_dir()?;
	let lookup = HttpLookupClient::new(&config.endpoint)
		.with_context(|| format!("invalid endpoint {}", config.endpoint))?;
	info!(data_dir = %data_dir.display(), endpoint = %lookup.endpoint(), "lexon.start");
	let store = PersistedStore::new(Arc::new(FileStore::new(data_dir)));
	let audio: Arc<dyn AudioPlayer> = match config.audio_player.as_deref().and_then(CommandAudioPlayer::parse) {
		Some(player) => Arc::new(player),
		None => Arc::new(PrintAudio),
	};

	Ok(Session::builder(Arc::new(lookup), store)
		.debounce(config.debounce())
		.history_limit(config.history_limit)
		.audio_player(audio)
		.clipboard(Arc::new(Osc52Clipboard))
		.build())
}

/// `-v` filter: debug for every workspace crate, warn for dependencies.
const VERBOSE_FILTER: &str = "lexon=debug,lexon_session=debug,lexon_lookup=debug,lexon_store=debug,lexon_worker=debug,warn";

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let default_filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new(VERBOSE_FILTER)
			} else {
				EnvFilter::new("warn")
			}
		})
	};

	// LEXON_LOG_DIR keeps logs out of the interactive output.
	if let Some(log_dir) = std::env::var_os("LEXON_LOG_DIR").map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("lexon.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry()
				.with(default_filter())
				.with(file_layer)
				.init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(default_filter())
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
