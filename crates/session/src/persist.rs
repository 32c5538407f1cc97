//! Ordered, non-blocking persistence writes.
//!
//! Mutations on the control thread enqueue a snapshot on an unbounded channel
//! and return immediately. One writer task drains the queue in order and runs
//! each write on the blocking pool, so the store always ends up holding the
//! latest snapshot even when saves are issued back to back. Failed writes are
//! logged and dropped.

use lexon_primitives::{Favorites, History, ThemePreference};
use lexon_store::PersistedStore;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

#[derive(Debug)]
enum PersistOp {
	History(History),
	Favorites(Favorites),
	Theme(ThemePreference),
	Flush(oneshot::Sender<()>),
}

/// Cloneable handle to the session's writer task.
#[derive(Debug, Clone)]
pub struct PersistHandle {
	tx: mpsc::UnboundedSender<PersistOp>,
}

impl PersistHandle {
	/// Spawns the writer task. Must be called within a Tokio runtime.
	///
	/// The task exits once every handle has been dropped and the queue is empty.
	pub fn spawn(store: PersistedStore) -> Self {
		let (tx, mut rx) = mpsc::unbounded_channel::<PersistOp>();
		lexon_worker::spawn(lexon_worker::TaskClass::IoBlocking, async move {
			while let Some(op) = rx.recv().await {
				if let PersistOp::Flush(ack) = op {
					let _ = ack.send(());
					continue;
				}
				let store = store.clone();
				let write = lexon_worker::spawn_blocking(lexon_worker::TaskClass::IoBlocking, move || write_op(&store, op));
				if let Err(error) = write.await {
					warn!(%error, "persist.writer.join_failed");
				}
			}
		});
		Self { tx }
	}

	pub fn save_history(&self, history: &History) {
		self.send(PersistOp::History(history.clone()));
	}

	pub fn save_favorites(&self, favorites: &Favorites) {
		self.send(PersistOp::Favorites(favorites.clone()));
	}

	pub fn save_theme(&self, theme: ThemePreference) {
		self.send(PersistOp::Theme(theme));
	}

	/// Resolves once every write queued before this call has been applied.
	pub async fn flush(&self) {
		let (ack_tx, ack_rx) = oneshot::channel();
		self.send(PersistOp::Flush(ack_tx));
		let _ = ack_rx.await;
	}

	fn send(&self, op: PersistOp) {
		if self.tx.send(op).is_err() {
			warn!("persist.writer.closed, dropping write");
		}
	}
}

fn write_op(store: &PersistedStore, op: PersistOp) {
	let (key, result) = match op {
		PersistOp::History(history) => ("history", store.save_history(&history)),
		PersistOp::Favorites(favorites) => ("favorites", store.save_favorites(&favorites)),
		PersistOp::Theme(theme) => ("theme", store.save_theme(theme)),
		PersistOp::Flush(ack) => {
			let _ = ack.send(());
			return;
		}
	};
	if let Err(error) = result {
		warn!(key, %error, "persist.write_failed");
	}
}
