use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::TaskClass;

/// Spawns an async task on the current runtime.
pub fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), "worker.spawn");
	tokio::spawn(fut)
}

/// Spawns blocking work on the runtime's blocking pool.
pub fn spawn_blocking<F, R>(class: TaskClass, f: F) -> JoinHandle<R>
where
	F: FnOnce() -> R + Send + 'static,
	R: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), "worker.spawn_blocking");
	tokio::task::spawn_blocking(f)
}

/// Spawns `fut` to run once `delay` has elapsed.
///
/// Aborting the returned handle before the delay elapses guarantees `fut`
/// never runs.
pub fn spawn_delayed<F>(class: TaskClass, delay: Duration, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), delay_ms = delay.as_millis() as u64, "worker.spawn_delayed");
	tokio::spawn(async move {
		tokio::time::sleep(delay).await;
		fut.await
	})
}
