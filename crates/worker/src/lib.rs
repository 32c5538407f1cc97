//! Task spawning shared by the session core.
//!
//! Every background task is tagged with a [`TaskClass`] so spawn sites show up
//! uniformly in traces. All helpers must be called from within a Tokio runtime.

mod class;
mod spawn;

pub use class::TaskClass;
pub use spawn::{spawn, spawn_blocking, spawn_delayed};
