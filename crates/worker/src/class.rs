/// Execution classes used for observability of spawned work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Timers driven by user input (debounce).
	Interactive,
	/// Outbound requests to the dictionary service.
	Network,
	/// Blocking reads and writes against the persistence backend.
	IoBlocking,
}

impl TaskClass {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Network => "network",
			Self::IoBlocking => "io_blocking",
		}
	}
}
