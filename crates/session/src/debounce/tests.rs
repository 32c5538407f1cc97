use pretty_assertions::assert_eq;

use super::*;
use crate::msg::{self, MsgReceiver};

fn scheduler() -> (DebounceScheduler, MsgReceiver) {
	let (tx, rx) = msg::channel();
	(DebounceScheduler::new(DEFAULT_DEBOUNCE, tx), rx)
}

/// Applies every queued fire and returns the settles that survived.
fn drain(scheduler: &mut DebounceScheduler, rx: &mut MsgReceiver) -> Vec<Settle> {
	let mut out = Vec::new();
	while let Ok(msg) = rx.try_recv() {
		let SessionMsg::Settled(fired) = msg else {
			panic!("unexpected message {msg:?}");
		};
		out.extend(scheduler.apply_fired(fired));
	}
	out
}

async fn sleep_ms(ms: u64) {
	tokio::time::sleep(Duration::from_millis(ms)).await;
	tokio::task::yield_now().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn rapid_inputs_coalesce_to_last_text() {
	let (mut debounce, mut rx) = scheduler();

	for text in ["h", "he", "hel", "hell"] {
		debounce.on_input(text);
		sleep_ms(100).await;
	}
	debounce.on_input("  hello ");
	sleep_ms(599).await;
	assert!(drain(&mut debounce, &mut rx).is_empty());

	sleep_ms(2).await;
	assert_eq!(drain(&mut debounce, &mut rx), vec![Settle::Query("hello".into())]);
	assert!(!debounce.is_pending());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn coalescing_holds_for_varied_gaps() {
	let patterns: [&[u64]; 4] = [&[0, 0, 0], &[599, 599], &[1, 300, 598, 10], &[450; 6]];
	for gaps in patterns {
		let (mut debounce, mut rx) = scheduler();
		for (i, gap) in gaps.iter().enumerate() {
			debounce.on_input(format!("word{i}"));
			sleep_ms(*gap).await;
		}
		debounce.on_input("final");
		sleep_ms(650).await;
		assert_eq!(drain(&mut debounce, &mut rx), vec![Settle::Query("final".into())], "gaps {gaps:?}");
	}
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn spaced_inputs_each_settle() {
	let (mut debounce, mut rx) = scheduler();

	debounce.on_input("cat");
	sleep_ms(700).await;
	debounce.on_input("dog");
	sleep_ms(700).await;

	assert_eq!(
		drain(&mut debounce, &mut rx),
		vec![Settle::Query("cat".into()), Settle::Query("dog".into())]
	);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn nothing_is_emitted_synchronously() {
	let (mut debounce, mut rx) = scheduler();
	debounce.on_input("cat");
	assert!(rx.try_recv().is_err());
	assert!(debounce.is_pending());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn blank_input_settles_as_clear() {
	let (mut debounce, mut rx) = scheduler();
	debounce.on_input("   ");
	sleep_ms(601).await;
	assert_eq!(drain(&mut debounce, &mut rx), vec![Settle::Clear]);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn cancel_suppresses_emission() {
	let (mut debounce, mut rx) = scheduler();
	debounce.on_input("cat");
	debounce.cancel();
	sleep_ms(1_000).await;
	assert!(rx.try_recv().is_err());
	assert!(!debounce.is_pending());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn stale_token_is_ignored_and_keeps_live_timer() {
	let (mut debounce, _rx) = scheduler();
	debounce.on_input("old");
	debounce.on_input("new");

	let stale = SettleFired {
		token: 1,
		text: "old".into(),
	};
	assert_eq!(debounce.apply_fired(stale), None);
	assert!(debounce.is_pending());

	let live = SettleFired {
		token: 2,
		text: "new".into(),
	};
	assert_eq!(debounce.apply_fired(live), Some(Settle::Query("new".into())));
}

#[test]
fn settle_classifies_input() {
	assert_eq!(Settle::from_input(""), Settle::Clear);
	assert_eq!(Settle::from_input(" \t"), Settle::Clear);
	assert_eq!(Settle::from_input(" Dog "), Settle::Query("Dog".into()));
}

proptest::proptest! {
	#[test]
	fn settle_classification_matches_trimmed_text(text in "[ \\ta-zA-Z]{0,12}") {
		match Settle::from_input(&text) {
			Settle::Clear => proptest::prop_assert!(text.trim().is_empty()),
			Settle::Query(word) => {
				proptest::prop_assert_eq!(word.as_str(), text.trim());
				proptest::prop_assert!(!word.is_empty());
			}
		}
	}
}
