//! Integration tests for the deadline race.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crosscut::error::StructuredError;
use crosscut::time::with_timeout;
use tokio::time::{Instant, sleep};
use tokio_test::{assert_err, assert_ok};

async fn settle_after(delay: Duration) -> Result<&'static str, StructuredError> {
    sleep(delay).await;
    Ok("operation completed")
}

#[tokio::test(start_paused = true)]
async fn operation_result_wins_a_generous_deadline() {
    let outcome = with_timeout(
        settle_after(Duration::from_millis(10)),
        Duration::from_millis(30),
        || Err(StructuredError::new("timed out")),
    )
    .await;

    assert_eq!(outcome.unwrap(), "operation completed");
}

#[tokio::test(start_paused = true)]
async fn timeout_handler_wins_a_tight_deadline() {
    let outcome = with_timeout(
        settle_after(Duration::from_millis(10)),
        Duration::from_millis(5),
        || Err(StructuredError::builder("timed out").code(75).build()),
    )
    .await;

    let err = outcome.unwrap_err();
    assert_eq!(err.message(), "timed out");
    assert_eq!(err.code(), 75);
}

#[tokio::test(start_paused = true)]
async fn failing_operation_propagates_unchanged() {
    let outcome = with_timeout(
        async {
            sleep(Duration::from_millis(5)).await;
            Err::<&str, _>(StructuredError::builder("operation failed").code(-1).build())
        },
        Duration::from_millis(30),
        || Err(StructuredError::new("timed out")),
    )
    .await;

    let err = outcome.unwrap_err();
    assert_eq!(err.message(), "operation failed");
    assert_eq!(err.code(), -1);
}

#[tokio::test(start_paused = true)]
async fn failing_timeout_handler_propagates_unchanged() {
    let outcome = with_timeout(
        settle_after(Duration::from_secs(60)),
        Duration::from_millis(5),
        || Err(StructuredError::builder("handler failed").code(3).build()),
    )
    .await;

    assert_eq!(outcome.unwrap_err().message(), "handler failed");
}

#[tokio::test(start_paused = true)]
async fn losing_operation_is_discarded_when_the_deadline_fires() {
    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    let dropped = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(Arc::clone(&dropped));

    let outcome = with_timeout(
        async move {
            let _guard = guard;
            std::future::pending::<&str>().await
        },
        Duration::from_millis(5),
        || "timed out",
    )
    .await;

    assert_eq!(outcome, "timed out");
    assert!(
        dropped.load(Ordering::SeqCst),
        "the race must stop observing the losing operation once it settles"
    );
}

#[tokio::test(start_paused = true)]
async fn a_join_handle_keeps_running_past_a_lost_race() {
    let finished = Arc::new(AtomicBool::new(false));
    let finished_in_task = Arc::clone(&finished);

    let handle = tokio::spawn(async move {
        sleep(Duration::from_millis(20)).await;
        finished_in_task.store(true, Ordering::SeqCst);
        "operation completed"
    });

    let outcome = with_timeout(handle, Duration::from_millis(5), || Ok("timed out")).await;
    assert_eq!(outcome.unwrap(), "timed out");
    assert!(!finished.load(Ordering::SeqCst));

    // The detached task settles on its own after the race is over.
    sleep(Duration::from_millis(30)).await;
    assert!(finished.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn repeated_races_release_their_timers() {
    let start = Instant::now();

    for i in 0..1000u32 {
        // Alternate winners; every iteration schedules a long deadline or a
        // long operation that must not outlive the race.
        if i % 2 == 0 {
            let outcome = with_timeout(
                settle_after(Duration::from_millis(1)),
                Duration::from_secs(60),
                || Err(StructuredError::new("timed out")),
            )
            .await;
            tokio_test::assert_ok!(outcome);
        } else {
            let outcome = with_timeout(
                settle_after(Duration::from_secs(60)),
                Duration::from_millis(1),
                || Err(StructuredError::new("timed out")),
            )
            .await;
            tokio_test::assert_err!(outcome);
        }
    }

    // Under the paused clock, time only advances to pending timers. If any
    // losing 60s timer survived its race, the elapsed virtual time would
    // jump far past the ~1s the winning sides account for.
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "stale timers held the clock: {:?}",
        start.elapsed()
    );

    // A fresh short sleep still fires promptly.
    let before = Instant::now();
    sleep(Duration::from_millis(1)).await;
    assert!(before.elapsed() < Duration::from_millis(100));
}
