//! Racing a future against a deadline with guaranteed timer release.

use std::future::Future;
use std::time::Duration;

/// Bound the wall-clock time an asynchronous operation may take.
///
/// Races `operation` against a deadline of `timeout`. Whichever side
/// finishes first determines the outcome:
///
/// - If `operation` settles first, its output (success or failure alike)
///   propagates unchanged and the deadline timer is cancelled.
/// - If the deadline elapses first, `on_timeout` is invoked and its output
///   becomes the race's outcome, again unchanged — this function never
///   wraps, classifies, or suppresses either side's failure.
///
/// The timer is released on every exit path: the losing branch is dropped
/// as soon as the race settles, so repeated calls never accumulate stale
/// timers in the runtime's time driver. Each call owns its own timer
/// exclusively; concurrent races share no state.
///
/// A `timeout` of zero is valid: the deadline is immediately ready, and
/// whichever side the scheduler polls ready first wins. Neither path leaks.
///
/// # Cancellation
///
/// Losing the race discards the race's *observation* of `operation`, which
/// for an owned future means dropping it. To let the underlying work run to
/// completion in the background regardless of the deadline, pass a
/// [`tokio::task::JoinHandle`]: dropping a join handle detaches the task
/// rather than aborting it.
///
/// # Examples
///
/// ```rust
/// use crosscut::time::with_timeout;
/// use std::time::Duration;
///
/// # async fn example() {
/// // Operation settles first: its result propagates.
/// let outcome = with_timeout(
///     async { Ok::<_, std::io::Error>("completed") },
///     Duration::from_millis(30),
///     || Err(std::io::Error::other("timed out")),
/// )
/// .await;
/// assert_eq!(outcome.unwrap(), "completed");
/// # }
/// ```
///
/// Detached background work via a join handle:
///
/// ```rust
/// use crosscut::time::with_timeout;
/// use std::time::Duration;
///
/// # async fn example() {
/// let handle = tokio::spawn(async {
///     // long-running work; keeps going even if the race times out
///     "finished"
/// });
///
/// let outcome = with_timeout(handle, Duration::from_millis(5), || Ok("timed out")).await;
/// # let _ = outcome;
/// # }
/// ```
pub async fn with_timeout<F, H>(operation: F, timeout: Duration, on_timeout: H) -> F::Output
where
    F: Future,
    H: FnOnce() -> F::Output,
{
    tokio::select! {
        output = operation => output,
        _ = tokio::time::sleep(timeout) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(?timeout, "deadline elapsed before operation settled");
            on_timeout()
        }
    }
}
