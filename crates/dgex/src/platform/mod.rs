//! Platform-specific timing utilities.
//!
//! Timers come from different places on each target:
//!
//! - **Desktop**: `tokio::time` on the runtime Dioxus desktop starts
//! - **Web**: `gloo-timers` futures backed by `setTimeout`
//!
//! Callers write the same code for both and only ever await these helpers.

use std::future::Future;

/// Suspends the current task for `ms` milliseconds.
///
/// Used by the counter animation as its frame clock.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Suspends the current task for `ms` milliseconds.
///
/// Web version: resolves from a `setTimeout` callback.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Runs `fut` to completion unless `secs` seconds pass first.
///
/// Returns `None` on timeout; the future is dropped at that point.
///
/// # Examples
///
/// ```ignore
/// let response = with_timeout(REQUEST_TIMEOUT_SECS, request.send())
///     .await
///     .ok_or(BackendError::Timeout(REQUEST_TIMEOUT_SECS))?;
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub async fn with_timeout<F: Future>(secs: u64, fut: F) -> Option<F::Output> {
    tokio::time::timeout(std::time::Duration::from_secs(secs), fut)
        .await
        .ok()
}

/// Runs `fut` to completion unless `secs` seconds pass first.
///
/// Web version: races the future against a `setTimeout` timer.
#[cfg(target_arch = "wasm32")]
pub async fn with_timeout<F: Future>(secs: u64, fut: F) -> Option<F::Output> {
    use futures::future::{select, Either};

    let millis = u32::try_from(secs.saturating_mul(1000)).unwrap_or(u32::MAX);
    let timer = gloo_timers::future::TimeoutFuture::new(millis);
    futures::pin_mut!(fut);
    futures::pin_mut!(timer);

    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

/// Milliseconds on a monotonic clock, for animation sampling.
pub fn now_ms() -> f64 {
    thread_local! {
        static ORIGIN: instant::Instant = instant::Instant::now();
    }
    ORIGIN.with(|origin| origin.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_completes() {
        let result = with_timeout(1, async { 42 }).await;
        assert_eq!(result, Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_with_timeout_expires() {
        let result = with_timeout(1, futures::future::pending::<()>()).await;
        assert_eq!(result, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_clock() {
        let before = tokio::time::Instant::now();
        sleep_ms(16).await;
        assert!(before.elapsed() >= std::time::Duration::from_millis(16));
    }

    #[test]
    fn test_now_ms_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }
}
