//! Simulated authentication round trip. This is a deliberate stand-in for a
//! real request/response cycle while the site has no backend: it waits a
//! fixed delay and always succeeds, so there is no retry or error path.
//! Navigating away during the delay simply abandons the pending timer.

use gloo_timers::future::TimeoutFuture;

/// Fixed round-trip delay applied to every auth submission.
pub const AUTH_DELAY_MS: u32 = 1_500;

/// Resolves after [`AUTH_DELAY_MS`]. Cannot fail by construction.
pub async fn authenticate() {
    TimeoutFuture::new(AUTH_DELAY_MS).await;
}
