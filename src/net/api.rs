//! Simulated post endpoint.
//!
//! Stands in for `POST /posts`: after a fixed delay it answers with a freshly
//! generated id. It never fails and never sees the post body.
//!
//! Client-side (wasm32): the delay is a `gloo-timers` future on the browser
//! event loop. Native (tests): `tokio::time::sleep`, so tests can run on
//! paused virtual time.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::ApiResponse;
use crate::util::id;

/// Default simulated network latency.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);

/// Submit a post and wait for the simulated response.
pub async fn submit_post(latency: Duration) -> ApiResponse {
    sleep(latency).await;
    ApiResponse { id: id::generate() }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
