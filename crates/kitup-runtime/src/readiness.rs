//! HTTP readiness polling with bounded timeout.
//!
//! A service is ready when its health URL answers with a 2xx status;
//! the body is irrelevant. The polling loop is factored over an
//! injectable async check so tests run on tokio's paused clock with no
//! wall-time delay.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, info};

use kitup_core::{ServiceEndpoint, WaitOutcome};

/// Timeout for each individual health request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Client used for health polling.
pub fn health_client() -> reqwest::Result<Client> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Poll an endpoint until it answers or its budget runs out.
pub async fn wait_for(client: &Client, endpoint: &ServiceEndpoint) -> WaitOutcome {
    info!(
        service = %endpoint.service,
        url = %endpoint.url,
        budget_secs = endpoint.timeout_secs,
        "waiting for service"
    );
    wait_with(endpoint, || endpoint_healthy(client, &endpoint.url)).await
}

/// Bounded retry over an injectable check.
///
/// Checks immediately, so a pre-satisfied endpoint returns `Ready`
/// without a single sleep; otherwise sleeps the poll interval until
/// accumulated elapsed time reaches the timeout.
pub async fn wait_with<F, Fut>(endpoint: &ServiceEndpoint, mut check: F) -> WaitOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let interval = Duration::from_secs(endpoint.poll_interval_secs);
    let mut elapsed_secs = 0;

    loop {
        if check().await {
            return WaitOutcome::Ready;
        }
        if elapsed_secs >= endpoint.timeout_secs {
            return WaitOutcome::TimedOut;
        }
        sleep(interval).await;
        elapsed_secs += endpoint.poll_interval_secs;
    }
}

/// One liveness request: connection established and 2xx back.
async fn endpoint_healthy(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            debug!(url, status = %response.status(), "health check not ready");
            false
        }
        Err(e) => {
            debug!(url, error = %e, "health check failed, retrying");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn endpoint(timeout_secs: u64) -> ServiceEndpoint {
        ServiceEndpoint::required("svc", "http://unused.invalid/healthz", timeout_secs)
    }

    #[tokio::test(start_paused = true)]
    async fn ready_endpoint_returns_without_sleeping() {
        let start = tokio::time::Instant::now();
        let outcome = wait_with(&endpoint(10), || async { true }).await;

        assert_eq!(outcome, WaitOutcome::Ready);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn dead_endpoint_times_out_after_about_two_polls() {
        let polls = Cell::new(0u32);
        let start = tokio::time::Instant::now();

        // 10s budget, 5s interval: initial check plus two retries
        let outcome = wait_with(&endpoint(10), || {
            polls.set(polls.get() + 1);
            async { false }
        })
        .await;

        assert_eq!(outcome, WaitOutcome::TimedOut);
        assert_eq!(polls.get(), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn endpoint_becoming_ready_mid_wait_is_reported_ready() {
        let polls = Cell::new(0u32);
        let outcome = wait_with(&endpoint(300), || {
            polls.set(polls.get() + 1);
            let ready = polls.get() >= 3;
            async move { ready }
        })
        .await;

        assert_eq!(outcome, WaitOutcome::Ready);
        assert_eq!(polls.get(), 3);
    }
}
