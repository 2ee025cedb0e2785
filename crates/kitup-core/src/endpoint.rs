//! Service health endpoints polled after the stack starts.

/// n8n health endpoint; required for the install to count as a success.
pub const N8N_HEALTH_URL: &str = "http://localhost:5678/healthz";
/// Qdrant health endpoint; best effort, a timeout only degrades the run.
pub const QDRANT_HEALTH_URL: &str = "http://localhost:6333/healthz";

const N8N_TIMEOUT_SECS: u64 = 300;
const QDRANT_TIMEOUT_SECS: u64 = 120;
const POLL_INTERVAL_SECS: u64 = 5;

/// A health endpoint with its polling budget.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    /// Human-readable service name for diagnostics.
    pub service: String,
    pub url: String,
    pub timeout_secs: u64,
    pub poll_interval_secs: u64,
    /// Required endpoints turn a timeout into a fatal error;
    /// best-effort endpoints degrade to a warning.
    pub required: bool,
}

impl ServiceEndpoint {
    /// A required endpoint: timing out fails the installation.
    pub fn required(service: impl Into<String>, url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            service: service.into(),
            url: url.into(),
            timeout_secs,
            poll_interval_secs: POLL_INTERVAL_SECS,
            required: true,
        }
    }

    /// A best-effort endpoint: timing out only degrades the run.
    pub fn best_effort(
        service: impl Into<String>,
        url: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(service, url, timeout_secs)
        }
    }
}

/// Outcome of waiting on one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Ready,
    TimedOut,
}

/// The two endpoints this installer watches.
pub fn starter_kit_endpoints() -> Vec<ServiceEndpoint> {
    vec![
        ServiceEndpoint::required("n8n", N8N_HEALTH_URL, N8N_TIMEOUT_SECS),
        ServiceEndpoint::best_effort("Qdrant", QDRANT_HEALTH_URL, QDRANT_TIMEOUT_SECS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_kit_polls_n8n_strictly_and_qdrant_loosely() {
        let endpoints = starter_kit_endpoints();
        assert_eq!(endpoints.len(), 2);

        assert!(endpoints[0].required);
        assert_eq!(endpoints[0].timeout_secs, 300);
        assert!(endpoints[0].url.contains("5678"));

        assert!(!endpoints[1].required);
        assert_eq!(endpoints[1].timeout_secs, 120);
        assert!(endpoints[1].url.contains("6333"));
    }
}
