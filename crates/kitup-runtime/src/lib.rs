//! Active side of the kitup installer.
//!
//! Everything here touches the outside world: command execution for
//! probing and orchestration, sysinfo queries, the git checkout, the
//! Compose invocations, and HTTP readiness polling. The pure logic it
//! feeds lives in `kitup-core`.

pub mod checks;
pub mod command;
pub mod compose;
pub mod readiness;
pub mod repo;
pub mod system;

// Re-export the operations the CLI drives
pub use checks::{ensure_daemon, gather_requirements};
pub use compose::{ComposeAction, ComposeOrchestrator};
pub use readiness::{health_client, wait_for, wait_with};
pub use repo::{CheckoutState, DEFAULT_CHECKOUT_DIR, REPO_URL, ensure_checkout};
pub use system::probe::{probe, probe_with_override};
