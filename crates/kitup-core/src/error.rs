//! Installer error taxonomy.
//!
//! Every failure path in the installer maps onto one of these kinds.
//! All of them are fatal except the optional readiness timeout, which
//! the driver degrades to a warning instead of constructing an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::version::Version;

/// Errors that abort an installation run.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The operating system could not be classified.
    #[error("unsupported platform: this operating system cannot be classified")]
    UnsupportedPlatform,

    /// A required external tool is not installed.
    #[error("{name} is not installed. {hint}")]
    ToolMissing { name: String, hint: String },

    /// A required external tool is older than the supported minimum.
    #[error("{name} {found} is too old (minimum supported version: {minimum})")]
    ToolVersionTooOld {
        name: String,
        found: Version,
        minimum: Version,
    },

    /// The container engine is installed but its daemon is not reachable.
    #[error(
        "the Docker daemon is not running. Start Docker Desktop (or `systemctl start docker`) and retry"
    )]
    DaemonNotRunning,

    /// The configuration file could not be written.
    #[error("cannot write configuration file {}: {reason}", path.display())]
    ConfigWriteError { path: PathBuf, reason: String },

    /// An external tool invocation failed.
    #[error("`{command}` failed: {detail}")]
    ExternalCommandFailed { command: String, detail: String },

    /// A required service did not come up within its budget.
    #[error("{service} did not become ready within {waited_secs}s")]
    ReadinessTimeout { service: String, waited_secs: u64 },

    /// `--update` was requested but there is nothing to update.
    #[error("no existing checkout at {}; run `kitup install` first", .0.display())]
    CheckoutMissing(PathBuf),
}

/// Result alias used throughout the installer.
pub type InstallResult<T> = Result<T, InstallError>;
