//! Core domain for the kitup installer.
//!
//! This crate holds the pure side of the installer: host and profile
//! types, version comparison, the prerequisite report, the `.env`
//! configuration model, and the error taxonomy. Nothing in here spawns
//! a process or talks to the network; that lives in `kitup-runtime`.

pub mod endpoint;
pub mod env_file;
pub mod error;
pub mod host;
pub mod profile;
pub mod report;
pub mod requirement;
pub mod version;

// Re-export commonly used types for convenience
pub use endpoint::{ServiceEndpoint, WaitOutcome, starter_kit_endpoints};
pub use env_file::{EnsureOutcome, EnvironmentConfig, ensure_env_file, generate_credential};
pub use error::{InstallError, InstallResult};
pub use host::{GpuType, HostProfile, OperatingSystem};
pub use profile::DeploymentProfile;
pub use report::{CheckDetail, CheckReport, Severity, evaluate, first_blocker};
pub use requirement::ToolRequirement;
pub use version::Version;
