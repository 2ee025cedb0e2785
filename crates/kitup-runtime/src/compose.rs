//! Compose orchestration: profile flags and pull/up/down invocations.

use std::path::PathBuf;

use tracing::info;

use kitup_core::{DeploymentProfile, InstallResult};

use crate::command::run_passthrough;

/// Actions the orchestrator drives `docker compose` through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    Pull,
    Up,
    Down,
}

impl ComposeAction {
    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Pull => &["pull"],
            Self::Up => &["up", "-d"],
            Self::Down => &["down"],
        }
    }
}

/// Drives `docker compose` for one checkout and one profile.
///
/// No retries here: readiness polling owns the waiting, and a failed
/// Compose invocation aborts the run.
#[derive(Debug, Clone)]
pub struct ComposeOrchestrator {
    project_dir: PathBuf,
    profile: DeploymentProfile,
}

impl ComposeOrchestrator {
    pub fn new(project_dir: impl Into<PathBuf>, profile: DeploymentProfile) -> Self {
        Self {
            project_dir: project_dir.into(),
            profile,
        }
    }

    pub fn profile(&self) -> DeploymentProfile {
        self.profile
    }

    /// Argument vector for one action. The default profile omits the
    /// `--profile` flag entirely (see `DeploymentProfile::flag`).
    fn args(&self, action: ComposeAction) -> Vec<&'static str> {
        let mut args = vec!["compose"];
        if let Some(flag) = self.profile.flag() {
            args.push("--profile");
            args.push(flag);
        }
        args.extend_from_slice(action.args());
        args
    }

    /// Run one Compose action; any failure is fatal for the run.
    pub async fn apply(&self, action: ComposeAction) -> InstallResult<()> {
        let args = self.args(action);
        info!(profile = %self.profile, ?action, "invoking docker compose");
        run_passthrough("docker", &args, Some(&self.project_dir)).await
    }

    /// The destructive teardown command, for printing only.
    ///
    /// Never executed by kitup itself: removing volumes deletes user
    /// data, so the operator runs it by hand.
    pub fn teardown_hint(&self) -> String {
        match self.profile.flag() {
            Some(flag) => format!("docker compose --profile {flag} down -v"),
            None => "docker compose down -v".to_string(),
        }
    }
}
