//! Prerequisite gathering for required external tools.
//!
//! Detection only; nothing here installs anything. The pure
//! requirement evaluation lives in `kitup_core::report`.

use kitup_core::{InstallError, InstallResult, ToolRequirement, Version};

use crate::command::{probe_output, probe_succeeds};

/// Probe the three required tools and record what was found.
pub fn gather_requirements() -> Vec<ToolRequirement> {
    vec![
        ToolRequirement::new(
            "docker",
            Version::new(&[20, 10, 0]),
            "Install Docker Desktop or Docker Engine: https://docs.docker.com/get-docker/",
        )
        .with_detected(docker_version()),
        ToolRequirement::new(
            "docker compose",
            Version::new(&[2, 0, 0]),
            "Install the Docker Compose plugin: https://docs.docker.com/compose/install/",
        )
        .with_detected(compose_version()),
        ToolRequirement::new(
            "git",
            Version::new(&[2, 0, 0]),
            "Install git: https://git-scm.com/downloads",
        )
        .with_detected(git_version()),
    ]
}

/// Fatal when the engine is installed but its daemon is unreachable.
///
/// Deliberately a different error kind from a version mismatch: the
/// remediation is "start the daemon", not "upgrade".
pub fn ensure_daemon() -> InstallResult<()> {
    if probe_succeeds("docker", &["info"]) {
        Ok(())
    } else {
        Err(InstallError::DaemonNotRunning)
    }
}

fn docker_version() -> Option<Version> {
    // "Docker version 24.0.7, build afdd53b"
    probe_output("docker", &["--version"]).and_then(|out| Version::extract(&out))
}

fn compose_version() -> Option<Version> {
    // "--short" prints just "2.23.0" on plugin installs
    probe_output("docker", &["compose", "version", "--short"])
        .and_then(|out| Version::extract(&out))
}

fn git_version() -> Option<Version> {
    // "git version 2.43.0"
    probe_output("git", &["--version"]).and_then(|out| Version::extract(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_cover_engine_compose_and_git() {
        let requirements = gather_requirements();
        let names: Vec<&str> = requirements.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["docker", "docker compose", "git"]);
    }

    #[test]
    fn every_requirement_carries_an_install_hint() {
        for requirement in gather_requirements() {
            assert!(requirement.install_hint.contains("Install"));
        }
    }
}
