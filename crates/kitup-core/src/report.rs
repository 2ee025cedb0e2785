//! Prerequisite check report.
//!
//! `evaluate` is pure: the runtime crate gathers detected versions and
//! the host profile, and this module turns them into an ordered report
//! plus an optional first fatal error.

use crate::error::InstallError;
use crate::host::HostProfile;
use crate::requirement::ToolRequirement;

/// Severity of a single check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Pass,
    Warn,
    Fail,
}

/// One line of the prerequisite report, in check order.
#[derive(Debug, Clone)]
pub struct CheckDetail {
    pub severity: Severity,
    pub message: String,
}

/// Aggregated prerequisite check outcome.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub details: Vec<CheckDetail>,
}

impl CheckReport {
    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Pass => self.passed += 1,
            Severity::Warn => self.warnings += 1,
            Severity::Fail => self.failed += 1,
        }
        self.details.push(CheckDetail { severity, message });
    }

    /// True when no required check failed. Warnings never block.
    pub fn ok(&self) -> bool {
        self.failed == 0
    }
}

/// Evaluate tool requirements and resource thresholds against a host.
///
/// Missing or outdated tools fail; low memory or disk only warn.
pub fn evaluate(requirements: &[ToolRequirement], profile: &HostProfile) -> CheckReport {
    let mut report = CheckReport::default();

    for requirement in requirements {
        match &requirement.detected {
            None => report.push(
                Severity::Fail,
                format!("{} is not installed", requirement.name),
            ),
            Some(found) if *found < requirement.min_version => report.push(
                Severity::Fail,
                format!(
                    "{} {} is too old (minimum {})",
                    requirement.name, found, requirement.min_version
                ),
            ),
            Some(found) => report.push(
                Severity::Pass,
                format!("{} {} (minimum {})", requirement.name, found, requirement.min_version),
            ),
        }
    }

    for advisory in profile.resource_advisories() {
        report.push(Severity::Warn, advisory);
    }

    report
}

/// First fatal error among the requirements, in check order.
///
/// Distinct from `evaluate`: the report is for display, this is what
/// the driver propagates.
pub fn first_blocker(requirements: &[ToolRequirement]) -> Option<InstallError> {
    requirements.iter().find_map(|requirement| {
        if requirement.satisfied() {
            return None;
        }
        Some(match &requirement.detected {
            None => InstallError::ToolMissing {
                name: requirement.name.clone(),
                hint: requirement.install_hint.clone(),
            },
            Some(found) => InstallError::ToolVersionTooOld {
                name: requirement.name.clone(),
                found: found.clone(),
                minimum: requirement.min_version.clone(),
            },
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{GpuType, OperatingSystem};

    fn host(memory_gib: u64, disk_gib: u64) -> HostProfile {
        HostProfile {
            os: OperatingSystem::Linux,
            arch: "x86_64".to_string(),
            total_memory_gib: memory_gib,
            available_disk_gib: disk_gib,
            gpu: GpuType::None,
        }
    }

    fn requirement(name: &str, min: &str, detected: Option<&str>) -> ToolRequirement {
        ToolRequirement::new(name, min.parse().unwrap(), format!("install {name}"))
            .with_detected(detected.map(|v| v.parse().unwrap()))
    }

    #[test]
    fn missing_engine_fails_the_report() {
        let requirements = vec![requirement("docker", "20.10.0", None)];
        let report = evaluate(&requirements, &host(16, 100));
        assert_eq!(report.failed, 1);
        assert!(!report.ok());

        let blocker = first_blocker(&requirements).unwrap();
        assert!(matches!(blocker, InstallError::ToolMissing { .. }));
    }

    #[test]
    fn outdated_tool_is_a_distinct_failure() {
        let requirements = vec![requirement("docker", "20.10.0", Some("19.3.8"))];
        let blocker = first_blocker(&requirements).unwrap();
        assert!(matches!(blocker, InstallError::ToolVersionTooOld { .. }));
    }

    #[test]
    fn low_resources_only_warn() {
        let requirements = vec![
            requirement("docker", "20.10.0", Some("24.0.7")),
            requirement("git", "2.0.0", Some("2.43.0")),
        ];
        // 2 GiB RAM and 5 GiB disk: advisories, never failures
        let report = evaluate(&requirements, &host(2, 5));
        assert_eq!(report.failed, 0);
        assert_eq!(report.passed, 2);
        assert_eq!(report.warnings, 2);
        assert!(report.ok());
        assert!(first_blocker(&requirements).is_none());
    }

    #[test]
    fn details_preserve_check_order() {
        let requirements = vec![
            requirement("docker", "20.10.0", Some("24.0.7")),
            requirement("docker compose", "2.0.0", None),
        ];
        let report = evaluate(&requirements, &host(16, 100));
        assert_eq!(report.details.len(), 2);
        assert_eq!(report.details[0].severity, Severity::Pass);
        assert_eq!(report.details[1].severity, Severity::Fail);
    }
}
