//! End-to-end prerequisite evaluation against a synthetic host.
//!
//! Note: these tests tolerate whatever tools the test host actually
//! has; assertions about real probing only check shape, never the
//! presence of docker itself.

use kitup_core::{
    GpuType, HostProfile, OperatingSystem, Severity, ToolRequirement, Version, evaluate,
    first_blocker,
};
use kitup_runtime::gather_requirements;

fn constrained_host() -> HostProfile {
    HostProfile {
        os: OperatingSystem::Linux,
        arch: "x86_64".to_string(),
        total_memory_gib: 2,
        available_disk_gib: 5,
        gpu: GpuType::None,
    }
}

#[test]
fn gathering_probes_without_panicking_on_any_host() {
    let requirements = gather_requirements();
    assert_eq!(requirements.len(), 3);
    for requirement in &requirements {
        // Detected versions, when present, must be orderable against the minimum
        if let Some(found) = &requirement.detected {
            let _ = *found >= requirement.min_version;
        }
    }
}

#[test]
fn constrained_host_yields_advisories_but_no_resource_failures() {
    // A host below both thresholds, with every tool present and current
    let requirements = vec![
        ToolRequirement::new("docker", Version::new(&[20, 10, 0]), "install docker")
            .with_detected(Some(Version::new(&[24, 0, 7]))),
        ToolRequirement::new("git", Version::new(&[2, 0, 0]), "install git")
            .with_detected(Some(Version::new(&[2, 43, 0]))),
    ];

    let report = evaluate(&requirements, &constrained_host());
    assert!(report.ok());
    assert_eq!(report.warnings, 2);
    assert!(
        report
            .details
            .iter()
            .filter(|d| d.severity == Severity::Warn)
            .all(|d| d.message.contains("recommended"))
    );
    assert!(first_blocker(&requirements).is_none());
}

#[test]
fn absent_engine_blocks_before_anything_else() {
    let requirements = vec![
        ToolRequirement::new("docker", Version::new(&[20, 10, 0]), "install docker"),
        ToolRequirement::new("git", Version::new(&[2, 0, 0]), "install git")
            .with_detected(Some(Version::new(&[2, 43, 0]))),
    ];

    let report = evaluate(&requirements, &constrained_host());
    assert_eq!(report.failed, 1);

    let blocker = first_blocker(&requirements).expect("missing engine must block");
    assert!(blocker.to_string().contains("docker"));
}
