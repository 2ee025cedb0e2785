//! Check host prerequisites without installing anything.

use anyhow::Result;

use kitup_core::{DeploymentProfile, GpuType, Severity, evaluate, first_blocker};
use kitup_runtime::system::gpu::docker_advertises_nvidia_runtime;
use kitup_runtime::{ensure_daemon, gather_requirements, probe};

use super::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};

/// Execute the check command.
///
/// Probes the host, evaluates the tool requirements, prints the report
/// and returns an error when a required tool is missing or outdated so
/// the process exits non-zero.
pub fn execute() -> Result<()> {
    println!("{BOLD}{BLUE}Checking host and prerequisites...{RESET}\n");

    let profile = probe()?;
    println!(
        "Host: {} / {}, {} GiB RAM, {} GiB free disk, GPU: {}",
        profile.os, profile.arch, profile.total_memory_gib, profile.available_disk_gib, profile.gpu
    );
    println!(
        "Deployment profile: {}\n",
        DeploymentProfile::from_gpu(profile.gpu)
    );

    let requirements = gather_requirements();
    let report = evaluate(&requirements, &profile);
    for detail in &report.details {
        match detail.severity {
            Severity::Pass => println!("  {GREEN}✓{RESET} {}", detail.message),
            Severity::Warn => println!("  {YELLOW}⚠{RESET} {}", detail.message),
            Severity::Fail => println!("  {RED}✗{RESET} {}", detail.message),
        }
    }
    println!(
        "\n{} passed, {} failed, {} warnings",
        report.passed, report.failed, report.warnings
    );

    if let Some(blocker) = first_blocker(&requirements) {
        return Err(blocker.into());
    }

    ensure_daemon()?;
    println!("  {GREEN}✓{RESET} Docker daemon is running");

    if profile.gpu == GpuType::Nvidia && !docker_advertises_nvidia_runtime() {
        println!(
            "  {YELLOW}⚠{RESET} NVIDIA GPU detected but Docker does not expose the nvidia runtime; install the NVIDIA Container Toolkit for GPU acceleration"
        );
    }

    println!("\n{BOLD}Ready to install. Run: {BLUE}kitup install{RESET}");
    Ok(())
}
