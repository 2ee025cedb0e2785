//! Host profile construction.

use std::path::PathBuf;

use tracing::debug;

use kitup_core::{GpuType, HostProfile, InstallError, InstallResult, OperatingSystem};

use super::gpu::detect_gpu;
use super::resources::{available_disk_gib, total_memory_gib};

/// Probe the host once and return an immutable profile.
///
/// Reads OS facilities only and never mutates anything. The single
/// failure mode is an operating system that cannot be classified;
/// scarce memory or disk never block the probe.
pub fn probe() -> InstallResult<HostProfile> {
    let os = OperatingSystem::current();
    if os == OperatingSystem::Unknown {
        return Err(InstallError::UnsupportedPlatform);
    }

    let arch = std::env::consts::ARCH.to_string();
    let gpu = detect_gpu(os, &arch);
    let workdir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

    let profile = HostProfile {
        os,
        arch,
        total_memory_gib: total_memory_gib(),
        available_disk_gib: available_disk_gib(&workdir),
        gpu,
    };
    debug!(?profile, "host probe complete");
    Ok(profile)
}

/// Probe the host, then apply a GPU override from the command line.
///
/// The override replaces the detected GPU type entirely; everything
/// else still comes from the probe.
pub fn probe_with_override(gpu_override: Option<GpuType>) -> InstallResult<HostProfile> {
    let mut profile = probe()?;
    if let Some(gpu) = gpu_override {
        debug!(detected = %profile.gpu, forced = %gpu, "GPU type forced by flag");
        profile.gpu = gpu;
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_succeeds_on_supported_platforms() {
        let profile = probe().unwrap();
        assert_ne!(profile.os, OperatingSystem::Unknown);
        assert!(!profile.arch.is_empty());
    }

    #[test]
    fn override_replaces_detected_gpu() {
        let profile = probe_with_override(Some(GpuType::Amd)).unwrap();
        assert_eq!(profile.gpu, GpuType::Amd);
    }

    #[test]
    fn no_override_keeps_probe_result() {
        let detected = probe().unwrap();
        let profile = probe_with_override(None).unwrap();
        assert_eq!(profile.gpu, detected.gpu);
    }
}
