//! GPU detection.
//!
//! Evaluation order matters and first match wins: a discrete NVIDIA
//! card beats everything, AMD is only probed on Linux, and ARM64 on a
//! Unix-like host is treated as Apple Silicon (Ollama then runs on the
//! host rather than in a container).

use tracing::debug;

use kitup_core::{GpuType, OperatingSystem};

use crate::command::{probe_output, probe_succeeds};

/// Classify the GPU for this host.
pub fn detect_gpu(os: OperatingSystem, arch: &str) -> GpuType {
    if nvidia_smi_ok() {
        debug!("nvidia-smi answered; classifying GPU as NVIDIA");
        return GpuType::Nvidia;
    }
    if os == OperatingSystem::Linux && rocm_smi_ok() {
        debug!("rocm-smi answered; classifying GPU as AMD");
        return GpuType::Amd;
    }
    if os.is_unix_like() && is_arm64(arch) {
        debug!(%arch, "ARM64 Unix host; classifying as Apple Silicon");
        return GpuType::AppleSilicon;
    }
    GpuType::None
}

fn nvidia_smi_ok() -> bool {
    probe_succeeds("nvidia-smi", &["--list-gpus"])
}

fn rocm_smi_ok() -> bool {
    probe_succeeds("rocm-smi", &["--showid"])
}

pub fn is_arm64(arch: &str) -> bool {
    matches!(arch, "aarch64" | "arm64")
}

/// Whether the container engine exposes the NVIDIA runtime.
///
/// A missing runtime with an NVIDIA GPU present earns an advisory, not
/// a failure: the CPU profile still works.
pub fn docker_advertises_nvidia_runtime() -> bool {
    probe_output("docker", &["info", "--format", "{{json .Runtimes}}"])
        .and_then(|out| serde_json::from_str::<serde_json::Value>(out.trim()).ok())
        .is_some_and(|runtimes| runtimes.get("nvidia").is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm64_spellings_are_recognised() {
        assert!(is_arm64("aarch64"));
        assert!(is_arm64("arm64"));
        assert!(!is_arm64("x86_64"));
    }

    #[test]
    fn detection_always_returns_a_classification() {
        // Whatever hardware the test host has, this must not panic
        let gpu = detect_gpu(OperatingSystem::current(), std::env::consts::ARCH);
        matches!(
            gpu,
            GpuType::None | GpuType::Nvidia | GpuType::Amd | GpuType::AppleSilicon
        );
    }
}
