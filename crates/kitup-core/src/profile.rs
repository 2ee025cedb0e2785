//! Compose deployment profile selection.

use std::fmt;

use crate::host::GpuType;

/// Named subset of services selected for a hardware class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentProfile {
    /// CPU-only Ollama container.
    Cpu,
    /// NVIDIA GPU passthrough.
    GpuNvidia,
    /// AMD GPU passthrough (Linux only).
    GpuAmd,
    /// Compose's own default service selection; used on Apple Silicon
    /// where Ollama runs on the host.
    Default,
}

impl DeploymentProfile {
    /// Derive the profile from the detected GPU. Total and deterministic:
    /// anything that is not a supported GPU falls back to CPU.
    pub fn from_gpu(gpu: GpuType) -> Self {
        match gpu {
            GpuType::Nvidia => Self::GpuNvidia,
            GpuType::Amd => Self::GpuAmd,
            GpuType::AppleSilicon => Self::Default,
            GpuType::None => Self::Cpu,
        }
    }

    /// Value passed to `docker compose --profile`.
    ///
    /// The default profile intentionally runs without a profile flag and
    /// relies on Compose's own default service selection, matching the
    /// upstream starter-kit instructions for Apple Silicon.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Self::Cpu => Some("cpu"),
            Self::GpuNvidia => Some("gpu-nvidia"),
            Self::GpuAmd => Some("gpu-amd"),
            Self::Default => None,
        }
    }
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag().unwrap_or("default"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total_and_deterministic() {
        let cases = [
            (GpuType::None, DeploymentProfile::Cpu),
            (GpuType::Nvidia, DeploymentProfile::GpuNvidia),
            (GpuType::Amd, DeploymentProfile::GpuAmd),
            (GpuType::AppleSilicon, DeploymentProfile::Default),
        ];
        for (gpu, expected) in cases {
            assert_eq!(DeploymentProfile::from_gpu(gpu), expected);
            // Same input, same output
            assert_eq!(DeploymentProfile::from_gpu(gpu), DeploymentProfile::from_gpu(gpu));
        }
    }

    #[test]
    fn only_the_default_profile_omits_the_flag() {
        assert_eq!(DeploymentProfile::Cpu.flag(), Some("cpu"));
        assert_eq!(DeploymentProfile::GpuNvidia.flag(), Some("gpu-nvidia"));
        assert_eq!(DeploymentProfile::GpuAmd.flag(), Some("gpu-amd"));
        assert_eq!(DeploymentProfile::Default.flag(), None);
    }
}
