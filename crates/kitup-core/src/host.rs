//! Host classification types.

use std::fmt;

/// Operating system classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Linux,
    MacOs,
    Windows,
    Unknown,
}

impl OperatingSystem {
    /// Classify the operating system this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// Linux and macOS share the Unix-flavoured detection paths.
    pub fn is_unix_like(self) -> bool {
        matches!(self, Self::Linux | Self::MacOs)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// GPU hardware classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuType {
    /// No supported GPU acceleration detected.
    None,
    /// NVIDIA GPU reachable through `nvidia-smi`.
    Nvidia,
    /// AMD GPU reachable through `rocm-smi` (Linux only).
    Amd,
    /// ARM64 Mac with unified memory; Ollama runs on the host instead
    /// of in a container.
    AppleSilicon,
}

impl fmt::Display for GpuType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Nvidia => "NVIDIA",
            Self::Amd => "AMD",
            Self::AppleSilicon => "Apple Silicon",
        };
        f.write_str(name)
    }
}

/// Snapshot of the host taken once at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    pub os: OperatingSystem,
    /// CPU architecture as reported by the toolchain (e.g. "x86_64", "aarch64").
    pub arch: String,
    pub total_memory_gib: u64,
    pub available_disk_gib: u64,
    pub gpu: GpuType,
}

impl HostProfile {
    /// Below this much RAM the stack will run, but badly.
    pub const MIN_MEMORY_GIB: u64 = 4;
    /// Pulled images plus model weights need roughly this much free space.
    pub const MIN_DISK_GIB: u64 = 10;

    /// Resource advisories for this host. Never fatal.
    pub fn resource_advisories(&self) -> Vec<String> {
        let mut advisories = Vec::new();
        if self.total_memory_gib < Self::MIN_MEMORY_GIB {
            advisories.push(format!(
                "Only {} GiB of RAM detected ({} GiB recommended); services may be slow or OOM-killed",
                self.total_memory_gib,
                Self::MIN_MEMORY_GIB
            ));
        }
        if self.available_disk_gib < Self::MIN_DISK_GIB {
            advisories.push(format!(
                "Only {} GiB of free disk detected ({} GiB recommended); image pulls may fail",
                self.available_disk_gib,
                Self::MIN_DISK_GIB
            ));
        }
        advisories
    }
}
