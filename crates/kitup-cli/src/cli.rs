//! Argument definitions.

use clap::{Args, Parser, Subcommand};

use kitup_core::GpuType;

/// Installer for the n8n self-hosted AI starter kit.
#[derive(Parser)]
#[command(name = "kitup", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Install and start the self-hosted AI starter kit
    Install(InstallArgs),

    /// Check host prerequisites without changing anything
    Check,

    /// Stop the running stack (named volumes are kept)
    Down,
}

/// Flags for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Force the NVIDIA GPU profile regardless of detection
    #[arg(long = "gpu-nvidia", conflicts_with_all = ["gpu_amd", "cpu"])]
    pub gpu_nvidia: bool,

    /// Force the AMD GPU profile regardless of detection (Linux only)
    #[arg(long = "gpu-amd", conflicts_with_all = ["gpu_nvidia", "cpu"])]
    pub gpu_amd: bool,

    /// Force the CPU-only profile regardless of detection
    #[arg(long, conflicts_with_all = ["gpu_nvidia", "gpu_amd"])]
    pub cpu: bool,

    /// Only pull newer images and restart an existing checkout
    #[arg(long)]
    pub update: bool,
}

impl InstallArgs {
    /// GPU type forced by flags, if any.
    pub fn gpu_override(&self) -> Option<GpuType> {
        if self.gpu_nvidia {
            Some(GpuType::Nvidia)
        } else if self.gpu_amd {
            Some(GpuType::Amd)
        } else if self.cpu {
            Some(GpuType::None)
        } else {
            None
        }
    }
}
