//! The installation driver.
//!
//! Linear sequence: probe → prerequisites → checkout → configuration →
//! compose pull/up → readiness → summary. Any fatal error stops the
//! run; the handler then prints teardown guidance but never removes
//! anything itself.

use std::path::PathBuf;

use anyhow::Result;

use kitup_core::{
    DeploymentProfile, EnsureOutcome, GpuType, InstallError, Severity, WaitOutcome,
    ensure_env_file, evaluate, first_blocker, starter_kit_endpoints,
};
use kitup_runtime::system::gpu::docker_advertises_nvidia_runtime;
use kitup_runtime::{
    CheckoutState, ComposeAction, ComposeOrchestrator, DEFAULT_CHECKOUT_DIR, ensure_checkout,
    ensure_daemon, gather_requirements, health_client, probe_with_override, wait_for,
};

use super::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};

/// Options resolved from the command line.
pub struct InstallOptions {
    /// GPU type forced by a flag, bypassing detection.
    pub gpu_override: Option<GpuType>,
    /// Pull newer images and restart an existing checkout, nothing else.
    pub update: bool,
}

/// Execute the install command.
pub async fn execute(options: InstallOptions) -> Result<()> {
    match run(options).await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Best-effort cleanup guidance only. Removing volumes deletes
            // user data, so the destructive command is printed, never run.
            eprintln!(
                "{YELLOW}To tear the stack down manually: cd {DEFAULT_CHECKOUT_DIR} && docker compose down{RESET}"
            );
            eprintln!("{YELLOW}Add `-v` to also delete volumes (destroys data).{RESET}");
            Err(e)
        }
    }
}

async fn run(options: InstallOptions) -> Result<()> {
    // Probe the host once; everything downstream reads this snapshot.
    let profile = probe_with_override(options.gpu_override)?;
    println!(
        "{BOLD}Host:{RESET} {} / {}, {} GiB RAM, {} GiB free disk, GPU: {}",
        profile.os, profile.arch, profile.total_memory_gib, profile.available_disk_gib, profile.gpu
    );

    // Prerequisites; a missing or outdated tool stops the run before
    // anything is cloned or written.
    let requirements = gather_requirements();
    let report = evaluate(&requirements, &profile);
    for detail in &report.details {
        match detail.severity {
            Severity::Pass => println!("  {GREEN}✓{RESET} {}", detail.message),
            Severity::Warn => println!("  {YELLOW}⚠{RESET} {}", detail.message),
            Severity::Fail => println!("  {RED}✗{RESET} {}", detail.message),
        }
    }
    if let Some(blocker) = first_blocker(&requirements) {
        return Err(blocker.into());
    }
    ensure_daemon()?;

    if profile.gpu == GpuType::Nvidia && !docker_advertises_nvidia_runtime() {
        println!(
            "  {YELLOW}⚠{RESET} Docker does not expose the nvidia runtime; containers will not see the GPU until the NVIDIA Container Toolkit is installed"
        );
    }

    let deployment = DeploymentProfile::from_gpu(profile.gpu);
    println!("{BOLD}Deployment profile:{RESET} {deployment}");

    // Checkout
    let checkout = PathBuf::from(DEFAULT_CHECKOUT_DIR);
    let state = ensure_checkout(&checkout, options.update).await?;
    match state {
        CheckoutState::Cloned => println!("  {GREEN}✓{RESET} Cloned starter kit into {DEFAULT_CHECKOUT_DIR}"),
        CheckoutState::Updated => println!("  {GREEN}✓{RESET} Updated existing checkout"),
        CheckoutState::Existing => println!("  {GREEN}✓{RESET} Reusing existing checkout"),
    }

    let orchestrator = ComposeOrchestrator::new(&checkout, deployment);

    // Update mode: pull newer images, restart, done.
    if options.update {
        orchestrator.apply(ComposeAction::Pull).await?;
        orchestrator.apply(ComposeAction::Up).await?;
        println!("\n{GREEN}{BOLD}✓ Stack updated and restarted.{RESET}");
        return Ok(());
    }

    // Configuration
    let (_, outcome) = ensure_env_file(&checkout.join(".env"), profile.gpu)?;
    match outcome {
        EnsureOutcome::Created => println!("  {GREEN}✓{RESET} Created .env with a generated encryption key"),
        EnsureOutcome::Patched => println!("  {GREEN}✓{RESET} Pointed OLLAMA_HOST at the host-local Ollama"),
        EnsureOutcome::Unchanged => println!("  {GREEN}✓{RESET} Existing .env left untouched"),
    }

    // Start services
    orchestrator.apply(ComposeAction::Pull).await?;
    orchestrator.apply(ComposeAction::Up).await?;

    // Readiness
    let client = health_client()?;
    let mut degraded = false;
    for endpoint in starter_kit_endpoints() {
        println!(
            "  Waiting up to {}s for {} at {}...",
            endpoint.timeout_secs, endpoint.service, endpoint.url
        );
        match wait_for(&client, &endpoint).await {
            WaitOutcome::Ready => {
                println!("  {GREEN}✓{RESET} {} is ready", endpoint.service);
            }
            WaitOutcome::TimedOut if endpoint.required => {
                return Err(InstallError::ReadinessTimeout {
                    service: endpoint.service,
                    waited_secs: endpoint.timeout_secs,
                }
                .into());
            }
            WaitOutcome::TimedOut => {
                println!(
                    "  {YELLOW}⚠{RESET} {} not ready after {}s; continuing anyway",
                    endpoint.service, endpoint.timeout_secs
                );
                degraded = true;
            }
        }
    }

    // Summary
    if degraded {
        println!("\n{YELLOW}{BOLD}✓ Installed, but some optional services are still starting.{RESET}");
    } else {
        println!("\n{GREEN}{BOLD}✓ Installation complete.{RESET}");
    }
    println!("Open {BLUE}http://localhost:5678{RESET} to finish the n8n setup.");
    println!("To stop the stack later: {BLUE}kitup down{RESET}");
    Ok(())
}
