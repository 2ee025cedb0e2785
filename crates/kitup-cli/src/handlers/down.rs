//! Stop the running stack.

use std::path::PathBuf;

use anyhow::Result;

use kitup_core::{DeploymentProfile, InstallError};
use kitup_runtime::{ComposeAction, ComposeOrchestrator, DEFAULT_CHECKOUT_DIR, probe};

use super::{GREEN, RESET, YELLOW};

/// Execute the down command. Containers stop; volumes stay.
pub async fn execute() -> Result<()> {
    let checkout = PathBuf::from(DEFAULT_CHECKOUT_DIR);
    if !checkout.join(".git").is_dir() {
        return Err(InstallError::CheckoutMissing(checkout).into());
    }

    let profile = probe()?;
    let orchestrator =
        ComposeOrchestrator::new(&checkout, DeploymentProfile::from_gpu(profile.gpu));
    orchestrator.apply(ComposeAction::Down).await?;

    println!("{GREEN}✓ Stack stopped.{RESET}");
    println!(
        "{YELLOW}To also delete volumes (destroys data): cd {DEFAULT_CHECKOUT_DIR} && {}{RESET}",
        orchestrator.teardown_hint()
    );
    Ok(())
}
