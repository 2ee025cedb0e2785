//! Starter-kit checkout management.

use std::path::Path;

use tracing::info;

use kitup_core::{InstallError, InstallResult};

use crate::command::run_passthrough;

/// Upstream repository holding the Compose stack.
pub const REPO_URL: &str = "https://github.com/n8n-io/self-hosted-ai-starter-kit.git";
/// Directory the stack is cloned into, relative to the working directory.
pub const DEFAULT_CHECKOUT_DIR: &str = "self-hosted-ai-starter-kit";

/// What `ensure_checkout` did to the working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Cloned,
    Updated,
    Existing,
}

/// Make sure the starter-kit checkout exists, cloning or pulling as needed.
///
/// `update` pulls an existing checkout and is fatal when there is
/// nothing to pull; without it an existing checkout is reused as-is.
pub async fn ensure_checkout(dir: &Path, update: bool) -> InstallResult<CheckoutState> {
    if dir.join(".git").is_dir() {
        if update {
            info!(dir = %dir.display(), "updating existing checkout");
            run_passthrough("git", &["pull", "--ff-only"], Some(dir)).await?;
            return Ok(CheckoutState::Updated);
        }
        info!(dir = %dir.display(), "reusing existing checkout");
        return Ok(CheckoutState::Existing);
    }

    if update {
        return Err(InstallError::CheckoutMissing(dir.to_path_buf()));
    }

    info!(url = REPO_URL, dir = %dir.display(), "cloning starter kit");
    let dir_arg = dir.to_string_lossy();
    run_passthrough("git", &["clone", REPO_URL, dir_arg.as_ref()], None).await?;
    Ok(CheckoutState::Cloned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn update_without_a_checkout_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join(DEFAULT_CHECKOUT_DIR);

        let err = ensure_checkout(&missing, true).await.unwrap_err();
        assert!(matches!(err, InstallError::CheckoutMissing(_)));
    }

    #[tokio::test]
    async fn existing_checkout_is_reused_without_touching_git() {
        let dir = tempdir().unwrap();
        // Fake a checkout; no git invocation must happen on the reuse path
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();

        let state = ensure_checkout(dir.path(), false).await.unwrap();
        assert_eq!(state, CheckoutState::Existing);
    }
}
