//! `.env` configuration file management.
//!
//! The starter kit is configured through a line-oriented `KEY=VALUE`
//! file with `#` comments and no quoting rules. This module creates it
//! on first run with one generated credential, and applies a single
//! conditional patch for Apple Silicon hosts. Re-running is idempotent:
//! an existing file is never rewritten unless the patch has work to do.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;

use crate::error::{InstallError, InstallResult};
use crate::host::GpuType;

/// Policy floor for generated credentials.
pub const MIN_CREDENTIAL_LEN: usize = 25;
const CREDENTIAL_LEN: usize = 32;

/// Key whose value is patched on Apple Silicon.
pub const OLLAMA_HOST_KEY: &str = "OLLAMA_HOST";
/// Ollama running as a Compose service.
pub const OLLAMA_CONTAINER_HOST: &str = "ollama:11434";
/// Ollama running on the host, reached through Docker's internal alias.
pub const OLLAMA_LOCAL_HOST: &str = "host.docker.internal:11434";

/// One line of the file. Comments and blanks are kept verbatim so that
/// a patched file still looks like the one the user had.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Pair { key: String, value: String },
    Other(String),
}

/// Ordered key/value view of a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    lines: Vec<Line>,
}

impl EnvironmentConfig {
    /// Parse file content. Lines without `=` are preserved untouched.
    pub fn parse(content: &str) -> Self {
        let lines = content
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return Line::Other(line.to_string());
                }
                match line.split_once('=') {
                    Some((key, value)) => Line::Pair {
                        key: key.trim().to_string(),
                        value: value.to_string(),
                    },
                    None => Line::Other(line.to_string()),
                }
            })
            .collect();
        Self { lines }
    }

    /// Render back to file content with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Pair { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
                Line::Other(text) => out.push_str(text),
            }
            out.push('\n');
        }
        out
    }

    /// Value of the first occurrence of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Rewrite the Ollama host for Apple Silicon hosts.
    ///
    /// Returns true when a line was changed. If the patched value is
    /// already present anywhere the file is left alone, so a file that
    /// was patched on a previous run (or carries the container host
    /// line more than once) is never touched twice.
    fn patch_ollama_host(&mut self) -> bool {
        let already_patched = self.lines.iter().any(|line| {
            matches!(line, Line::Pair { key, value }
                if key == OLLAMA_HOST_KEY && value.trim() == OLLAMA_LOCAL_HOST)
        });
        if already_patched {
            return false;
        }

        for line in &mut self.lines {
            if let Line::Pair { key, value } = line
                && key == OLLAMA_HOST_KEY
                && value.trim() == OLLAMA_CONTAINER_HOST
            {
                *value = OLLAMA_LOCAL_HOST.to_string();
                return true;
            }
        }
        false
    }

    /// The template written on first run. Everything except the
    /// encryption key is a fixed default the user is expected to edit.
    pub fn template(credential: &str) -> Self {
        let content = format!(
            "# Generated by kitup. Edit freely; kitup never overwrites this file.\n\
             \n\
             # Postgres\n\
             POSTGRES_USER=root\n\
             POSTGRES_PASSWORD=password\n\
             POSTGRES_DB=n8n\n\
             \n\
             # n8n\n\
             N8N_ENCRYPTION_KEY={credential}\n\
             N8N_USER_MANAGEMENT_JWT_SECRET=even-more-secret\n\
             \n\
             # Ollama\n\
             {OLLAMA_HOST_KEY}={OLLAMA_CONTAINER_HOST}\n"
        );
        Self::parse(&content)
    }
}

/// How `ensure_env_file` left the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created,
    Patched,
    Unchanged,
}

/// Generate a credential: 32 alphanumeric characters from the OS RNG.
///
/// Alphanumeric-only keeps the value safe to paste into a `KEY=VALUE`
/// line (no `=`, `+` or `/`).
pub fn generate_credential() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(CREDENTIAL_LEN)
        .map(char::from)
        .collect()
}

/// Ensure the configuration file exists and is patched for this host.
///
/// An existing file is left untouched except for the Apple Silicon
/// Ollama host patch; a missing file is synthesized from the template.
pub fn ensure_env_file(
    path: &Path,
    gpu: GpuType,
) -> InstallResult<(EnvironmentConfig, EnsureOutcome)> {
    let write = |config: &EnvironmentConfig| -> InstallResult<()> {
        fs::write(path, config.render()).map_err(|e| InstallError::ConfigWriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    };

    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| InstallError::ConfigWriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut config = EnvironmentConfig::parse(&content);

        if gpu == GpuType::AppleSilicon && config.patch_ollama_host() {
            write(&config)?;
            return Ok((config, EnsureOutcome::Patched));
        }
        return Ok((config, EnsureOutcome::Unchanged));
    }

    let mut config = EnvironmentConfig::template(&generate_credential());
    if gpu == GpuType::AppleSilicon {
        config.patch_ollama_host();
    }
    write(&config)?;
    Ok((config, EnsureOutcome::Created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn credential_meets_length_and_charset_policy() {
        for _ in 0..32 {
            let credential = generate_credential();
            assert!(credential.len() >= MIN_CREDENTIAL_LEN);
            assert!(credential.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn first_run_creates_the_file_with_required_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");

        let (config, outcome) = ensure_env_file(&path, GpuType::None).unwrap();
        assert_eq!(outcome, EnsureOutcome::Created);
        assert!(path.exists());

        assert_eq!(config.get("POSTGRES_DB"), Some("n8n"));
        assert_eq!(config.get(OLLAMA_HOST_KEY), Some(OLLAMA_CONTAINER_HOST));
        assert!(config.get("N8N_ENCRYPTION_KEY").unwrap().len() >= MIN_CREDENTIAL_LEN);
    }

    #[test]
    fn second_run_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");

        ensure_env_file(&path, GpuType::None).unwrap();
        let first = fs::read(&path).unwrap();

        let (_, outcome) = ensure_env_file(&path, GpuType::None).unwrap();
        assert_eq!(outcome, EnsureOutcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn existing_file_is_never_regenerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "POSTGRES_PASSWORD=mine\n").unwrap();

        let (config, outcome) = ensure_env_file(&path, GpuType::None).unwrap();
        assert_eq!(outcome, EnsureOutcome::Unchanged);
        assert_eq!(config.get("POSTGRES_PASSWORD"), Some("mine"));
        // Missing keys are not filled in behind the user's back
        assert!(config.get("N8N_ENCRYPTION_KEY").is_none());
    }

    #[test]
    fn apple_silicon_patches_the_ollama_host_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OLLAMA_HOST=ollama:11434\n").unwrap();

        let (config, outcome) = ensure_env_file(&path, GpuType::AppleSilicon).unwrap();
        assert_eq!(outcome, EnsureOutcome::Patched);
        assert_eq!(config.get(OLLAMA_HOST_KEY), Some(OLLAMA_LOCAL_HOST));

        let (_, outcome) = ensure_env_file(&path, GpuType::AppleSilicon).unwrap();
        assert_eq!(outcome, EnsureOutcome::Unchanged);
    }

    #[test]
    fn duplicated_host_line_is_patched_once_and_then_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OLLAMA_HOST=ollama:11434\nOLLAMA_HOST=ollama:11434\n").unwrap();

        let (_, outcome) = ensure_env_file(&path, GpuType::AppleSilicon).unwrap();
        assert_eq!(outcome, EnsureOutcome::Patched);
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches(OLLAMA_LOCAL_HOST).count(), 1);
        assert_eq!(content.matches(OLLAMA_CONTAINER_HOST).count(), 1);

        // Second run sees the patched value and keeps its hands off
        let before = fs::read(&path).unwrap();
        let (_, outcome) = ensure_env_file(&path, GpuType::AppleSilicon).unwrap();
        assert_eq!(outcome, EnsureOutcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn patch_preserves_comments_and_unrelated_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# my notes\nPOSTGRES_DB=custom\n\nOLLAMA_HOST=ollama:11434\n",
        )
        .unwrap();

        ensure_env_file(&path, GpuType::AppleSilicon).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# my notes\n"));
        assert!(content.contains("POSTGRES_DB=custom\n"));
        assert!(content.contains("\n\n"));
    }

    #[test]
    fn unwritable_directory_is_a_config_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join(".env");

        let err = ensure_env_file(&path, GpuType::None).unwrap_err();
        assert!(matches!(err, InstallError::ConfigWriteError { .. }));
    }
}
